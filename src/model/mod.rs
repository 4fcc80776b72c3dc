/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Credentials, session token and token parsing
pub mod auth;
/// HTTP request plumbing shared by the clients
pub mod http;
/// Two-branch outcome handed to UI collaborators
pub mod result;
