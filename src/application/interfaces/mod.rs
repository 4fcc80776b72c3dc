/// Session (login) service interface
pub mod session;
/// Book mutation service interface
pub mod book;
