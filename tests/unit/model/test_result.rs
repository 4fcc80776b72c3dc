use assert_json_diff::assert_json_eq;
use libawesome_client::error::ClientError;
use libawesome_client::model::auth::SessionToken;
use libawesome_client::model::result::OperationResult;
use serde_json::json;
use std::collections::BTreeMap;

#[test]
fn test_serializes_to_legacy_map() {
    let ok = OperationResult::Success("tok".to_string());
    assert_json_eq!(serde_json::to_value(&ok).unwrap(), json!({"success": "tok"}));

    let err = OperationResult::Error("Invalid username or password".to_string());
    assert_json_eq!(
        serde_json::to_value(&err).unwrap(),
        json!({"error": "Invalid username or password"})
    );
}

#[test]
fn test_deserializes_single_key_map() {
    let parsed: OperationResult = serde_json::from_str(r#"{"error":"nope"}"#).unwrap();
    assert_eq!(parsed, OperationResult::Error("nope".to_string()));
}

#[test]
fn test_from_legacy_without_keys_is_unknown_error() {
    let map = BTreeMap::new();
    assert_eq!(
        OperationResult::from_legacy(&map).unwrap(),
        OperationResult::Error("Unknown error".to_string())
    );
}

#[test]
fn test_from_legacy_with_both_keys_is_rejected() {
    let map = BTreeMap::from([
        ("success".to_string(), "tok".to_string()),
        ("error".to_string(), "nope".to_string()),
    ]);
    assert!(matches!(
        OperationResult::from_legacy(&map),
        Err(ClientError::UnrecognizedResponse(_))
    ));
}

#[test]
fn test_to_legacy_has_one_entry() {
    let map = OperationResult::Success("tok".to_string()).to_legacy();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("success").map(String::as_str), Some("tok"));
    assert_eq!(
        OperationResult::from_legacy(&map).unwrap(),
        OperationResult::Success("tok".to_string())
    );
}

#[test]
fn test_from_results() {
    let login: OperationResult = Ok::<_, ClientError>(SessionToken::new("t")).into();
    assert!(login.is_success());
    assert_eq!(login.success(), Some("t"));
    assert_eq!(login.error(), None);

    let delete: OperationResult = Err::<(), _>(ClientError::NotFound("Not found.".into())).into();
    assert!(!delete.is_success());
    assert_eq!(delete.error(), Some("Not found."));
}
