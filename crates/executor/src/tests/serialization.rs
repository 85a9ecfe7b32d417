//! Wire format of Command, Output and request parameters.

use crate::{Command, EntityId, EntityKind, GroupId, MemberRecord, Output, SearchParams, UserId};
use serde_json::json;

#[test]
fn test_search_command_json_shape() {
    let cmd = Command::Search {
        caller: UserId::from("u1"),
        group: GroupId::from("g1"),
        kind: EntityKind::Member,
        query: "iv".into(),
        limit: None,
    };
    assert_eq!(
        serde_json::to_value(&cmd).unwrap(),
        json!({"Search": {"caller": "u1", "group": "g1", "kind": "member", "query": "iv"}})
    );
}

#[test]
fn test_command_from_json() {
    let cmd: Command = serde_json::from_value(json!({
        "MemberJoined": {
            "group": "g1",
            "member": {"id": "u2", "username": "bwayne", "display_name": "Bruce"}
        }
    }))
    .unwrap();
    assert_eq!(
        cmd,
        Command::MemberJoined {
            group: GroupId::from("g1"),
            member: MemberRecord::new("u2", "bwayne").with_display_name("Bruce"),
        }
    );
}

#[test]
fn test_command_rejects_unknown_fields() {
    let result: Result<Command, _> = serde_json::from_value(json!({
        "Reindex": {"caller": "u1", "group": "g1", "force": true}
    }));
    assert!(result.is_err());
}

#[test]
fn test_command_rejects_unknown_kind() {
    let result: Result<Command, _> = serde_json::from_value(json!({
        "Search": {"caller": "u1", "group": "g1", "kind": "board", "query": "x"}
    }));
    assert!(result.is_err());
}

#[test]
fn test_output_json_shape() {
    assert_eq!(
        serde_json::to_value(Output::Ids(vec![EntityId::from("u1")])).unwrap(),
        json!({"Ids": ["u1"]})
    );
    assert_eq!(
        serde_json::to_value(Output::Reindexed {
            members: 3,
            tags: 2
        })
        .unwrap(),
        json!({"Reindexed": {"members": 3, "tags": 2}})
    );
}

#[test]
fn test_search_params_use_type_key() {
    let params: SearchParams =
        serde_json::from_value(json!({"type": "tag", "q": "urg", "limit": "5"})).unwrap();
    assert_eq!(params.kind.as_deref(), Some("tag"));

    let cmd = params
        .into_command(UserId::from("u1"), GroupId::from("g1"))
        .unwrap();
    assert!(matches!(
        cmd,
        Command::Search {
            kind: EntityKind::Tag,
            limit: Some(5),
            ..
        }
    ));
}

#[test]
fn test_error_serializes() {
    let err = crate::Error::Forbidden {
        group: "g1".into(),
    };
    let restored: crate::Error =
        serde_json::from_str(&serde_json::to_string(&err).unwrap()).unwrap();
    assert_eq!(restored, err);
}
