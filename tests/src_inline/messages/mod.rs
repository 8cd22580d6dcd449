use super::*;

fn message(id: &str, date_end: i64, show_condition: Option<Vec<&str>>) -> UserMessage {
    UserMessage {
        id: id.to_string(),
        date_start: None,
        date_end,
        content: format!("content of {id}"),
        show_condition: show_condition.map(|v| v.into_iter().map(str::to_string).collect()),
    }
}

#[test]
fn test_message_key() {
    assert_eq!(message_key("2023_qval_change"), "portalMessageKey-2023_qval_change");
}

#[test]
fn test_first_unseen_message_is_shown() {
    let messages = vec![message("a", 1_000, None), message("b", 1_000, None)];
    let local = MemoryStore::new();
    let session = MemoryStore::new();
    let shown = shown_message(&messages, 10, "/results", &local, &session).unwrap();
    assert_eq!(shown.map(|m| m.id.as_str()), Some("a"));
}

#[test]
fn test_dismissed_and_reminded_messages_are_skipped() {
    let messages = vec![
        message("a", 1_000, None),
        message("b", 1_000, None),
        message("c", 1_000, None),
    ];
    let mut local = MemoryStore::new();
    let mut session = MemoryStore::new();
    dismiss(&messages[0], &mut local);
    remind(&messages[1], &mut session);
    assert_eq!(local.get(&message_key("a")).as_deref(), Some("shown"));
    assert!(local.get(&message_key("b")).is_none());
    assert_eq!(session.get(&message_key("b")).as_deref(), Some("shown"));
    let shown = shown_message(&messages, 10, "/", &local, &session).unwrap();
    assert_eq!(shown.map(|m| m.id.as_str()), Some("c"));

    apply_action(MessageAction::Dismiss, &messages[2], &mut local, &mut session);
    assert!(shown_message(&messages, 10, "/", &local, &session).unwrap().is_none());
}

#[test]
fn test_expired_and_not_started() {
    let mut future = message("future", 5_000, None);
    future.date_start = Some(2_000);
    let messages = vec![message("old", 100, None), future];
    let local = MemoryStore::new();
    let session = MemoryStore::new();
    assert!(shown_message(&messages, 1_000, "/", &local, &session).unwrap().is_none());
    let shown = shown_message(&messages, 3_000, "/", &local, &session).unwrap();
    assert_eq!(shown.map(|m| m.id.as_str()), Some("future"));
}

#[test]
fn test_show_condition_is_case_insensitive() {
    let messages = vec![message(
        "qval",
        i64::MAX,
        Some(vec![r"comparison_subtab=alterations", r"results/mutualExclusivity"]),
    )];
    let local = MemoryStore::new();
    let session = MemoryStore::new();
    assert!(
        shown_message(&messages, 0, "/RESULTS/MUTUALEXCLUSIVITY?x=1", &local, &session)
            .unwrap()
            .is_some()
    );
    assert!(
        shown_message(&messages, 0, "/results/oncoprint", &local, &session)
            .unwrap()
            .is_none()
    );
}

#[test]
fn test_bad_pattern_is_an_error() {
    let messages = vec![message("bad", i64::MAX, Some(vec!["("]))];
    let local = MemoryStore::new();
    let session = MemoryStore::new();
    assert!(matches!(
        shown_message(&messages, 0, "/", &local, &session),
        Err(MessageError::Pattern { .. })
    ));
}

#[test]
fn test_action_parsing() {
    assert_eq!("remind".parse::<MessageAction>().unwrap(), MessageAction::Remind);
    assert_eq!("dismiss".parse::<MessageAction>().unwrap(), MessageAction::Dismiss);
    assert!("close".parse::<MessageAction>().is_err());
}
