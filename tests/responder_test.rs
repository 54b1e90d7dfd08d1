use marquee::responder::rules::{FALLBACK_REPLY, HELLO_REPLY, PRICE_REPLY, TICKET_REPLY};
use marquee::responder::{ChatRule, Responder, RuleBook};

#[test]
fn ticket_question() {
    assert_eq!(RuleBook::builtin().respond("how do I buy a ticket"), TICKET_REPLY);
}

#[test]
fn unknown_input_gets_exact_fallback() {
    assert_eq!(RuleBook::builtin().respond("asdfgh"), FALLBACK_REPLY);
}

#[test]
fn responses_are_deterministic() {
    let book = RuleBook::builtin();
    for utterance in ["what does it cost?", "HELLO", "", "zzz"] {
        assert_eq!(book.respond(utterance), book.respond(utterance));
    }
    assert_eq!(book.respond("what does it cost?"), PRICE_REPLY);
    assert_eq!(book.respond("HELLO"), HELLO_REPLY);
}

#[test]
fn table_order_decides_between_matches() {
    let forward = RuleBook::new(
        vec![
            ChatRule::new(&["ticket"], "tickets"),
            ChatRule::new(&["location"], "locations"),
        ],
        "fallback",
    );
    let reversed = RuleBook::new(
        vec![
            ChatRule::new(&["location"], "locations"),
            ChatRule::new(&["ticket"], "tickets"),
        ],
        "fallback",
    );
    let utterance = "ticket location";
    assert_eq!(forward.respond(utterance), "tickets");
    assert_eq!(reversed.respond(utterance), "locations");
}

#[test]
fn rules_load_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rules.json");
    std::fs::write(
        &path,
        r#"{"rules": [{"keywords": ["parking"], "response": "Lot B."}], "fallback": "Ask staff."}"#,
    )
    .unwrap();

    let book = RuleBook::load(&path).unwrap();
    assert_eq!(book.rule_count(), 1);
    assert_eq!(book.respond("Where is PARKING?"), "Lot B.");
    assert_eq!(book.respond("restrooms"), "Ask staff.");
}

#[test]
fn missing_rules_file_names_the_path() {
    let err = RuleBook::load(std::path::Path::new("/nonexistent/rules.json")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/rules.json"));
}
