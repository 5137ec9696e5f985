use super::*;

#[test]
fn test_grammar_mismatch_display_carries_line() {
    let err = ParseError::GrammarMismatch {
        line: "Mystery Box: Sword".to_string(),
    };
    assert_eq!(err.to_string(), "Unparseable line: Mystery Box: Sword");
}

#[test]
fn test_scout_error_from_parse_error_is_transparent() {
    let err: ScoutError = ParseError::GrammarMismatch {
        line: "oops".to_string(),
    }
    .into();

    match &err {
        ScoutError::Parse(ParseError::GrammarMismatch { line }) => assert_eq!(line, "oops"),
        _ => panic!("Expected ScoutError::Parse"),
    }
    assert_eq!(err.to_string(), "Unparseable line: oops");
}

#[test]
fn test_scout_error_from_config_error_is_transparent() {
    let err: ScoutError = ConfigError::InvalidThreshold(150).into();
    assert!(matches!(
        err,
        ScoutError::Config(ConfigError::InvalidThreshold(150))
    ));
    assert_eq!(
        err.to_string(),
        "Fuzzy threshold must be within 0..=100, got 150"
    );
}

#[test]
fn test_fetch_status_display() {
    let err = FetchError::Status {
        url: "https://archipelago.gg/api/tracker/abc".to_string(),
        status: 404,
    };
    assert_eq!(
        err.to_string(),
        "HTTP 404 while downloading https://archipelago.gg/api/tracker/abc"
    );
}
