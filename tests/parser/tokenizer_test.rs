use gedcom_audit::parser::{Level, Tokenizer, tokenize};
use gedcom_audit::AuditError;

#[test]
fn test_tokenize_record_opening() {
    let token = tokenize(1, "0 @I1@ INDI").unwrap().unwrap();
    assert_eq!(token.level, Level::Record);
    assert_eq!(token.tag, "@I1@");
    assert_eq!(token.value.as_deref(), Some("INDI"));
}

#[test]
fn test_invalid_level_reports_position() {
    let err = Tokenizer::new("0 HEAD\n0 @I1@ INDI\n5 NAME Bad\n")
        .find_map(Result::err)
        .unwrap();
    assert!(matches!(err, AuditError::InvalidLine { line: 3, .. }));
}

#[test]
fn test_windows_line_endings() {
    let tokens: Vec<_> = Tokenizer::new("0 HEAD\r\n1 NAME A /B/\r\n")
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].value.as_deref(), Some("A /B/"));
}
