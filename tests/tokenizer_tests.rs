use lxfmt::parser::tokenize;
use lxfmt::Token;

fn shape(tokens: &[Token]) -> Vec<(&str, bool)> {
    tokens.iter().map(|t| (t.text(), t.is_literal())).collect()
}

#[test]
fn test_empty_pattern() {
    assert!(tokenize("").is_empty());
}

#[test]
fn test_iso_date() {
    let tokens = tokenize("yyyy-MM-dd");
    assert_eq!(
        shape(&tokens),
        vec![
            ("yyyy", false),
            ("-", true),
            ("MM", false),
            ("-", true),
            ("dd", false)
        ]
    );
}

#[test]
fn test_quoted_literal_before_time() {
    let tokens = tokenize("'T'HH:mm");
    assert_eq!(
        shape(&tokens),
        vec![("T", true), ("HH", false), (":", true), ("mm", false)]
    );
}

#[test]
fn test_quoted_text_is_not_grouped() {
    let tokens = tokenize("'hh mm'");
    assert_eq!(shape(&tokens), vec![("hh mm", true)]);
}

#[test]
fn test_empty_quotes_emit_nothing() {
    assert!(tokenize("''").is_empty());
    assert_eq!(shape(&tokenize("a''a")), vec![("a", false), ("a", false)]);
}

#[test]
fn test_unterminated_quote_makes_tail_literal() {
    let tokens = tokenize("HH 'at mm");
    assert_eq!(
        shape(&tokens),
        vec![("HH", false), (" ", true), ("at mm", true)]
    );
}

#[test]
fn test_runs_split_on_character_change() {
    let tokens = tokenize("yyyyMMdd");
    assert_eq!(
        shape(&tokens),
        vec![("yyyy", false), ("MM", false), ("dd", false)]
    );
}

#[test]
fn test_unicode_is_scanned_by_scalar() {
    let tokens = tokenize("d日M月");
    assert_eq!(
        shape(&tokens),
        vec![("d", false), ("日", true), ("M", false), ("月", true)]
    );
    assert_eq!(tokens[2].start(), 2);
}

#[test]
fn test_non_letter_runs_are_literal() {
    let tokens = tokenize("HH::mm");
    assert_eq!(
        shape(&tokens),
        vec![("HH", false), ("::", true), ("mm", false)]
    );
}
