use chart_slug::core::encode_fragment;

#[test]
fn structural_characters_pass_through() {
    assert_eq!(encode_fragment("()"), "()");
    assert_eq!(encode_fragment("!(a,b):'c'"), "!(a,b):'c'");
}

#[test]
fn fragment_unsafe_characters_are_escaped() {
    assert_eq!(encode_fragment("a b"), "a%20b");
    assert_eq!(encode_fragment("a\"b"), "a%22b");
    assert_eq!(encode_fragment("a#b"), "a%23b");
    assert_eq!(encode_fragment("a%b"), "a%25b");
    assert_eq!(encode_fragment("<>`"), "%3C%3E%60");
    assert_eq!(encode_fragment("[\\]^{|}"), "%5B%5C%5D%5E%7B%7C%7D");
}

#[test]
fn non_ascii_is_utf8_percent_encoded() {
    assert_eq!(encode_fragment("café"), "caf%C3%A9");
}
