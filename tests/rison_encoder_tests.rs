use chart_slug::core::{RisonValue, encode, is_bare_safe};

#[test]
fn scalars_render_as_literals() {
    assert_eq!(encode(&RisonValue::Int(42)), "42");
    assert_eq!(encode(&RisonValue::Int(-7)), "-7");
    assert_eq!(encode(&RisonValue::Bool(true)), "true");
    assert_eq!(encode(&RisonValue::Bool(false)), "false");
}

#[test]
fn safe_strings_stay_bare() {
    assert_eq!(encode(&RisonValue::str("cpu.load")), "cpu.load");
    assert_eq!(encode(&RisonValue::str("req/s")), "req/s");
    assert_eq!(encode(&RisonValue::str("host-01_a")), "host-01_a");
}

#[test]
fn reserved_characters_force_quoting() {
    assert_eq!(encode(&RisonValue::str("ts(cpu.load)")), "'ts(cpu.load)'");
    assert_eq!(encode(&RisonValue::str("a,b")), "'a,b'");
    assert_eq!(encode(&RisonValue::str("a:b")), "'a:b'");
    assert_eq!(encode(&RisonValue::str("two words")), "'two words'");
}

#[test]
fn quote_and_bang_are_escaped() {
    assert_eq!(encode(&RisonValue::str("it's!")), "'it!'s!!'");
    assert_eq!(encode(&RisonValue::str("!!")), "'!!!!'");
}

#[test]
fn empty_string_is_quoted() {
    assert_eq!(encode(&RisonValue::str("")), "''");
}

#[test]
fn literal_lookalikes_are_quoted() {
    assert_eq!(encode(&RisonValue::str("true")), "'true'");
    assert_eq!(encode(&RisonValue::str("false")), "'false'");
    assert_eq!(encode(&RisonValue::str("123")), "'123'");
    assert_eq!(encode(&RisonValue::str("-42")), "'-42'");
}

#[test]
fn lists_keep_element_order() {
    let list = RisonValue::List(vec![
        RisonValue::Int(1),
        RisonValue::str("a"),
        RisonValue::Bool(false),
    ]);
    assert_eq!(encode(&list), "!(1,a,false)");
    assert_eq!(encode(&RisonValue::List(vec![])), "!()");
}

#[test]
fn objects_render_entries_in_map_order() {
    let object = RisonValue::object([
        ("d", RisonValue::Int(4_000)),
        ("s", RisonValue::Int(1_000)),
    ]);
    assert_eq!(encode(&object), "(d:4000,s:1000)");
    assert_eq!(encode(&RisonValue::object([])), "()");
}

#[test]
fn nested_structures_compose() {
    let nested = RisonValue::object([
        ("n", RisonValue::str("cpu")),
        ("t", RisonValue::object([("s", RisonValue::Int(0))])),
        ("h", RisonValue::List(vec![RisonValue::str("web01")])),
    ]);
    assert_eq!(encode(&nested), "(n:cpu,t:(s:0),h:!(web01))");
}

#[test]
fn encoding_is_deterministic() {
    let value = RisonValue::object([
        ("q", RisonValue::str("ts(cpu.load)")),
        ("d", RisonValue::Bool(true)),
    ]);
    assert_eq!(encode(&value), encode(&value));
}

#[test]
fn bare_safety_predicate() {
    assert!(is_bare_safe("abc"));
    assert!(is_bare_safe("a_b-c.d/e"));
    assert!(is_bare_safe("1d"));

    assert!(!is_bare_safe(""));
    assert!(!is_bare_safe("a b"));
    assert!(!is_bare_safe("a:b"));
    assert!(!is_bare_safe("a!b"));
    assert!(!is_bare_safe("a'b"));
    assert!(!is_bare_safe("(x)"));
    assert!(!is_bare_safe("true"));
    assert!(!is_bare_safe("false"));
    assert!(!is_bare_safe("12"));
    assert!(!is_bare_safe("-12"));
    assert!(!is_bare_safe("café"));
}
