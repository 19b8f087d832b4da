use routeros_wire::{record, FieldKind, Record, Value};

record! {
    /// Firewall filter rule, trimmed to a few representative fields.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct IpFirewallFilter {
        pub id: String => ".id",
        pub chain: String => "chain",
        pub action: String => "action",
        pub dst_port: String => "dst-port",
        pub log: bool => "log",
        pub bytes: u64 => "bytes",
        pub comment: String,
    }
}

record! {
    #[derive(Debug, Default)]
    struct Empty {}
}

record! {
    #[derive(Debug, Default)]
    pub(crate) struct Trailing {
        pub(crate) name: String => "name"
    }
}

#[test]
fn test_descriptor_order_matches_declaration() {
    let names: Vec<_> = IpFirewallFilter::descriptors()
        .iter()
        .map(|d| d.name)
        .collect();
    assert_eq!(
        names,
        vec!["id", "chain", "action", "dst_port", "log", "bytes", "comment"]
    );
}

#[test]
fn test_descriptor_kinds_follow_field_types() {
    let kinds: Vec<_> = IpFirewallFilter::descriptors()
        .iter()
        .map(|d| d.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            FieldKind::String,
            FieldKind::String,
            FieldKind::String,
            FieldKind::String,
            FieldKind::Bool,
            FieldKind::Integer,
            FieldKind::String,
        ]
    );
}

#[test]
fn test_untagged_field_uses_lowercase_name() {
    let comment = IpFirewallFilter::descriptors()
        .iter()
        .find(|d| d.name == "comment")
        .unwrap();
    assert_eq!(comment.wire_key, "comment");
    assert_eq!(comment.path, "comment");
}

#[test]
fn test_field_roundtrip_through_accessors() {
    let mut rule = IpFirewallFilter::default();
    rule.set_field("chain", Value::from("forward")).unwrap();
    rule.set_field("log", Value::Bool(true)).unwrap();
    rule.set_field("bytes", Value::Integer(4096)).unwrap();

    assert_eq!(rule.chain, "forward");
    assert!(rule.log);
    assert_eq!(rule.field("bytes").unwrap(), Value::Integer(4096));
}

#[test]
fn test_empty_record() {
    assert!(Empty::descriptors().is_empty());
    let mut empty = Empty::default();
    assert!(empty.field("x").is_err());
    assert!(empty.set_field("x", Value::Integer(1)).is_err());
}

#[test]
fn test_trailing_field_without_comma() {
    assert_eq!(Trailing::descriptors()[0].wire_key, "name");
    let mut t = Trailing::default();
    t.set_field("name", Value::from("x")).unwrap();
    assert_eq!(t.name, "x");
}
