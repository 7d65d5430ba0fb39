//! Property tests for parse/stringify round trips.
//!
//! Every tree built through the public API must read back unchanged from
//! its own serialized text.

use json_lite::json::{parse, stringify, Array, Node, Object};
use proptest::prelude::*;

fn finite_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("finite", |f| f.is_finite())
}

fn leaf() -> impl Strategy<Value = Node> {
    prop_oneof![
        Just(Node::Null),
        any::<bool>().prop_map(Node::Bool),
        any::<i32>().prop_map(Node::Int),
        finite_f32().prop_map(Node::Float),
        any::<String>().prop_map(Node::Str),
    ]
}

fn tree() -> impl Strategy<Value = Node> {
    leaf().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8)
                .prop_map(|values| values.into_iter().collect::<Array>().into_node()),
            prop::collection::vec((any::<String>(), inner), 0..8)
                .prop_map(|entries| entries.into_iter().collect::<Object>().into_node()),
        ]
    })
}

proptest! {
    #[test]
    fn integer_round_trip(n in any::<i32>()) {
        let text = stringify(&Node::Int(n));
        prop_assert_eq!(parse(&text).unwrap().as_i32(), Ok(n));
    }

    #[test]
    fn float_round_trip(f in finite_f32()) {
        let text = stringify(&Node::Float(f));
        prop_assert!(!text.contains('e') && !text.contains('E'));
        let parsed = parse(&text).unwrap();
        prop_assert!(parsed.is_float());
        prop_assert_eq!(parsed.as_f32(), Ok(f));
    }

    #[test]
    fn string_round_trip(s in any::<String>()) {
        let text = stringify(&Node::from(s.as_str()));
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(parsed.as_str(), Ok(s.as_str()));
    }

    #[test]
    fn object_keeps_put_order(keys in prop::collection::vec("[a-z]{1,6}", 1..12)) {
        let mut object = Object::new();
        for (i, key) in keys.iter().enumerate() {
            object.put(key.as_str(), i as i32);
        }

        let mut first_seen: Vec<&str> = Vec::new();
        for key in &keys {
            if !first_seen.contains(&key.as_str()) {
                first_seen.push(key);
            }
        }

        let parsed = parse(&stringify(&object)).unwrap().into_object().unwrap();
        let parsed_keys: Vec<&str> = parsed.keys().map(String::as_str).collect();
        prop_assert_eq!(parsed_keys, first_seen);
    }

    #[test]
    fn tree_round_trip(node in tree()) {
        let text = stringify(&node);
        let parsed = parse(&text).unwrap();
        prop_assert_eq!(stringify(&parsed), text);
    }
}
