//! Decides how a grip is presented.

use grip_common::{Grip, HelperType, MessageType, Primitive, RenderIntent};
use serde::Serialize;

/// Which presentation a grip gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderPath {
    /// Strings and long strings: quoting, whitespace escaping, user style.
    Text,
    /// Everything else: DOM highlight/inspect affordances, generic grip rep.
    Object,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderPlan {
    pub auto_expand_depth: u32,
    pub path: RenderPath,
    /// Reconciliation key of the render root.
    pub root_key: String,
}

/// `console.dir()` output and `inspect()` results open one level deep.
pub fn should_auto_expand(intent: &RenderIntent) -> bool {
    intent.message_type == Some(MessageType::Dir) || intent.helper_type == Some(HelperType::Inspect)
}

pub fn select_path(grip: &Grip) -> RenderPath {
    match grip {
        Grip::Primitive(Primitive::String(_)) => RenderPath::Text,
        Grip::Object(obj) if obj.is_long_string() => RenderPath::Text,
        Grip::Primitive(Primitive::Number(_) | Primitive::Bool(_))
        | Grip::Object(_)
        | Grip::Null => RenderPath::Object,
    }
}

/// The actor id when there is one, else the grip's JSON form.
pub fn root_key(grip: &Grip) -> String {
    match grip.actor() {
        Some(actor) => actor.to_string(),
        None => grip.to_json_string(),
    }
}

pub fn decide(grip: &Grip, intent: &RenderIntent) -> RenderPlan {
    RenderPlan {
        auto_expand_depth: u32::from(should_auto_expand(intent)),
        path: select_path(grip),
        root_key: root_key(grip),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grip_common::GripKind;
    use serde_json::json;

    fn grip(value: serde_json::Value) -> Grip {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn auto_expand_truth_table() {
        let cases = [
            (None, None, 0),
            (Some(MessageType::Dir), None, 1),
            (None, Some(HelperType::Inspect), 1),
            (Some(MessageType::Dir), Some(HelperType::Inspect), 1),
            (Some(MessageType::Log), Some(HelperType::ClearOutput), 0),
            (Some(MessageType::Log), None, 0),
            (Some(MessageType::Result), Some(HelperType::Inspect), 1),
        ];
        for (message_type, helper_type, depth) in cases {
            let intent = RenderIntent {
                message_type: message_type.clone(),
                helper_type: helper_type.clone(),
                ..Default::default()
            };
            assert_eq!(
                decide(&Grip::Null, &intent).auto_expand_depth,
                depth,
                "{message_type:?} / {helper_type:?}"
            );
        }
    }

    #[test]
    fn strings_take_the_text_path() {
        assert_eq!(select_path(&Grip::string("hello")), RenderPath::Text);
        assert_eq!(select_path(&Grip::string("")), RenderPath::Text);
        assert_eq!(
            select_path(&grip(json!({ "type": "longString", "actor": "ls1", "length": 90000 }))),
            RenderPath::Text
        );
    }

    #[test]
    fn everything_else_takes_the_object_path() {
        for value in [
            json!(42),
            json!(-1.5),
            json!(true),
            json!(null),
            json!({ "type": "object", "actor": "obj1", "class": "Object" }),
            json!({ "type": "undefined" }),
            json!({ "type": "null" }),
            json!({ "type": "NaN" }),
            json!({ "type": "symbol", "actor": "sym1", "name": "foo" }),
        ] {
            assert_eq!(select_path(&grip(value.clone())), RenderPath::Object, "{value}");
        }
    }

    #[test]
    fn root_key_prefers_actor() {
        assert_eq!(root_key(&Grip::object("server1.obj42", GripKind::Object)), "server1.obj42");
    }

    #[test]
    fn root_key_falls_back_to_json() {
        assert_eq!(root_key(&Grip::string("hello")), "\"hello\"");
        assert_eq!(root_key(&Grip::number(42)), "42");
        assert_eq!(root_key(&Grip::Null), "null");
        assert_eq!(root_key(&grip(json!({ "type": "undefined" }))), r#"{"type":"undefined"}"#);
        assert_eq!(
            root_key(&Grip::object("", GripKind::Object)),
            r#"{"actor":"","type":"object"}"#
        );
    }

    #[test]
    fn root_key_is_deterministic_and_distinct() {
        let a = Grip::string("1");
        let b = Grip::number(1);
        assert_eq!(root_key(&a), root_key(&a.clone()));
        assert_ne!(root_key(&a), root_key(&b));
    }

    #[test]
    fn dir_of_object() {
        let plan = decide(
            &grip(json!({ "actor": "obj42", "type": "object" })),
            &RenderIntent::default().with_message_type("dir"),
        );
        assert_eq!(
            plan,
            RenderPlan {
                auto_expand_depth: 1,
                path: RenderPath::Object,
                root_key: "obj42".to_string(),
            }
        );
    }
}
