use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::id::ActorId;

/// A value as sent by the remote debugging protocol.
///
/// Deserializes straight from protocol JSON: `null`, a bare string, number
/// or boolean, or an object record carrying `type` and usually `actor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grip {
    /// Absent or undefined value.
    Null,
    Primitive(Primitive),
    Object(ObjectGrip),
}

/// Values the protocol sends inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Primitive {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

/// An object record: a reference to a remote value, possibly with a preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectGrip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actor: Option<ActorId>,

    #[serde(rename = "type", default)]
    pub kind: GripKind,

    /// Remaining protocol fields (`class`, `length`, `initial`, `preview`, ...).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The protocol `type` tag of an object grip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GripKind {
    #[default]
    Object,
    LongString,
    Undefined,
    Null,
    NaN,
    Infinity,
    NegativeInfinity,
    NegativeZero,
    Symbol,
    Other(String),
}

impl GripKind {
    pub fn as_str(&self) -> &str {
        match self {
            GripKind::Object => "object",
            GripKind::LongString => "longString",
            GripKind::Undefined => "undefined",
            GripKind::Null => "null",
            GripKind::NaN => "NaN",
            GripKind::Infinity => "Infinity",
            GripKind::NegativeInfinity => "-Infinity",
            GripKind::NegativeZero => "-0",
            GripKind::Symbol => "symbol",
            GripKind::Other(s) => s,
        }
    }
}

impl From<&str> for GripKind {
    fn from(s: &str) -> Self {
        match s {
            "object" => GripKind::Object,
            "longString" => GripKind::LongString,
            "undefined" => GripKind::Undefined,
            "null" => GripKind::Null,
            "NaN" => GripKind::NaN,
            "Infinity" => GripKind::Infinity,
            "-Infinity" => GripKind::NegativeInfinity,
            "-0" => GripKind::NegativeZero,
            "symbol" => GripKind::Symbol,
            other => GripKind::Other(other.to_string()),
        }
    }
}

impl From<String> for GripKind {
    fn from(s: String) -> Self {
        match GripKind::from(s.as_str()) {
            GripKind::Other(_) => GripKind::Other(s),
            known => known,
        }
    }
}

impl From<GripKind> for String {
    fn from(kind: GripKind) -> Self {
        match kind {
            GripKind::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for GripKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ObjectGrip {
    pub fn new(actor: impl Into<ActorId>, kind: GripKind) -> Self {
        Self {
            actor: Some(actor.into()),
            kind,
            extra: Map::new(),
        }
    }

    /// The actor id, unless missing or empty.
    pub fn actor(&self) -> Option<&ActorId> {
        self.actor.as_ref().filter(|a| !a.is_empty())
    }

    pub fn is_long_string(&self) -> bool {
        self.kind == GripKind::LongString
    }

    /// Total length reported for a long string grip.
    pub fn length(&self) -> Option<u64> {
        self.extra.get("length").and_then(Value::as_u64)
    }
}

impl Grip {
    pub fn string(s: impl Into<String>) -> Self {
        Grip::Primitive(Primitive::String(s.into()))
    }

    pub fn number(n: impl Into<serde_json::Number>) -> Self {
        Grip::Primitive(Primitive::Number(n.into()))
    }

    pub fn object(actor: impl Into<ActorId>, kind: GripKind) -> Self {
        Grip::Object(ObjectGrip::new(actor, kind))
    }

    /// Parse a grip from protocol JSON.
    pub fn from_json(raw: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn as_object(&self) -> Option<&ObjectGrip> {
        match self {
            Grip::Object(obj) => Some(obj),
            Grip::Null | Grip::Primitive(_) => None,
        }
    }

    /// Actor id for object grips that carry a non-empty one.
    pub fn actor(&self) -> Option<&ActorId> {
        self.as_object().and_then(ObjectGrip::actor)
    }

    /// Compact JSON form. Deterministic: object fields serialize in key order.
    pub fn to_json_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "null".to_string())
    }
}

impl From<&str> for Grip {
    fn from(s: &str) -> Self {
        Grip::string(s)
    }
}

impl From<String> for Grip {
    fn from(s: String) -> Self {
        Grip::string(s)
    }
}

impl From<ObjectGrip> for Grip {
    fn from(obj: ObjectGrip) -> Self {
        Grip::Object(obj)
    }
}
