//! Client handle for a remote object actor.
//!
//! The tree renderer owns the handle once it has been created and drives it
//! to expand the object or fetch the rest of a long string.

use grip_common::{ActorId, GripError, ObjectGrip};
use serde_json::{json, Value};

use crate::capabilities::DebuggerTransport;

pub struct ObjectClient<'a> {
    transport: &'a dyn DebuggerTransport,
    actor: ActorId,
    grip: ObjectGrip,
}

impl<'a> ObjectClient<'a> {
    /// Bind `grip` to `transport`. Fails if the grip has no actor to talk to.
    pub fn new(
        transport: &'a dyn DebuggerTransport,
        grip: &ObjectGrip,
    ) -> grip_common::Result<Self> {
        let actor = grip.actor().cloned().ok_or_else(|| {
            GripError::InvalidGrip(format!("'{}' grip has no actor", grip.kind))
        })?;
        Ok(Self {
            transport,
            actor,
            grip: grip.clone(),
        })
    }

    pub fn actor(&self) -> &ActorId {
        &self.actor
    }

    /// Send a bare request (`{ "to": actor, "type": kind }`).
    pub fn request(&self, kind: &str) -> grip_common::Result<()> {
        self.send(kind, Value::Null)
    }

    pub fn prototype_and_properties(&self) -> grip_common::Result<()> {
        self.request("prototypeAndProperties")
    }

    pub fn enum_properties(&self, ignore_non_indexed: bool) -> grip_common::Result<()> {
        self.send(
            "enumProperties",
            json!({ "options": { "ignoreNonIndexedProperties": ignore_non_indexed } }),
        )
    }

    /// Fetch `[start, end)` of a long string.
    pub fn substring(&self, start: u64, end: u64) -> grip_common::Result<()> {
        if !self.grip.is_long_string() {
            return Err(GripError::InvalidGrip(format!(
                "substring on a '{}' grip",
                self.grip.kind
            )));
        }
        if start > end {
            return Err(GripError::InvalidGrip(format!(
                "substring range {start}..{end} is reversed"
            )));
        }
        self.send("substring", json!({ "start": start, "end": end }))
    }

    pub fn release(&self) -> grip_common::Result<()> {
        self.request("release")
    }

    fn send(&self, kind: &str, extra: Value) -> grip_common::Result<()> {
        let mut packet = json!({ "to": self.actor, "type": kind });
        if let (Value::Object(packet), Value::Object(extra)) = (&mut packet, extra) {
            packet.extend(extra);
        }
        tracing::debug!("{} -> {kind}", self.actor);
        self.transport.send(packet)
    }
}

impl std::fmt::Debug for ObjectClient<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectClient")
            .field("actor", &self.actor)
            .field("kind", &self.grip.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grip_common::GripKind;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        packets: RefCell<Vec<Value>>,
    }

    impl DebuggerTransport for Recorder {
        fn send(&self, packet: Value) -> grip_common::Result<()> {
            self.packets.borrow_mut().push(packet);
            Ok(())
        }
    }

    struct Closed;

    impl DebuggerTransport for Closed {
        fn send(&self, _packet: Value) -> grip_common::Result<()> {
            Err(GripError::Transport("connection closed".into()))
        }
    }

    #[test]
    fn requires_an_actor() {
        let transport = Recorder::default();
        let grip = ObjectGrip::new("", GripKind::Object);
        let err = ObjectClient::new(&transport, &grip).unwrap_err();
        assert!(matches!(err, GripError::InvalidGrip(_)));
    }

    #[test]
    fn packets_are_addressed_to_the_actor() {
        let transport = Recorder::default();
        let grip = ObjectGrip::new("obj42", GripKind::Object);
        let client = ObjectClient::new(&transport, &grip).unwrap();

        client.prototype_and_properties().unwrap();
        client.enum_properties(true).unwrap();
        client.release().unwrap();

        let packets = transport.packets.borrow();
        assert_eq!(
            packets[0],
            json!({ "to": "obj42", "type": "prototypeAndProperties" })
        );
        assert_eq!(
            packets[1],
            json!({
                "to": "obj42",
                "type": "enumProperties",
                "options": { "ignoreNonIndexedProperties": true }
            })
        );
        assert_eq!(packets[2], json!({ "to": "obj42", "type": "release" }));
    }

    #[test]
    fn substring_only_for_long_strings() {
        let transport = Recorder::default();
        let object_grip = ObjectGrip::new("o1", GripKind::Object);
        let object = ObjectClient::new(&transport, &object_grip).unwrap();
        assert!(object.substring(0, 10).is_err());

        let long_grip = ObjectGrip::new("ls1", GripKind::LongString);
        let long = ObjectClient::new(&transport, &long_grip).unwrap();
        assert!(long.substring(10, 0).is_err());
        long.substring(0, 1000).unwrap();
        assert_eq!(
            transport.packets.borrow().last(),
            Some(&json!({ "to": "ls1", "type": "substring", "start": 0, "end": 1000 }))
        );
    }

    #[test]
    fn transport_errors_propagate() {
        let grip = ObjectGrip::new("obj1", GripKind::Object);
        let client = ObjectClient::new(&Closed, &grip).unwrap();
        assert!(matches!(client.release(), Err(GripError::Transport(_))));
    }
}
