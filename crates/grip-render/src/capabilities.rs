//! Host capabilities the renderer can wire into a [`RenderConfig`](crate::RenderConfig).
//!
//! Every capability is optional. A host implements [`ServiceContainer`] and
//! overrides only the accessors it can back; the rest stay `None` and the
//! matching affordance is simply not offered.

use grip_common::{ActorId, ObjectGrip};

/// An element the host's CSS engine can style, used to parse declarations.
pub trait StyledElement {
    /// Assign declaration text to the element's inline style.
    fn set_style(&mut self, css_text: &str);

    /// The declarations the engine kept, in engine order.
    fn style_declarations(&self) -> Vec<(String, String)>;
}

/// Highlights the DOM node a grip refers to.
pub trait DomHighlighter {
    fn highlight(&self, node: &ObjectGrip);
}

/// Clears a highlight set by a [`DomHighlighter`].
pub trait DomUnhighlighter {
    fn unhighlight(&self, node: &ObjectGrip);
}

/// Selects the DOM node a grip refers to in the inspector panel.
pub trait NodeInspector {
    fn open_in_inspector(&self, node: &ObjectGrip);
}

pub trait LinkOpener {
    fn open_link(&self, url: &str);
}

/// Frees the remote side of an actor.
pub trait ActorReleaser {
    fn release_actor(&self, actor: &ActorId);
}

/// Connection to the debugging server. Packets are fire-and-forget.
pub trait DebuggerTransport {
    fn send(&self, packet: serde_json::Value) -> grip_common::Result<()>;
}

/// A UI event delivered to a callback.
pub trait UiEvent {
    /// Keep the event from reaching enclosing handlers.
    fn stop_propagation(&mut self);
}

/// The bundle of capabilities a host offers.
pub trait ServiceContainer {
    fn create_element(&self, _tag: &str) -> Option<Box<dyn StyledElement + '_>> {
        None
    }

    fn dom_highlighter(&self) -> Option<&dyn DomHighlighter> {
        None
    }

    fn dom_unhighlighter(&self) -> Option<&dyn DomUnhighlighter> {
        None
    }

    fn node_inspector(&self) -> Option<&dyn NodeInspector> {
        None
    }

    fn link_opener(&self) -> Option<&dyn LinkOpener> {
        None
    }

    fn transport(&self) -> Option<&dyn DebuggerTransport> {
        None
    }

    fn actor_releaser(&self) -> Option<&dyn ActorReleaser> {
        None
    }
}

/// A host with no capabilities at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoServices;

impl ServiceContainer for NoServices {}
