//! The configuration handed to the object-tree renderer.

use grip_common::{ActorId, Grip, ObjectGrip, RenderMode};
use grip_style::SafeStyleMap;
use serde::Serialize;
use std::fmt;

use crate::capabilities::UiEvent;
use crate::dispatch::RenderPath;
use crate::object_client::ObjectClient;

pub type NodeCallback<'a> = Box<dyn Fn(&ObjectGrip) + 'a>;
pub type InspectCallback<'a> = Box<dyn Fn(&ObjectGrip, &mut dyn UiEvent) + 'a>;
pub type LinkCallback<'a> = Box<dyn Fn(&str) + 'a>;
pub type ReleaseCallback<'a> = Box<dyn Fn(Option<&ActorId>) + 'a>;
pub type ObjectClientFactory<'a> =
    Box<dyn Fn(&ObjectGrip) -> grip_common::Result<ObjectClient<'a>> + 'a>;

/// Rep the tree renderer falls back to for object values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Rep {
    Grip,
}

/// The single root of the rendered tree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RootNode {
    pub path: String,
    pub contents: Grip,
}

pub enum Presentation<'a> {
    Text {
        use_quotes: bool,
        escape_whitespace: bool,
        style: SafeStyleMap,
    },
    Object {
        on_dom_node_mouse_over: Option<NodeCallback<'a>>,
        on_dom_node_mouse_out: Option<NodeCallback<'a>>,
        on_inspect_icon_click: Option<InspectCallback<'a>>,
        default_rep: Rep,
    },
}

impl Presentation<'_> {
    pub fn path(&self) -> RenderPath {
        match self {
            Presentation::Text { .. } => RenderPath::Text,
            Presentation::Object { .. } => RenderPath::Object,
        }
    }

    /// The sanitized style; object presentations never carry one.
    pub fn style(&self) -> Option<&SafeStyleMap> {
        match self {
            Presentation::Text { style, .. } => Some(style),
            Presentation::Object { .. } => None,
        }
    }
}

pub struct RenderConfig<'a> {
    pub auto_expand_depth: u32,
    pub mode: RenderMode,
    /// Keyboard focus does not work well in the tree renderer yet.
    pub disabled_focus: bool,
    pub root: RootNode,
    pub create_object_client: ObjectClientFactory<'a>,
    pub release_actor: ReleaseCallback<'a>,
    pub open_link: Option<LinkCallback<'a>>,
    pub presentation: Presentation<'a>,
}

impl RenderConfig<'_> {
    pub fn summary(&self) -> RenderSummary {
        let (use_quotes, escape_whitespace, style, highlight, unhighlight, inspect, default_rep) =
            match &self.presentation {
                Presentation::Text {
                    use_quotes,
                    escape_whitespace,
                    style,
                } => (
                    Some(*use_quotes),
                    Some(*escape_whitespace),
                    Some(style.clone()),
                    false,
                    false,
                    false,
                    None,
                ),
                Presentation::Object {
                    on_dom_node_mouse_over,
                    on_dom_node_mouse_out,
                    on_inspect_icon_click,
                    default_rep,
                } => (
                    None,
                    None,
                    None,
                    on_dom_node_mouse_over.is_some(),
                    on_dom_node_mouse_out.is_some(),
                    on_inspect_icon_click.is_some(),
                    Some(*default_rep),
                ),
            };

        RenderSummary {
            path: self.presentation.path(),
            auto_expand_depth: self.auto_expand_depth,
            mode: self.mode,
            disabled_focus: self.disabled_focus,
            root: self.root.clone(),
            use_quotes,
            escape_whitespace,
            style,
            default_rep,
            highlight,
            unhighlight,
            inspect,
            open_link: self.open_link.is_some(),
        }
    }
}

impl fmt::Debug for RenderConfig<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.summary(), f)
    }
}

/// Plain-data view of a [`RenderConfig`]: its values, and which callbacks are wired.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub path: RenderPath,
    pub auto_expand_depth: u32,
    pub mode: RenderMode,
    pub disabled_focus: bool,
    pub root: RootNode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_quotes: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escape_whitespace: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<SafeStyleMap>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_rep: Option<Rep>,
    pub highlight: bool,
    pub unhighlight: bool,
    pub inspect: bool,
    pub open_link: bool,
}
