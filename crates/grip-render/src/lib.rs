//! Render configuration for a single console value.
//!
//! Given a [`Grip`](grip_common::Grip) and the reason it is being shown,
//! builds the [`RenderConfig`] handed to the generic object-tree renderer:
//! - picks the text or object presentation
//! - decides whether the tree starts expanded
//! - sanitizes the user-provided style for text values
//! - wires host capabilities (highlight, inspect, links, actor release)

pub mod capabilities;
pub mod config;
pub mod dispatch;
mod element;
pub mod object_client;
pub mod renderer;


pub use capabilities::{
    ActorReleaser, DebuggerTransport, DomHighlighter, DomUnhighlighter, LinkOpener, NoServices,
    NodeInspector, ServiceContainer, StyledElement, UiEvent,
};
pub use config::{Presentation, RenderConfig, RenderSummary, Rep, RootNode};
pub use dispatch::{decide, RenderPath, RenderPlan};
pub use object_client::ObjectClient;
pub use renderer::{RenderRequest, ValueRenderer, DEFAULT_MAX_STYLE_LENGTH};
