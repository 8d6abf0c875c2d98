//! Builds a [`RenderConfig`] for one value.

use grip_common::{new_correlation_id, ActorId, Grip, GripError, ObjectGrip, RenderIntent};
use grip_style::{sanitize_with_limit, SafeStyleMap};
use tracing::debug;

use crate::capabilities::{ServiceContainer, UiEvent};
use crate::config::{
    InspectCallback, LinkCallback, NodeCallback, ObjectClientFactory, Presentation,
    ReleaseCallback, RenderConfig, Rep, RootNode,
};
use crate::dispatch::{decide, RenderPath};
use crate::element::ElementStyleParser;
use crate::object_client::ObjectClient;

/// Style strings longer than this are dropped without parsing.
pub const DEFAULT_MAX_STYLE_LENGTH: usize = 4096;

/// One value to render, with its optional user style.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    pub grip: Grip,
    pub user_provided_style: Option<String>,
    pub intent: RenderIntent,
}

impl RenderRequest {
    pub fn new(grip: impl Into<Grip>) -> Self {
        Self {
            grip: grip.into(),
            user_provided_style: None,
            intent: RenderIntent::default(),
        }
    }

    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.user_provided_style = Some(style.into());
        self
    }

    pub fn with_intent(mut self, intent: RenderIntent) -> Self {
        self.intent = intent;
        self
    }
}

pub struct ValueRenderer<'a> {
    services: &'a dyn ServiceContainer,
    max_style_length: usize,
}

impl<'a> ValueRenderer<'a> {
    pub fn new(services: &'a dyn ServiceContainer) -> Self {
        Self {
            services,
            max_style_length: DEFAULT_MAX_STYLE_LENGTH,
        }
    }

    pub fn with_max_style_length(mut self, max_style_length: usize) -> Self {
        self.max_style_length = max_style_length;
        self
    }

    pub fn render(&self, request: &RenderRequest) -> RenderConfig<'a> {
        let span = tracing::debug_span!("render", id = %new_correlation_id());
        let _enter = span.enter();

        let plan = decide(&request.grip, &request.intent);
        debug!(
            "root {} -> {:?} path, expand depth {}",
            plan.root_key, plan.path, plan.auto_expand_depth
        );

        let presentation = match plan.path {
            RenderPath::Text => Presentation::Text {
                use_quotes: request.intent.use_quotes,
                escape_whitespace: request.intent.escape_whitespace,
                style: self.user_style(request.user_provided_style.as_deref()),
            },
            RenderPath::Object => Presentation::Object {
                on_dom_node_mouse_over: self.highlight_callback(),
                on_dom_node_mouse_out: self.unhighlight_callback(),
                on_inspect_icon_click: self.inspect_callback(),
                default_rep: Rep::Grip,
            },
        };

        RenderConfig {
            auto_expand_depth: plan.auto_expand_depth,
            mode: request.intent.mode,
            disabled_focus: true,
            root: RootNode {
                path: plan.root_key,
                contents: request.grip.clone(),
            },
            create_object_client: self.object_client_factory(),
            release_actor: self.release_callback(),
            open_link: self.link_callback(),
            presentation,
        }
    }

    fn services(&self) -> &'a dyn ServiceContainer {
        self.services
    }

    fn user_style(&self, raw: Option<&str>) -> SafeStyleMap {
        match raw {
            Some(raw) if !raw.is_empty() => sanitize_with_limit(
                raw,
                &ElementStyleParser::new(self.services),
                self.max_style_length,
            ),
            _ => SafeStyleMap::default(),
        }
    }

    fn highlight_callback(&self) -> Option<NodeCallback<'a>> {
        let highlighter = self.services().dom_highlighter()?;
        Some(Box::new(move |node: &ObjectGrip| highlighter.highlight(node)))
    }

    fn unhighlight_callback(&self) -> Option<NodeCallback<'a>> {
        let unhighlighter = self.services().dom_unhighlighter()?;
        Some(Box::new(move |node: &ObjectGrip| unhighlighter.unhighlight(node)))
    }

    fn inspect_callback(&self) -> Option<InspectCallback<'a>> {
        let inspector = self.services().node_inspector()?;
        Some(Box::new(move |node: &ObjectGrip, event: &mut dyn UiEvent| {
            // Keep the click from also toggling the tree node.
            event.stop_propagation();
            inspector.open_in_inspector(node);
        }))
    }

    fn link_callback(&self) -> Option<LinkCallback<'a>> {
        let opener = self.services().link_opener()?;
        Some(Box::new(move |url: &str| opener.open_link(url)))
    }

    fn release_callback(&self) -> ReleaseCallback<'a> {
        let releaser = self.services().actor_releaser();
        Box::new(move |actor: Option<&ActorId>| {
            let (Some(actor), Some(releaser)) = (actor.filter(|a| !a.is_empty()), releaser) else {
                return;
            };
            releaser.release_actor(actor);
        })
    }

    fn object_client_factory(&self) -> ObjectClientFactory<'a> {
        let services = self.services();
        Box::new(move |grip: &ObjectGrip| {
            let transport = services.transport().ok_or_else(|| {
                GripError::MissingTransport(
                    grip.actor().map(ToString::to_string).unwrap_or_default(),
                )
            })?;
            ObjectClient::new(transport, grip)
        })
    }
}
