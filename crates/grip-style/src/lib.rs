//! Sanitization of user-provided inline styles.
//!
//! Console messages may carry a CSS declaration string (`%c` formatting).
//! That string comes from page content, so before it reaches the DOM it is
//! reduced to cosmetic properties whose values cannot load a resource:
//!
//! - property names must match an allow-list of layout/box/typography prefixes
//! - values must not contain `url(`, `element(` or a scheme-qualified URL
//!
//! Anything else is dropped silently; sanitizing never fails.

mod map;
mod parser;
mod policy;
mod sanitize;

pub use map::SafeStyleMap;
pub use parser::{DeclarationParser, StyleParser};
pub use policy::{Rejection, StylePolicy};
pub use sanitize::{sanitize, sanitize_style, sanitize_with_limit};
