//! Entry points for sanitizing a user-provided style string.

use crate::map::SafeStyleMap;
use crate::parser::{DeclarationParser, StyleParser};
use crate::policy::StylePolicy;

/// Reduce `raw` to the declarations allowed by the standard policy.
///
/// `parser` enumerates the declarations (normally the host's CSS engine).
/// Malformed input never fails; the worst case is an empty map.
pub fn sanitize<P: StyleParser + ?Sized>(raw: &str, parser: &P) -> SafeStyleMap {
    StylePolicy::standard().sanitize(raw, parser)
}

/// Like [`sanitize`], but a `raw` string longer than `max_len` bytes is
/// rejected as a whole.
pub fn sanitize_with_limit<P: StyleParser + ?Sized>(
    raw: &str,
    parser: &P,
    max_len: usize,
) -> SafeStyleMap {
    if raw.len() > max_len {
        tracing::debug!(
            "dropped style string of {} bytes (limit {max_len})",
            raw.len()
        );
        return SafeStyleMap::default();
    }
    sanitize(raw, parser)
}

/// [`sanitize`] with the built-in [`DeclarationParser`].
pub fn sanitize_style(raw: &str) -> SafeStyleMap {
    sanitize(raw, &DeclarationParser)
}
