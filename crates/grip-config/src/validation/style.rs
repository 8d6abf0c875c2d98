//! `[style]` validation.

use super::helpers::check_at_most;
use crate::schema::GripConfig;

/// Upper bound for `style.max_declaration_length`.
pub(crate) const MAX_DECLARATION_LENGTH: u32 = 65536;

pub(crate) fn validate_style(errors: &mut Vec<String>, config: &GripConfig) {
    check_at_most(
        errors,
        "style.max_declaration_length",
        config.style.max_declaration_length,
        MAX_DECLARATION_LENGTH,
    );
}
