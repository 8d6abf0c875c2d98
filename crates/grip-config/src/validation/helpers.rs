//! Shared checks for numeric settings.

/// Record `name` as invalid when `value` exceeds `max`. Settings are
/// unsigned, so the lower bound of zero always holds.
pub(crate) fn check_at_most(errors: &mut Vec<String>, name: &str, value: u32, max: u32) {
    if value > max {
        errors.push(format!("{name} = {value} exceeds the maximum of {max}"));
    }
}
