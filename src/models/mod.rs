//! Data models for API requests and persistence.

/// Palette data types.
pub mod palette;
/// Project data types.
pub mod project;


/// Returns the first field in `fields` whose value is missing, or `None` if
/// every field is present. Order is significant: error messages cite only the
/// first offender, so callers pass fields in their documented fixed order.
pub fn first_missing_field(fields: &[(&'static str, bool)]) -> Option<&'static str> {
    fields
        .iter()
        .find(|(_, present)| !present)
        .map(|(name, _)| *name)
}

/// Formats the 422 body for a palette payload missing `field`.
pub fn missing_field_message(field: &str) -> String {
    format!(
        "Expected format: {{ name: <String>, color1: <String>, color2: <String>, \
         color3: <String>, color4: <String>, color5: <String>, project_id: <Number>}}. \
         You're missing a {field} property."
    )
}

fn has(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|s| !s.is_empty())
}
