//! Request payloads and their conversion into validated domain payloads.

pub mod brands;
pub mod item_categories;
pub mod master_materials;
pub mod sites;
pub mod supplier_prices;
pub mod suppliers;

/// Trim the input, collapse whitespace runs into one space and drop control
/// characters.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if !ch.is_control() {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Sanitized optional text; blank input becomes `None`.
pub(crate) fn sanitize_optional_text(input: Option<&str>) -> Option<String> {
    input
        .map(sanitize_inline_text)
        .filter(|value| !value.is_empty())
}
