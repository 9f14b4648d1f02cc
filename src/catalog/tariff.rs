//! UCAS tariff-point parsing
//!
//! Catalog cells carry single values ("112"), ranges ("104-112"), or
//! non-numeric text. A range is reduced to its lower bound; anything
//! unparsable is treated as unknown and excluded from numeric eligibility
//! comparison, never as a load failure.

/// Parse a tariff cell to its numeric lower bound
pub fn parse_lower_bound(value: &str) -> Option<f32> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    let lower = value.split('-').next()?.trim();
    lower.parse::<f32>().ok()
}
