//! Distance-token parsing and address masking.

use once_cell::sync::Lazy;
use regex::Regex;

/// Sentinel for an empty or malformed distance token; sorts last instead of
/// failing, since these values only ever drive display ordering.
pub const UNKNOWN_DISTANCE_METERS: f64 = 999_999.0;

/// Marker appended to a masked address.
pub const ADDRESS_MASK: &str = "***";

/// Shown when there is no address at all.
const ADDRESS_PROTECTED: &str = "地址信息保护中";

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.]").unwrap());

/// Normalize a distance token like `"500m"` or `"1.2km"` to meters.
pub fn parse_distance(token: &str) -> f64 {
    if token.is_empty() {
        return UNKNOWN_DISTANCE_METERS;
    }
    let digits = NON_NUMERIC.replace_all(token, "");
    let Ok(value) = digits.parse::<f64>() else {
        return UNKNOWN_DISTANCE_METERS;
    };
    if token.contains("km") {
        value * 1000.0
    } else {
        value
    }
}

/// Mask an address for display before the engagement is confirmed.
///
/// Addresses with more than two whitespace tokens keep the first two; shorter
/// ones lose their last three characters. Either way the mask marker replaces
/// what was dropped.
pub fn mask_address(address: &str) -> String {
    if address.is_empty() {
        return ADDRESS_PROTECTED.to_string();
    }
    let parts: Vec<&str> = address.split_whitespace().collect();
    if parts.len() > 2 {
        return format!("{} {} {}", parts[0], parts[1], ADDRESS_MASK);
    }
    let kept = address.chars().count().saturating_sub(3);
    let prefix: String = address.chars().take(kept).collect();
    format!("{prefix}{ADDRESS_MASK}")
}
