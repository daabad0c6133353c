use serde_json::Value;


/// Exact-match availability bonus over opaque tags (strings or schedule
/// objects). Two unset values count as equal only when `reward_unspecified`
/// is set.
pub fn availability_score(
    a: Option<&Value>,
    b: Option<&Value>,
    weight: f64,
    reward_unspecified: bool,
) -> f64 {
    let matched = match (a, b) {
        (None, None) => reward_unspecified,
        (Some(x), Some(y)) => x == y,
        _ => false,
    };

    if matched { 100.0 * weight } else { 0.0 }
}
