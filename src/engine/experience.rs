use std::cmp::Ordering;

use crate::profile::{ExperienceLevel, Role};


/// Directional experience fit: 1.0 for the preferred direction, 0.5 for parity, 0.0 otherwise.
///
/// Mentees look for strictly more experienced candidates. Every other requester
/// (mentor, or no role at all) looks for strictly less experienced ones.
pub fn experience_fit(
    requester_role: Option<Role>,
    requester_level: Option<&ExperienceLevel>,
    target_level: Option<&ExperienceLevel>,
) -> f64 {
    let own = ExperienceLevel::rank_of(requester_level);
    let other = ExperienceLevel::rank_of(target_level);

    let preferred = if requester_role == Some(Role::Mentee) {
        Ordering::Greater
    } else {
        Ordering::Less
    };

    match other.cmp(&own) {
        Ordering::Equal => 0.5,
        ord if ord == preferred => 1.0,
        _ => 0.0,
    }
}


pub fn experience_score(
    requester_role: Option<Role>,
    requester_level: Option<&ExperienceLevel>,
    target_level: Option<&ExperienceLevel>,
    weight: f64,
) -> f64 {
    experience_fit(requester_role, requester_level, target_level) * 100.0 * weight
}
