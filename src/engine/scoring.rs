use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::availability::availability_score;
use super::career::career_score;
use super::experience::experience_score;
use super::similarity::set_similarity;
use super::skills::SkillExpander;
use crate::core::MatchingConfig;
use crate::profile::Profile;


/// Weighted contribution of every dimension to one compatibility score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub career: f64,
    pub career_bonus: f64,
    pub experience: f64,
    pub availability: f64,
    /// Sum before clamping; may exceed 100 when the career bonus applies.
    pub raw_total: f64,
    pub total: u8,
}

impl ScoreBreakdown {
    fn finish(mut self) -> Self {
        self.raw_total =
            self.skills + self.career + self.career_bonus + self.experience + self.availability;
        self.total = clamp_score(self.raw_total);
        self
    }
}


pub fn clamp_score(raw: f64) -> u8 {
    if raw.is_nan() {
        return 0;
    }
    raw.clamp(0.0, 100.0).round() as u8
}


pub(crate) fn breakdown(
    requester: &Profile,
    requester_tags: &HashSet<String>,
    candidate: &Profile,
    expander: &SkillExpander,
    config: &MatchingConfig,
) -> ScoreBreakdown {
    if requester.role == candidate.role {
        return ScoreBreakdown::default();
    }

    let weights = &config.weights;

    let candidate_tags = expander.expand(&candidate.skills);
    let skills = set_similarity(requester_tags, &candidate_tags) * 100.0 * weights.skills;

    let career = career_score(
        requester.career_text(),
        candidate.career_text(),
        requester.role,
        config,
    );

    let experience = experience_score(
        requester.role,
        requester.experience_level.as_ref(),
        candidate.experience_level.as_ref(),
        weights.experience,
    );

    let availability = availability_score(
        requester.availability.as_ref(),
        candidate.availability.as_ref(),
        weights.availability,
        config.reward_unspecified_availability,
    );

    ScoreBreakdown {
        skills,
        career: career.weighted,
        career_bonus: career.bonus,
        experience,
        availability,
        ..Default::default()
    }
    .finish()
}
