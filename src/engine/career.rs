use std::collections::HashSet;

use super::similarity::set_similarity;
use crate::core::MatchingConfig;
use crate::profile::Role;


#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CareerScore {
    pub similarity: f64,
    /// `similarity * 100 * career weight`
    pub weighted: f64,
    pub bonus: f64,
}

impl CareerScore {
    #[must_use]
    pub fn contribution(&self) -> f64 {
        self.weighted + self.bonus
    }
}


pub fn career_tokens(career: &str, min_len: usize) -> HashSet<String> {
    career
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|word| !word.is_empty() && word.chars().count() >= min_len)
        .map(str::to_string)
        .collect()
}


/// True when a mentee's stated career appears verbatim inside the candidate's.
pub fn title_contained(user_career: &str, target_career: &str) -> bool {
    let user = user_career.to_lowercase();
    !user.is_empty() && target_career.to_lowercase().contains(&user)
}


pub fn career_score(
    user_career: &str,
    target_career: &str,
    requester_role: Option<Role>,
    config: &MatchingConfig,
) -> CareerScore {
    let weight = config.weights.career;

    let similarity = set_similarity(
        &career_tokens(user_career, config.min_token_len),
        &career_tokens(target_career, config.min_token_len),
    );

    let bonus = if requester_role == Some(Role::Mentee) && title_contained(user_career, target_career)
    {
        config.career_substring_bonus * weight
    } else {
        0.0
    };

    CareerScore {
        similarity,
        weighted: similarity * 100.0 * weight,
        bonus,
    }
}
