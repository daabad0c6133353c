

pub mod availability;
pub mod career;
pub mod experience;
pub mod ranking;
pub mod scoring;
pub mod similarity;
pub mod skills;

pub use availability::availability_score;
pub use career::{CareerScore, career_score, career_tokens};
pub use experience::{experience_fit, experience_score};
pub use ranking::RankingEngine;
pub use scoring::{ScoreBreakdown, clamp_score};
pub use similarity::set_similarity;
pub use skills::{SKILL_SYNONYMS, SkillExpander};
