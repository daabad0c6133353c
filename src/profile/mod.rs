

pub mod models;

pub use models::{ExperienceLevel, MatchTier, Profile, Role, ScoredCandidate};
