//! Mentor/mentee compatibility ranking.
//!
//! Scores candidate profiles against a requester on four weighted dimensions
//! (semantic skill overlap, career title overlap, directional experience fit
//! and availability) and returns them ordered by a 0-100 compatibility score.

pub mod core;
pub mod discovery;
pub mod engine;
pub mod profile;
pub mod utils;

pub use utils::{normalize_term, safe_truncate};

pub use crate::core::config::{MatchWeights, MatchingConfig};
pub use crate::core::error::{MatchError, Result};
pub use discovery::prepare_pool;
pub use engine::{RankingEngine, ScoreBreakdown};
pub use profile::{ExperienceLevel, MatchTier, Profile, Role, ScoredCandidate};

use lazy_static::lazy_static;

lazy_static! {
    static ref DEFAULT_ENGINE: RankingEngine = RankingEngine::default();
}


pub const DEFAULT_MENTEE_SHORTLIST: usize = 5;


/// Compatibility score using the default weights.
pub fn score(requester: Option<&Profile>, candidate: Option<&Profile>) -> u8 {
    DEFAULT_ENGINE.score(requester, candidate)
}


pub fn explain(requester: &Profile, candidate: &Profile) -> ScoreBreakdown {
    DEFAULT_ENGINE.explain(requester, candidate)
}


/// Ranks `candidates` for `requester` using the default configuration.
pub fn rank(requester: Option<&Profile>, candidates: &[Profile]) -> Vec<ScoredCandidate> {
    DEFAULT_ENGINE.rank(requester, candidates)
}
