

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::error::{MatchError, Result};


const ENV_PREFIX: &str = "MENTOR_MATCH";


#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub skills: f64,
    pub career: f64,
    pub experience: f64,
    pub availability: f64,
}

impl MatchWeights {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.skills + self.career + self.experience + self.availability
    }

    fn named(&self) -> [(&'static str, f64); 4] {
        [
            ("skills", self.skills),
            ("career", self.career),
            ("experience", self.experience),
            ("availability", self.availability),
        ]
    }
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skills: 0.45,
            career: 0.35,
            experience: 0.15,
            availability: 0.05,
        }
    }
}


#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    pub weights: MatchWeights,

    /// Added (times the career weight) when a mentor's title contains the mentee's.
    pub career_substring_bonus: f64,

    /// Career tokens shorter than this many characters are ignored.
    pub min_token_len: usize,

    pub mentee_shortlist: usize,

    /// When both profiles leave availability unset, count it as a match.
    pub reward_unspecified_availability: bool,

    pub extra_skill_synonyms: HashMap<String, Vec<String>>,
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            weights: MatchWeights::default(),
            career_substring_bonus: 20.0,
            min_token_len: 3,
            mentee_shortlist: crate::DEFAULT_MENTEE_SHORTLIST,
            reward_unspecified_availability: true,
            extra_skill_synonyms: HashMap::new(),
        }
    }
}

impl MatchingConfig {

    /// Defaults overridden by `MENTOR_MATCH__*` variables.
    ///
    /// Nested keys use `__` as separator, e.g. `MENTOR_MATCH__WEIGHTS__SKILLS=0.5`,
    /// `MENTOR_MATCH__MENTEE_SHORTLIST=3`,
    /// `MENTOR_MATCH__REWARD_UNSPECIFIED_AVAILABILITY=false`.
    pub fn from_env() -> Result<Self> {
        Self::layered(None, environment())
    }

    /// Layers defaults, an optional config file and `MENTOR_MATCH__*` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::layered(path, environment())
    }

    fn layered(path: Option<&Path>, env: config::Environment) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: Self = builder.add_source(env).build()?.try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        for (name, weight) in self.weights.named() {
            if !weight.is_finite() || weight < 0.0 {
                return Err(MatchError::Validation(format!(
                    "weight '{name}' must be a non-negative number, got {weight}"
                )));
            }
            if weight > 1.0 {
                return Err(MatchError::Validation(format!(
                    "weight '{name}' must not exceed 1.0, got {weight}"
                )));
            }
        }

        if !self.career_substring_bonus.is_finite() || self.career_substring_bonus < 0.0 {
            return Err(MatchError::Validation(format!(
                "career_substring_bonus must be a non-negative number, got {}",
                self.career_substring_bonus
            )));
        }

        if self.min_token_len == 0 {
            return Err(MatchError::Validation(
                "min_token_len must be at least 1".to_string(),
            ));
        }

        if self.mentee_shortlist == 0 {
            return Err(MatchError::Validation(
                "mentee_shortlist must be at least 1".to_string(),
            ));
        }

        let total = self.weights.total();
        if (total - 1.0).abs() > 1e-6 {
            warn!("Match weights sum to {:.3}, scores will not span 0-100 evenly", total);
        }

        Ok(())
    }
}
