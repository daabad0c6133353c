use tracing::{debug, info};

use super::scoring::{ScoreBreakdown, breakdown};
use super::skills::SkillExpander;
use crate::core::{MatchingConfig, Result};
use crate::profile::{Profile, ScoredCandidate};


/// Stateless compatibility ranker. Holds only immutable configuration, so a
/// single instance can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct RankingEngine {
    config: MatchingConfig,
    expander: SkillExpander,
}

impl RankingEngine {

    pub fn new(config: MatchingConfig) -> Result<Self> {
        config.validate()?;

        let expander = SkillExpander::with_extra(&config.extra_skill_synonyms);

        info!(
            "Ranking engine initialized (weights={:?}, mentee_shortlist={}, extra_synonyms={})",
            config.weights,
            config.mentee_shortlist,
            config.extra_skill_synonyms.len()
        );

        Ok(Self { config, expander })
    }

    #[must_use]
    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    #[must_use]
    pub fn expander(&self) -> &SkillExpander {
        &self.expander
    }

    /// Compatibility of `candidate` from `requester`'s point of view, in `0..=100`.
    pub fn score(&self, requester: Option<&Profile>, candidate: Option<&Profile>) -> u8 {
        match (requester, candidate) {
            (Some(requester), Some(candidate)) => self.explain(requester, candidate).total,
            _ => 0,
        }
    }

    pub fn explain(&self, requester: &Profile, candidate: &Profile) -> ScoreBreakdown {
        let requester_tags = self.expander.expand(&requester.skills);
        breakdown(
            requester,
            &requester_tags,
            candidate,
            &self.expander,
            &self.config,
        )
    }

    /// Filters, scores and orders `candidates` for `requester`.
    ///
    /// Candidates sharing the requester's id or role are dropped. Results are
    /// sorted by descending compatibility; equal scores keep their input order.
    /// Mentee requesters receive at most `mentee_shortlist` entries.
    pub fn rank(&self, requester: Option<&Profile>, candidates: &[Profile]) -> Vec<ScoredCandidate> {
        let Some(requester) = requester else {
            debug!("No requester profile, nothing to rank");
            return Vec::new();
        };

        let requester_tags = self.expander.expand(&requester.skills);

        let mut ranked: Vec<ScoredCandidate> = candidates
            .iter()
            .filter(|c| c.id != requester.id && c.role != requester.role)
            .map(|candidate| {
                let scored = breakdown(
                    requester,
                    &requester_tags,
                    candidate,
                    &self.expander,
                    &self.config,
                );
                ScoredCandidate::new(candidate.clone(), scored.total)
            })
            .collect();

        let eligible = ranked.len();

        ranked.sort_by(|a, b| b.compatibility.cmp(&a.compatibility));

        if requester.is_mentee() {
            ranked.truncate(self.config.mentee_shortlist);
        }

        debug!(
            "Ranked {} of {} candidates for {} (eligible={}, top={:?})",
            ranked.len(),
            candidates.len(),
            crate::safe_truncate(&requester.id, 32),
            eligible,
            ranked.first().map(|c| c.compatibility)
        );

        ranked
    }
}

impl Default for RankingEngine {
    fn default() -> Self {
        let config = MatchingConfig::default();
        let expander = SkillExpander::with_extra(&config.extra_skill_synonyms);
        Self { config, expander }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::MatchError;
    use crate::profile::{ExperienceLevel, Role};

    fn mentee() -> Profile {
        Profile::new("u1", Role::Mentee)
            .with_skills(["react"])
            .with_career("developer")
            .with_experience(ExperienceLevel::Entry)
    }

    fn mentors(n: usize) -> Vec<Profile> {
        (0..n)
            .map(|i| {
                Profile::new(format!("m{i}"), Role::Mentor)
                    .with_skills(if i % 2 == 0 { vec!["react"] } else { vec!["python"] })
                    .with_experience(ExperienceLevel::Senior)
            })
            .collect()
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = MatchingConfig {
            mentee_shortlist: 0,
            ..Default::default()
        };
        assert!(matches!(RankingEngine::new(config), Err(MatchError::Validation(_))));
    }

    #[test]
    fn test_score_absent_profiles() {
        let engine = RankingEngine::default();
        let m = mentee();
        assert_eq!(engine.score(None, Some(&m)), 0);
        assert_eq!(engine.score(Some(&m), None), 0);
        assert_eq!(engine.score(None, None), 0);
    }

    #[test]
    fn test_rank_absent_requester() {
        assert!(RankingEngine::default().rank(None, &mentors(3)).is_empty());
    }

    #[test]
    fn test_rank_excludes_self_and_same_role() {
        let engine = RankingEngine::default();
        let requester = mentee();
        let mut pool = mentors(2);
        pool.push(requester.clone());
        pool.push(Profile::new("u2", Role::Mentee).with_skills(["react"]));
        // same id, different role: still the requester
        pool.push(Profile::new("u1", Role::Mentor).with_skills(["react"]));

        let ranked = engine.rank(Some(&requester), &pool);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|c| c.id() != "u1"));
        assert!(ranked.iter().all(|c| c.profile.role == Some(Role::Mentor)));
    }

    #[test]
    fn test_mentee_gets_shortlist() {
        let ranked = RankingEngine::default().rank(Some(&mentee()), &mentors(9));
        assert_eq!(ranked.len(), 5);
    }

    #[test]
    fn test_mentee_shortlist_is_configurable() {
        let engine = RankingEngine::new(MatchingConfig {
            mentee_shortlist: 2,
            ..Default::default()
        })
        .unwrap();
        assert_eq!(engine.rank(Some(&mentee()), &mentors(6)).len(), 2);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let ranked = RankingEngine::default().rank(Some(&mentee()), &mentors(4));
        let ids: Vec<&str> = ranked.iter().map(ScoredCandidate::id).collect();
        assert_eq!(ids, vec!["m0", "m2", "m1", "m3"]);
        assert!(ranked[0].compatibility > ranked[2].compatibility);
        assert_eq!(ranked[0].compatibility, ranked[1].compatibility);
    }

    #[test]
    fn test_requester_without_role_sees_all_roles() {
        let requester = Profile {
            id: "x".to_string(),
            ..Default::default()
        };
        let pool = vec![
            Profile::new("a", Role::Mentor),
            Profile::new("b", Role::Mentee),
            Profile {
                id: "c".to_string(),
                ..Default::default()
            },
        ];

        let ranked = RankingEngine::default().rank(Some(&requester), &pool);
        let ids: Vec<&str> = ranked.iter().map(ScoredCandidate::id).collect();

        // only the role-less candidate shares the (absent) role
        assert_eq!(ids.len(), 2);
        assert!(ids.contains(&"a"));
        assert!(ids.contains(&"b"));
    }

    #[test]
    fn test_extra_synonyms_change_scores() {
        let mut config = MatchingConfig::default();
        config
            .extra_skill_synonyms
            .insert("marketing".to_string(), vec!["growth".to_string(), "seo".to_string()]);
        let engine = RankingEngine::new(config).unwrap();

        let requester = Profile::new("u1", Role::Mentee).with_skills(["marketing"]);
        let candidate = Profile::new("m1", Role::Mentor).with_skills(["seo"]);

        let with_table = engine.explain(&requester, &candidate).skills;
        let without = RankingEngine::default().explain(&requester, &candidate).skills;

        assert!(with_table > 0.0);
        assert_eq!(without, 0.0);
    }
}
