use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;

use crate::utils::normalize_term;

lazy_static! {
    pub static ref SKILL_SYNONYMS: HashMap<&'static str, Vec<&'static str>> = {
        let mut m = HashMap::new();
        m.insert("react", vec!["frontend", "javascript", "web", "ui"]);
        m.insert("node", vec!["backend", "javascript", "server", "api"]);
        m.insert("python", vec!["data science", "backend", "ai", "ml"]);
        m.insert("design", vec!["ui", "ux", "product", "figma"]);
        m.insert("management", vec!["leadership", "strategy", "product", "agile"]);
        m.insert("aws", vec!["cloud", "devops", "infrastructure"]);
        m.insert("javascript", vec!["frontend", "web", "logic"]);
        m
    };
}


/// Expands raw skill lists into semantic tag sets using a fixed synonym table.
#[derive(Debug, Clone)]
pub struct SkillExpander {
    synonyms: HashMap<String, Vec<String>>,
}

impl SkillExpander {
    #[must_use]
    pub fn new() -> Self {
        let synonyms = SKILL_SYNONYMS
            .iter()
            .map(|(skill, related)| {
                (
                    (*skill).to_string(),
                    related.iter().map(|r| (*r).to_string()).collect(),
                )
            })
            .collect();
        Self { synonyms }
    }

    /// Built-in table extended by `extra`; an entry in `extra` replaces the built-in one.
    #[must_use]
    pub fn with_extra(extra: &HashMap<String, Vec<String>>) -> Self {
        let mut expander = Self::new();
        for (skill, related) in extra {
            let key = normalize_term(skill);
            if key.is_empty() {
                continue;
            }
            let related = related
                .iter()
                .map(|r| normalize_term(r))
                .filter(|r| !r.is_empty())
                .collect();
            expander.synonyms.insert(key, related);
        }
        expander
    }

    #[must_use]
    pub fn related(&self, skill: &str) -> Option<&[String]> {
        self.synonyms.get(skill).map(Vec::as_slice)
    }

    /// Normalized skills plus their related tags. Skills that are blank after
    /// trimming contribute nothing.
    pub fn expand<S: AsRef<str>>(&self, skills: &[S]) -> HashSet<String> {
        let mut tags = HashSet::new();

        for skill in skills {
            let normalized = normalize_term(skill.as_ref());
            if normalized.is_empty() {
                continue;
            }
            if let Some(related) = self.related(&normalized) {
                tags.extend(related.iter().cloned());
            }
            tags.insert(normalized);
        }

        tags
    }
}

impl Default for SkillExpander {
    fn default() -> Self {
        Self::new()
    }
}
