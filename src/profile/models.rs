use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use strum::{EnumString, IntoStaticStr};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    Mentor,
    Mentee,
}

impl Role {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}


/// Categorical seniority, ordered from least to most experienced.
///
/// Labels outside the known set are kept verbatim in `Unrecognized` so they
/// survive a round trip through ranking; they rank like `Entry`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
pub enum ExperienceLevel {
    #[strum(serialize = "Entry")]
    Entry,
    #[strum(serialize = "Mid-level")]
    MidLevel,
    #[strum(serialize = "Senior")]
    Senior,
    #[strum(serialize = "Expert / Lead")]
    ExpertLead,
    #[strum(default)]
    Unrecognized(String),
}

impl ExperienceLevel {
    #[must_use]
    pub fn rank(&self) -> u8 {
        match self {
            Self::Entry | Self::Unrecognized(_) => 1,
            Self::MidLevel => 2,
            Self::Senior => 3,
            Self::ExpertLead => 4,
        }
    }

    /// Ordinal rank of an optional level; absent counts as `Entry`.
    #[must_use]
    pub fn rank_of(level: Option<&Self>) -> u8 {
        level.map_or(1, Self::rank)
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Entry => "Entry",
            Self::MidLevel => "Mid-level",
            Self::Senior => "Senior",
            Self::ExpertLead => "Expert / Lead",
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<String> for ExperienceLevel {
    fn from(raw: String) -> Self {
        // labels match exactly, surrounding whitespace included
        match raw.parse() {
            Ok(Self::Unrecognized(_)) | Err(_) => Self::Unrecognized(raw),
            Ok(level) => level,
        }
    }
}

impl From<ExperienceLevel> for String {
    fn from(level: ExperienceLevel) -> Self {
        match level {
            ExperienceLevel::Unrecognized(raw) => raw,
            known => known.label().to_string(),
        }
    }
}


fn nullable_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}


/// A user record as supplied by the host application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,

    #[serde(default, deserialize_with = "nullable_list")]
    pub skills: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<ExperienceLevel>,

    /// Opaque availability tag; store records may hold a string or a schedule object.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Fields the engine does not read, carried through untouched.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Profile {
    pub fn new(id: impl Into<String>, role: Role) -> Self {
        Self {
            id: id.into(),
            role: Some(role),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_career(mut self, career: impl Into<String>) -> Self {
        self.career = Some(career.into());
        self
    }

    #[must_use]
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = Some(level);
        self
    }

    #[must_use]
    pub fn with_availability(mut self, availability: impl Into<Value>) -> Self {
        self.availability = Some(availability.into());
        self
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn is_mentee(&self) -> bool {
        self.role == Some(Role::Mentee)
    }

    #[must_use]
    pub fn career_text(&self) -> &str {
        self.career.as_deref().unwrap_or("")
    }
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchTier {
    Top,
    Strong,
    Fair,
    Unmatched,
}

impl MatchTier {
    #[must_use]
    pub fn from_score(compatibility: u8) -> Self {
        match compatibility {
            86.. => Self::Top,
            80..=85 => Self::Strong,
            1..=79 => Self::Fair,
            0 => Self::Unmatched,
        }
    }
}


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    #[serde(flatten)]
    pub profile: Profile,

    pub compatibility: u8,
}

impl ScoredCandidate {
    pub fn new(mut profile: Profile, compatibility: u8) -> Self {
        profile.extra.remove("compatibility");
        Self {
            profile,
            compatibility,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.profile.id
    }

    #[must_use]
    pub fn tier(&self) -> MatchTier {
        MatchTier::from_score(self.compatibility)
    }
}
