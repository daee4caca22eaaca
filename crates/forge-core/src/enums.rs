//! Task kinds and closed label sets for IdeaForge.
//!
//! Label enums that the model writes as free text (category, difficulty,
//! demand/competition levels) provide a tolerant `from_label()` that never
//! fails: unrecognized labels resolve to a fixed default.
//!
//! Enums the model writes inside strict JSON use lowercase serialization and
//! accept capitalized aliases.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskKind
// ---------------------------------------------------------------------------

/// One of the fixed set of supported AI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    IdeaGeneration,
    CoachingAdvice,
    QuizOptions,
    SwotAnalysis,
    TimelineGeneration,
    TimelineModification,
    SmartSuggestions,
    Optimization,
}

impl TaskKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdeaGeneration => "idea_generation",
            Self::CoachingAdvice => "coaching_advice",
            Self::QuizOptions => "quiz_options",
            Self::SwotAnalysis => "swot_analysis",
            Self::TimelineGeneration => "timeline_generation",
            Self::TimelineModification => "timeline_modification",
            Self::SmartSuggestions => "smart_suggestions",
            Self::Optimization => "optimization",
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Business category of an idea draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Technology,
    Service,
    Creative,
    Retail,
    Consulting,
    Food,
    Health,
    Education,
    General,
}

/// Keyword table for [`Category::from_label`], in priority order.
///
/// Each entry lists whole words and word stems. Short words such as `app` and
/// `art` never match as stems, so `apparel` and `startup` stay unclaimed.
const CATEGORY_KEYWORDS: [(Category, &[&str], &[&str]); 8] = [
    (Category::Technology, &["app", "apps", "saas", "ai"], &["tech", "software"]),
    (Category::Consulting, &[], &["consult", "advisory"]),
    (Category::Service, &[], &["service"]),
    (Category::Creative, &["art", "arts", "artist", "crafts"], &["creativ", "design"]),
    (Category::Retail, &[], &["retail", "commerce", "shop", "store"]),
    (Category::Food, &["cafe", "catering"], &["food", "restaurant", "bak"]),
    (Category::Health, &[], &["health", "fitness", "wellness"]),
    (Category::Education, &[], &["educat", "tutor", "teach", "coach"]),
];

impl Category {
    pub const ALL: [Self; 9] = [
        Self::Technology,
        Self::Service,
        Self::Creative,
        Self::Retail,
        Self::Consulting,
        Self::Food,
        Self::Health,
        Self::Education,
        Self::General,
    ];

    /// Resolve a free-text label. Unrecognized labels map to [`Category::General`].
    ///
    /// An exact label wins. Otherwise the first table entry with a matching
    /// word decides.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if let Some(exact) = Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(label))
        {
            return exact;
        }

        let lowered = label.to_lowercase();
        let words: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .collect();
        CATEGORY_KEYWORDS
            .iter()
            .find(|(_, whole, stems)| {
                words.iter().any(|word| {
                    whole.contains(word) || stems.iter().any(|stem| word.starts_with(stem))
                })
            })
            .map_or(Self::General, |(category, _, _)| *category)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Technology => "Technology",
            Self::Service => "Service",
            Self::Creative => "Creative",
            Self::Retail => "Retail",
            Self::Consulting => "Consulting",
            Self::Food => "Food",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::General => "General",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Difficulty
// ---------------------------------------------------------------------------

/// How hard an idea is to get off the ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Resolve a free-text label. Unrecognized labels map to [`Difficulty::Medium`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.starts_with("easy") || label.starts_with("low") || label == "beginner" {
            Self::Easy
        } else if label.starts_with("hard")
            || label.starts_with("high")
            || label.starts_with("difficult")
        {
            Self::Hard
        } else {
            Self::Medium
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Level
// ---------------------------------------------------------------------------

/// Three-step rating used for market demand, competition, priority, impact,
/// and severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    #[serde(alias = "High", alias = "HIGH")]
    High,
    #[serde(alias = "Medium", alias = "MEDIUM")]
    Medium,
    #[serde(alias = "Low", alias = "LOW")]
    Low,
}

impl Level {
    /// Resolve a free-text label. Unrecognized labels map to [`Level::Medium`].
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        let label = label.trim().to_lowercase();
        if label.starts_with("high") || label.starts_with("strong") {
            Self::High
        } else if label.starts_with("low") || label.starts_with("weak") {
            Self::Low
        } else {
            Self::Medium
        }
    }

    /// Capitalized label as shown to users and in idea drafts.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// QuizStep
// ---------------------------------------------------------------------------

/// Step of the onboarding quiz an option set belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuizStep {
    Skills,
    Personality,
    Interests,
}

impl QuizStep {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Skills => "skills",
            Self::Personality => "personality",
            Self::Interests => "interests",
        }
    }

    /// Phrase describing what the options of this step are.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Skills => "practical skills a person could build a business on",
            Self::Personality => "personality traits relevant to running a business",
            Self::Interests => "interest areas that could inspire a business",
        }
    }
}

impl fmt::Display for QuizStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ModificationKind
// ---------------------------------------------------------------------------

/// Overall shape of a proposed timeline modification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ModificationKind {
    Add,
    Remove,
    Reorder,
    Modify,
    Restructure,
}

impl ModificationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Remove => "remove",
            Self::Reorder => "reorder",
            Self::Modify => "modify",
            Self::Restructure => "restructure",
        }
    }
}

impl fmt::Display for ModificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
