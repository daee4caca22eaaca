//! Deterministic substitute content used when a model call or its parsing
//! yields nothing usable. No I/O, no randomness.

use forge_core::entities::{BusinessIdeaDraft, TimelineStage};
use forge_core::enums::{Category, Difficulty, Level};

/// Upper bound on fallback timeline length.
pub const MAX_FALLBACK_STAGES: usize = 6;

struct StageTemplate {
    title: &'static str,
    description: &'static str,
    duration: &'static str,
    key_tasks: &'static [&'static str],
    success_metrics: &'static [&'static str],
    emoji: &'static str,
}

const STAGES: [StageTemplate; MAX_FALLBACK_STAGES] = [
    StageTemplate {
        title: "Foundation",
        description: "Research the market, define your offer, and set up the basics.",
        duration: "1-2 weeks",
        key_tasks: &[
            "Research competitors",
            "Define target customer",
            "Register business name",
        ],
        success_metrics: &["Clear value proposition", "Business registered"],
        emoji: "🏗️",
    },
    StageTemplate {
        title: "MVP",
        description: "Build the smallest version of your product or service that delivers value.",
        duration: "2-4 weeks",
        key_tasks: &["List core features", "Build first version", "Set initial pricing"],
        success_metrics: &["Working prototype", "Pricing decided"],
        emoji: "🛠️",
    },
    StageTemplate {
        title: "Validate",
        description: "Put the MVP in front of real customers and learn from their feedback.",
        duration: "2-3 weeks",
        key_tasks: &[
            "Recruit test customers",
            "Collect feedback",
            "Iterate on the offer",
        ],
        success_metrics: &["10 customer conversations", "First paying customer"],
        emoji: "🔍",
    },
    StageTemplate {
        title: "Launch",
        description: "Open to the public and start consistent marketing.",
        duration: "1-2 weeks",
        key_tasks: &[
            "Announce launch",
            "Set up sales channels",
            "Start marketing routine",
        ],
        success_metrics: &["Public launch completed", "Steady weekly sales"],
        emoji: "🚀",
    },
    StageTemplate {
        title: "Scale",
        description: "Double down on what works and systemize operations.",
        duration: "1-3 months",
        key_tasks: &[
            "Automate repetitive work",
            "Expand best channel",
            "Track unit economics",
        ],
        success_metrics: &["Revenue growing month over month", "Documented processes"],
        emoji: "📈",
    },
    StageTemplate {
        title: "Growth",
        description: "Explore new markets, offers, and partnerships for long-term growth.",
        duration: "Ongoing",
        key_tasks: &[
            "Test a new offer",
            "Build partnerships",
            "Plan first hire",
        ],
        success_metrics: &["New revenue stream", "Sustainable profit"],
        emoji: "🌱",
    },
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// The canonical stage template, truncated to `count` clamped to `1..=6`.
#[must_use]
pub fn fallback_timeline(count: usize) -> Vec<TimelineStage> {
    STAGES
        .iter()
        .take(count.clamp(1, MAX_FALLBACK_STAGES))
        .map(|stage| TimelineStage {
            title: stage.title.to_string(),
            description: stage.description.to_string(),
            duration_label: stage.duration.to_string(),
            key_tasks: owned(stage.key_tasks),
            success_metrics: owned(stage.success_metrics),
            emoji: stage.emoji.to_string(),
        })
        .collect()
}

/// Three pre-authored idea drafts spanning different categories and
/// difficulty levels.
#[must_use]
pub fn fallback_ideas() -> Vec<BusinessIdeaDraft> {
    vec![
        BusinessIdeaDraft {
            title: "Local Skills Workshop".to_string(),
            description: "Teach a practical skill you already have through small in-person or \
                          online workshops for beginners in your area."
                .to_string(),
            category: Category::Education,
            difficulty: Difficulty::Easy,
            estimated_revenue_range: "$500-2K/month".to_string(),
            launch_timeframe: "2-4 weeks".to_string(),
            required_skills: owned(&["Teaching", "Communication", "Organization"]),
            startup_cost_range: "$100-500".to_string(),
            profit_margin_range: "60-80%".to_string(),
            market_demand: Level::Medium,
            competition_level: Level::Low,
            personal_note: "A low-risk way to test whether people will pay for what you know."
                .to_string(),
        },
        BusinessIdeaDraft {
            title: "Freelance Digital Services".to_string(),
            description: "Offer websites, social media management, or design work to small local \
                          businesses that lack an online presence."
                .to_string(),
            category: Category::Service,
            difficulty: Difficulty::Medium,
            estimated_revenue_range: "$2K-6K/month".to_string(),
            launch_timeframe: "1-2 months".to_string(),
            required_skills: owned(&["Design", "Marketing", "Client Management"]),
            startup_cost_range: "$300-1,500".to_string(),
            profit_margin_range: "50-70%".to_string(),
            market_demand: Level::High,
            competition_level: Level::Medium,
            personal_note: "Builds a client base quickly and grows with the skills you add."
                .to_string(),
        },
        BusinessIdeaDraft {
            title: "Niche Subscription App".to_string(),
            description: "Build a focused mobile or web app that solves one recurring problem \
                          for a specific community and charge a monthly subscription."
                .to_string(),
            category: Category::Technology,
            difficulty: Difficulty::Hard,
            estimated_revenue_range: "$1K-10K/month".to_string(),
            launch_timeframe: "3-6 months".to_string(),
            required_skills: owned(&["Coding", "Product Design", "Customer Research"]),
            startup_cost_range: "$1,000-5,000".to_string(),
            profit_margin_range: "70-90%".to_string(),
            market_demand: Level::Medium,
            competition_level: Level::High,
            personal_note: "Higher effort up front with recurring revenue that compounds."
                .to_string(),
        },
    ]
}
