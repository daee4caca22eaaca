//! Task-specific prompt templates.
//!
//! The response parsers in `forge-parser` depend on the structure requested
//! here: `IDEA <n>` records with `Key: value` lines, one quiz option per line,
//! fixed SWOT section headers, and strict JSON for the timeline tasks.

use forge_core::enums::TaskKind;

use crate::params::TemplateParams;

/// Number of idea records the idea template asks for.
pub const IDEA_COUNT: usize = 5;

/// SWOT section headers, in the order the model is asked to write them.
pub const SWOT_HEADERS: [&str; 6] = [
    "VIABILITY",
    "STRENGTHS",
    "WEAKNESSES",
    "OPPORTUNITIES",
    "THREATS",
    "RECOMMENDATIONS",
];

const TIMELINE_STAGE_SHAPE: &str = r#"{
  "title": "Stage name",
  "description": "What this stage achieves",
  "duration": "2-3 weeks",
  "keyTasks": ["Task 1", "Task 2", "Task 3"],
  "successMetrics": ["Metric 1", "Metric 2"],
  "emoji": "🚀"
}"#;

const MODIFICATION_SHAPE: &str = r#"{
  "kind": "add | remove | reorder | modify | restructure",
  "confidence": 0.0,
  "reasoning": "Why these changes help",
  "changes": [
    {
      "stageId": "id of the affected stage, or null when adding",
      "newStage": {
        "title": "Stage name",
        "description": "What this stage achieves",
        "duration": "2-3 weeks",
        "keyTasks": ["Task 1"],
        "successMetrics": ["Metric 1"],
        "emoji": "🎯"
      },
      "newPosition": 0
    }
  ],
  "suggestedReminders": [
    {"title": "Reminder title", "message": "Reminder text", "daysFromNow": 3}
  ],
  "suggestedNotes": [
    {"title": "Note title", "content": "Note text", "category": "planning"}
  ]
}"#;

const SUGGESTIONS_SHAPE: &str = r#"{
  "nextActions": [
    {"title": "...", "description": "...", "priority": "high | medium | low", "estimatedTime": "30 minutes"}
  ],
  "improvementOpportunities": [
    {"area": "...", "suggestion": "...", "impact": "high | medium | low"}
  ],
  "riskItems": [
    {"risk": "...", "severity": "high | medium | low", "mitigation": "..."}
  ],
  "resourceRecommendations": [
    {"title": "...", "type": "book | course | tool | community", "description": "...", "url": null}
  ],
  "milestoneAdjustments": [
    {"stageTitle": "...", "adjustment": "...", "reason": "..."}
  ]
}"#;

const OPTIMIZATION_SHAPE: &str = r#"{
  "orderedStageIds": ["id-1", "id-2"],
  "reasoning": "Why this order works best"
}"#;

/// Render the template for `kind` from `params`.
///
/// Never fails. A missing parameter renders as an empty segment.
#[must_use]
pub fn render_template(kind: TaskKind, params: &TemplateParams) -> String {
    match kind {
        TaskKind::IdeaGeneration => idea_generation(params),
        TaskKind::CoachingAdvice => coaching_advice(params),
        TaskKind::QuizOptions => quiz_options(params),
        TaskKind::SwotAnalysis => swot_analysis(params),
        TaskKind::TimelineGeneration => timeline_generation(params),
        TaskKind::TimelineModification => timeline_modification(params),
        TaskKind::SmartSuggestions => smart_suggestions(params),
        TaskKind::Optimization => optimization(params),
    }
}

fn idea_generation(params: &TemplateParams) -> String {
    format!(
        "You are an experienced business coach helping someone discover business ideas that fit who they are.

PROFILE:
Skills: {skills}
Personality traits: {personality}
Interests: {interests}

Generate exactly {IDEA_COUNT} business ideas tailored to this profile.
Write each idea in EXACTLY this format, with no extra commentary before or after:

IDEA 1
Title: short, memorable name
Description: two or three sentences on what the business does and for whom
Category: one of Technology, Service, Creative, Retail, Consulting, Food, Health, Education, General
Difficulty: one of Easy, Medium, Hard
Revenue: estimated monthly revenue range, e.g. $2K-5K/month
Launch: time to launch, e.g. 1-2 months
Skills: comma-separated skills required
Cost: startup cost range, e.g. $500-2,000
Margin: expected profit margin range, e.g. 40-60%
Demand: one of High, Medium, Low
Competition: one of High, Medium, Low
Note: one sentence on why this idea suits this person

Continue with IDEA 2 through IDEA {IDEA_COUNT} in the same format.",
        skills = params.text("skills"),
        personality = params.text("personality"),
        interests = params.text("interests"),
    )
}

fn coaching_advice(params: &TemplateParams) -> String {
    format!(
        "You are a supportive, practical business coach for first-time founders.

SITUATION:
{situation}

ACTIVE GOALS:
{goals}

Answer the request below with clear sections:
Assessment - what is going on, in two or three sentences
Next Steps - three to five concrete actions for this week
Watch Out For - one or two pitfalls
Encouragement - one short closing line

Keep the whole answer under 300 words and speak directly to the person.",
        situation = params.text("situation"),
        goals = params.bullets("goals"),
    )
}

fn quiz_options(params: &TemplateParams) -> String {
    let previous = params.text("previous");
    let previous_line = if previous.is_empty() {
        String::new()
    } else {
        format!("\nThe person has already chosen: {previous}.")
    };
    format!(
        "You are designing an onboarding quiz for a business idea app.

List {count} {description} for the \"{step}\" step.{previous_line}

Output one option per line.
Do not number the options. Do not use bullets or dashes. Do not add headers, blank lines, or explanations.
Keep each option under five words.",
        count = params.text("count"),
        description = params.text("step_description"),
        step = params.text("step"),
    )
}

fn swot_analysis(params: &TemplateParams) -> String {
    let [viability, strengths, weaknesses, opportunities, threats, recommendations] = SWOT_HEADERS;
    format!(
        "You are a business analyst evaluating a small-business idea.

IDEA:
Title: {title}
Description: {description}
Category: {category}

Respond in EXACTLY this format:

{viability}: a single score from 0 to 100
{strengths}:
- item
{weaknesses}:
- item
{opportunities}:
- item
{threats}:
- item
{recommendations}:
- item

Give two to four bullet items per section, each starting with \"- \". Do not add any other text.",
        title = params.text("title"),
        description = params.text("description"),
        category = params.text("category"),
    )
}

fn timeline_generation(params: &TemplateParams) -> String {
    format!(
        "You are a startup mentor planning a realistic launch timeline.

BUSINESS IDEA:
{idea}

Create exactly {count} sequential stages from first steps to growth.
Respond with ONLY a JSON array. Each element must be an object of this shape:
{TIMELINE_STAGE_SHAPE}

Do not wrap the array in markdown and do not add text before or after it.",
        idea = params.text("idea"),
        count = params.text("count"),
    )
}

fn timeline_modification(params: &TemplateParams) -> String {
    format!(
        "You are a startup mentor adjusting a founder's launch timeline.

BUSINESS IDEA:
{idea}

CURRENT STAGES (in order, with ids):
{stages}

Work out how the timeline should change to satisfy the request below.
Respond with ONLY a single JSON object of this shape:
{MODIFICATION_SHAPE}

Reference existing stages by their id. Use null for stageId when adding a stage.
confidence is a number between 0 and 1. Do not add text outside the JSON object.",
        idea = params.text("idea"),
        stages = params.bullets("stages"),
    )
}

fn smart_suggestions(params: &TemplateParams) -> String {
    format!(
        "You are a proactive business coach reviewing a founder's progress.

BUSINESS IDEA:
{idea}

CURRENT STAGES (in order, with ids):
{stages}

Suggest what to do next, what to improve, which risks to watch, useful resources,
and any milestone adjustments.
Respond with ONLY a single JSON object of this shape:
{SUGGESTIONS_SHAPE}

Keep each list to at most three entries. Do not add text outside the JSON object.",
        idea = params.text("idea"),
        stages = params.bullets("stages"),
    )
}

fn optimization(params: &TemplateParams) -> String {
    format!(
        "You are a startup operations expert optimizing the order of work.

BUSINESS IDEA:
{idea}

CURRENT STAGES (in order, with ids):
{stages}

Recommend the order that gets this business to revenue fastest with the least risk.
Completed stages keep their place before pending ones.
Respond with ONLY a single JSON object of this shape:
{OPTIMIZATION_SHAPE}

List every stage id exactly once. Do not add text outside the JSON object.",
        idea = params.text("idea"),
        stages = params.bullets("stages"),
    )
}
