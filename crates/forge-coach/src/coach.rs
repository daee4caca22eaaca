use forge_config::ForgeConfig;
use forge_core::entities::{
    BusinessIdeaDraft, OptimizationOrder, QuizOptionSet, SmartSuggestionBundle, SwotAnalysis,
    TimelineModificationPlan, TimelineStage,
};
use forge_core::enums::TaskKind;
use forge_gateway::{Gateway, GatewayError, GeminiClient, GenerationParams};
use forge_parser::{
    fallback_ideas, fallback_timeline, parse_ideas, parse_modification_plan, parse_optimization,
    parse_quiz_options, parse_suggestions, parse_swot, parse_timeline,
};
use forge_prompt::tasks::{
    AdviceRequest, IdeaRequest, ModificationRequest, OptimizationRequest, QuizRequest,
    SuggestionRequest, SwotRequest, TimelineRequest,
};
use forge_prompt::{ContextLimits, PromptEngine, PromptTask};

use crate::context::ContextSource;
use crate::error::CoachError;
use crate::policy::with_fallback;

/// Runs AI tasks end to end: render the prompt, call the gateway once, parse
/// the response.
///
/// Holds no mutable state, so operations may run concurrently through `&self`.
pub struct Coach<G, C> {
    gateway: G,
    context: C,
    engine: PromptEngine,
}

impl<C: ContextSource> Coach<GeminiClient, C> {
    /// Build a coach backed by Gemini, using the context bounds from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] if the HTTP client cannot be built.
    pub fn from_config(config: &ForgeConfig, context: C) -> Result<Self, GatewayError> {
        let gateway = GeminiClient::from_config(&config.gemini)?;
        Ok(Self::new(gateway, context).with_limits(ContextLimits::from(&config.context)))
    }
}

impl<G: Gateway, C: ContextSource> Coach<G, C> {
    pub fn new(gateway: G, context: C) -> Self {
        Self {
            gateway,
            context,
            engine: PromptEngine::default(),
        }
    }

    #[must_use]
    pub fn with_limits(mut self, limits: ContextLimits) -> Self {
        self.engine = PromptEngine::new(limits);
        self
    }

    pub const fn gateway(&self) -> &G {
        &self.gateway
    }

    /// Render `task` with a fresh snapshot and send it with the task's preset.
    async fn ask<T: PromptTask + Sync>(&self, task: &T) -> Result<String, GatewayError> {
        let snapshot = self.context.snapshot();
        let prompt = self.engine.render(task, &snapshot).text();
        let params = GenerationParams::preset(T::KIND);
        tracing::debug!(task = %T::KIND, prompt_bytes = prompt.len(), "running task");
        self.gateway.generate(&prompt, Some(&params)).await
    }

    // ── Operations with fallback ──────────────────────────────────────

    /// Business ideas for the user's quiz answers.
    ///
    /// Never fails: a gateway error or a response with no usable records
    /// yields [`fallback_ideas`].
    pub async fn generate_ideas(&self, request: &IdeaRequest) -> Vec<BusinessIdeaDraft> {
        let call = async {
            let raw = self.ask(request).await?;
            parse_ideas(&raw)
                .into_ideas()
                .ok_or(CoachError::NothingUsable {
                    task: TaskKind::IdeaGeneration,
                })
        };
        with_fallback(TaskKind::IdeaGeneration, call, fallback_ideas).await
    }

    /// A launch timeline of at most `stage_count` stages.
    ///
    /// Never fails: a gateway error, a decode failure, or an empty array
    /// yields [`fallback_timeline`].
    pub async fn generate_timeline(&self, request: &TimelineRequest) -> Vec<TimelineStage> {
        let count = usize::try_from(request.stage_count)
            .unwrap_or(usize::MAX)
            .max(1);
        let call = async {
            let raw = self.ask(request).await?;
            let mut stages = parse_timeline(&raw)?;
            if stages.is_empty() {
                return Err(CoachError::NothingUsable {
                    task: TaskKind::TimelineGeneration,
                });
            }
            stages.truncate(count);
            Ok::<_, CoachError>(stages)
        };
        with_fallback(TaskKind::TimelineGeneration, call, || {
            fallback_timeline(count)
        })
        .await
    }

    // ── Operations that surface errors ────────────────────────────────

    /// Free-form coaching text, returned as the model wrote it.
    ///
    /// # Errors
    ///
    /// Returns [`CoachError::Gateway`] when the call fails.
    pub async fn coaching_advice(&self, request: &AdviceRequest) -> Result<String, CoachError> {
        Ok(self.ask(request).await?)
    }

    /// # Errors
    ///
    /// Returns [`CoachError::Gateway`] when the call fails.
    pub async fn quiz_options(&self, request: &QuizRequest) -> Result<QuizOptionSet, CoachError> {
        let raw = self.ask(request).await?;
        Ok(parse_quiz_options(request.step, &raw))
    }

    /// # Errors
    ///
    /// Returns [`CoachError::Gateway`] when the call fails.
    pub async fn analyze_idea(&self, request: &SwotRequest) -> Result<SwotAnalysis, CoachError> {
        let raw = self.ask(request).await?;
        Ok(parse_swot(&raw))
    }

    /// # Errors
    ///
    /// Returns [`CoachError::Gateway`] when the call fails, or
    /// [`CoachError::Parse`] when the response is not a modification plan.
    pub async fn modify_timeline(
        &self,
        request: &ModificationRequest,
    ) -> Result<TimelineModificationPlan, CoachError> {
        let raw = self.ask(request).await?;
        Ok(parse_modification_plan(&raw)?)
    }

    /// # Errors
    ///
    /// Returns [`CoachError::Gateway`] when the call fails, or
    /// [`CoachError::Parse`] when the response is not a suggestion bundle.
    pub async fn smart_suggestions(
        &self,
        request: &SuggestionRequest,
    ) -> Result<SmartSuggestionBundle, CoachError> {
        let raw = self.ask(request).await?;
        Ok(parse_suggestions(&raw)?)
    }

    /// # Errors
    ///
    /// Returns [`CoachError::Gateway`] when the call fails, or
    /// [`CoachError::Parse`] when the response is not an optimization order.
    pub async fn optimize_order(
        &self,
        request: &OptimizationRequest,
    ) -> Result<OptimizationOrder, CoachError> {
        let raw = self.ask(request).await?;
        Ok(parse_optimization(&raw)?)
    }
}
