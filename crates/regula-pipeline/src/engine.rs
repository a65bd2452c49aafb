//! AnswerPipeline: the full request path behind one call.
//!
//! Retrieval failures surface as errors; everything after a successful
//! retrieval collapses into the closed set of user-visible states. The
//! configured deadline caps the whole request, and expiry is an answer
//! (refused-timeout), not an error.

use std::future::Future;
use std::time::Duration;

use futures::future::try_join;
use regula_core::config::RegulaConfig;
use regula_core::constants::REFUSAL_TIMEOUT;
use regula_core::errors::{RegulaResult, RetrievalError};
use regula_core::models::{AnswerResult, ResolvedAnswer};
use regula_core::passage::RegulationTag;
use regula_core::traits::{IGenerator, IPassageIndex, IWebSearch};
use regula_fallback::FallbackEngine;
use regula_grounding::GroundingEngine;
use regula_retrieval::RetrievalEngine;
use tracing::{debug, info, info_span, warn, Instrument};

use crate::context::RequestContext;

/// Orchestrates retrieval, grounding, and fallback over borrowed
/// collaborators. One instance serves many concurrent requests; per-request
/// state lives entirely on the call stack.
pub struct AnswerPipeline<'a> {
    index: &'a dyn IPassageIndex,
    generator: &'a dyn IGenerator,
    web: &'a dyn IWebSearch,
    config: RegulaConfig,
}

impl<'a> AnswerPipeline<'a> {
    pub fn new(
        index: &'a dyn IPassageIndex,
        generator: &'a dyn IGenerator,
        web: &'a dyn IWebSearch,
        config: RegulaConfig,
    ) -> Self {
        Self {
            index,
            generator,
            web,
            config,
        }
    }

    /// Answer a question from the indexed corpus.
    ///
    /// An index outage propagates as `Err`; the caller decides whether to
    /// retry or surface it. Every other outcome is an `Ok` carrying one of
    /// the terminal states: a cited answer, or a refusal with the fallback
    /// resolver's verdict attached.
    pub async fn answer(
        &self,
        question: &str,
        filter: Option<&RegulationTag>,
    ) -> RegulaResult<ResolvedAnswer> {
        if question.trim().is_empty() {
            return Err(RetrievalError::InvalidQuery.into());
        }

        let ctx = RequestContext::new();
        let span = info_span!("answer", request_id = %ctx.request_id);
        async {
            let resolved = self
                .with_deadline(self.answer_grounded(question, filter))
                .await?;
            info!(
                elapsed_ms = ctx.elapsed_ms(),
                refused = resolved.answer.is_refused(),
                "request complete"
            );
            Ok(resolved)
        }
        .instrument(span)
        .await
    }

    /// Answer a question across two regulations side by side.
    ///
    /// Both retrievals run concurrently and ground into a single response
    /// with continuous citation numbering. A comparison refusal never
    /// triggers fallback: a web digest cannot arbitrate between two
    /// regulations.
    pub async fn compare(
        &self,
        question: &str,
        left: &RegulationTag,
        right: &RegulationTag,
    ) -> RegulaResult<ResolvedAnswer> {
        if question.trim().is_empty() {
            return Err(RetrievalError::InvalidQuery.into());
        }

        let ctx = RequestContext::new();
        let span = info_span!(
            "compare",
            request_id = %ctx.request_id,
            left = %left,
            right = %right,
        );
        async {
            let resolved = self
                .with_deadline(self.compare_grounded(question, left, right))
                .await?;
            info!(
                elapsed_ms = ctx.elapsed_ms(),
                refused = resolved.answer.is_refused(),
                "request complete"
            );
            Ok(resolved)
        }
        .instrument(span)
        .await
    }

    /// Run `work` under the configured deadline, if any. Expiry drops the
    /// in-flight future and resolves to the timeout refusal.
    async fn with_deadline<F>(&self, work: F) -> RegulaResult<ResolvedAnswer>
    where
        F: Future<Output = RegulaResult<ResolvedAnswer>>,
    {
        let Some(deadline_ms) = self.config.pipeline.deadline_ms else {
            return work.await;
        };
        match tokio::time::timeout(Duration::from_millis(deadline_ms), work).await {
            Ok(resolved) => resolved,
            Err(_) => {
                warn!(deadline_ms, "deadline expired; refusing");
                Ok(ResolvedAnswer {
                    answer: AnswerResult::Refused {
                        reason: REFUSAL_TIMEOUT.to_string(),
                    },
                    fallback: None,
                })
            }
        }
    }

    async fn answer_grounded(
        &self,
        question: &str,
        filter: Option<&RegulationTag>,
    ) -> RegulaResult<ResolvedAnswer> {
        let retrieval = RetrievalEngine::new(
            self.index,
            self.config.expansion.clone(),
            self.config.retrieval.clone(),
        );
        let grounding = GroundingEngine::new(self.generator, self.config.grounding.clone());

        let results = retrieval.retrieve(question, filter).await?;
        let answer = grounding.answer(question, &results).await?;

        if answer.is_refused() {
            debug!("grounded path refused; resolving fallback");
            let fallback = FallbackEngine::new(self.web, self.config.fallback.clone());
            let resolution = fallback.resolve(question, filter).await;
            return Ok(ResolvedAnswer {
                answer,
                fallback: Some(resolution),
            });
        }
        Ok(ResolvedAnswer::answered(answer))
    }

    async fn compare_grounded(
        &self,
        question: &str,
        left: &RegulationTag,
        right: &RegulationTag,
    ) -> RegulaResult<ResolvedAnswer> {
        let retrieval = RetrievalEngine::new(
            self.index,
            self.config.expansion.clone(),
            self.config.retrieval.clone(),
        );
        let grounding = GroundingEngine::new(self.generator, self.config.grounding.clone());

        let (left_results, right_results) = try_join(
            retrieval.retrieve(question, Some(left)),
            retrieval.retrieve(question, Some(right)),
        )
        .await?;
        debug!(
            left = left_results.len(),
            right = right_results.len(),
            "comparison retrieval complete"
        );

        let answer = grounding
            .answer_comparison(question, (left, &left_results), (right, &right_results))
            .await?;
        Ok(ResolvedAnswer {
            answer,
            fallback: None,
        })
    }
}
