//! GroundingEngine: prompt → generation → strict validation → answer/refusal.

use regula_core::config::GroundingConfig;
use regula_core::constants::REFUSAL_NOT_FOUND;
use regula_core::errors::RegulaResult;
use regula_core::models::{AnswerResult, FusedResult, GenerationOptions};
use regula_core::passage::RegulationTag;
use regula_core::traits::IGenerator;
use tracing::{debug, warn};

use crate::citations;
use crate::prompt;

/// The grounding half of the pipeline: ranked passages in, cited answer or
/// refusal out.
pub struct GroundingEngine<'a> {
    generator: &'a dyn IGenerator,
    config: GroundingConfig,
}

impl<'a> GroundingEngine<'a> {
    pub fn new(generator: &'a dyn IGenerator, config: GroundingConfig) -> Self {
        Self { generator, config }
    }

    /// Generate a grounded answer for `question` over `results`.
    ///
    /// Zero results refuse immediately; the generator is never called with
    /// an empty evidence prompt.
    pub async fn answer(
        &self,
        question: &str,
        results: &[FusedResult],
    ) -> RegulaResult<AnswerResult> {
        if results.is_empty() {
            debug!("no fused results; refusing without generation");
            return Ok(refusal());
        }

        let prompt = prompt::build_prompt(question, results, self.config.passage_char_budget);
        let response = self.generate(&prompt).await?;
        Ok(self.resolve(&response, results))
    }

    /// Generate a cross-regulation comparison answer.
    ///
    /// Citation numbering is continuous across the two sections, so marker
    /// validation and the citation list run over the concatenated results.
    pub async fn answer_comparison(
        &self,
        question: &str,
        left: (&RegulationTag, &[FusedResult]),
        right: (&RegulationTag, &[FusedResult]),
    ) -> RegulaResult<AnswerResult> {
        let (left_tag, left_results) = left;
        let (right_tag, right_results) = right;

        if left_results.is_empty() && right_results.is_empty() {
            debug!("no fused results on either side; refusing without generation");
            return Ok(refusal());
        }

        let prompt = prompt::build_comparison_prompt(
            question,
            left_tag,
            left_results,
            right_tag,
            right_results,
            self.config.passage_char_budget,
        );
        let response = self.generate(&prompt).await?;

        let mut combined = left_results.to_vec();
        combined.extend_from_slice(right_results);
        Ok(self.resolve(&response, &combined))
    }

    async fn generate(&self, prompt: &str) -> RegulaResult<String> {
        let options = GenerationOptions {
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };
        self.generator.generate(prompt, &options).await
    }

    /// Apply the refusal policy to a raw response.
    ///
    /// Order matters: the insufficiency reply is checked first (it is not
    /// required to cite), then markers are validated strictly. Either
    /// failure collapses to the same user-visible refusal.
    fn resolve(&self, response: &str, results: &[FusedResult]) -> AnswerResult {
        if prompt::is_insufficient(response) {
            debug!("generator reported insufficient evidence");
            return refusal();
        }

        match citations::validate_markers(response, results.len()) {
            Ok(markers) => {
                debug!(markers = markers.len(), "response markers validated");
                AnswerResult::Answered {
                    text: response.trim().to_string(),
                    citations: citations::citation_list(results, self.config.passage_char_budget),
                }
            }
            Err(err) => {
                // Audit trail: an integrity violation means a prompt or
                // parsing defect, not a user error.
                warn!(error = %err, passages = results.len(), "citation validation failed; refusing");
                refusal()
            }
        }
    }
}

fn refusal() -> AnswerResult {
    AnswerResult::Refused {
        reason: REFUSAL_NOT_FOUND.to_string(),
    }
}
