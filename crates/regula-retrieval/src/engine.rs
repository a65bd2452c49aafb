//! RetrievalEngine: expansion → parallel hybrid search → fusion.
//!
//! Every variant's keyword and semantic searches run concurrently and join
//! at a single barrier; fusion never ranks partial evidence.

use futures::future::{try_join, try_join_all};
use regula_core::config::{ExpansionConfig, RetrievalConfig};
use regula_core::errors::{RegulaError, RegulaResult};
use regula_core::models::{FusedResult, QueryVariant};
use regula_core::passage::RegulationTag;
use regula_core::traits::IPassageIndex;
use tracing::{debug, info};

use crate::expansion::{self, SynonymTable};
use crate::search::fusion::{self, VariantResults};

/// The retrieval half of the pipeline: raw query in, fused passages out.
pub struct RetrievalEngine<'a> {
    index: &'a dyn IPassageIndex,
    table: SynonymTable,
    expansion: ExpansionConfig,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        index: &'a dyn IPassageIndex,
        expansion: ExpansionConfig,
        config: RetrievalConfig,
    ) -> Self {
        let table = SynonymTable::from_config(&expansion);
        Self {
            index,
            table,
            expansion,
            config,
        }
    }

    /// Expand the query and retrieve a fused ranking.
    pub async fn retrieve(
        &self,
        query: &str,
        filter: Option<&RegulationTag>,
    ) -> RegulaResult<Vec<FusedResult>> {
        let variants = expansion::expand(query, filter, &self.table, &self.expansion)?;
        self.retrieve_variants(&variants, filter).await
    }

    /// Retrieve for already-expanded variants.
    ///
    /// Each search over-fetches `top_k * over_fetch_factor` candidates so
    /// fusion has enough overlap evidence before the final cut.
    pub async fn retrieve_variants(
        &self,
        variants: &[QueryVariant],
        filter: Option<&RegulationTag>,
    ) -> RegulaResult<Vec<FusedResult>> {
        let limit = self.config.top_k * self.config.over_fetch_factor;

        let searches = variants.iter().map(|variant| async move {
            let (keyword, semantic) = try_join(
                self.index.keyword_search(&variant.text, filter, limit),
                self.index.semantic_search(&variant.text, filter, limit),
            )
            .await?;
            debug!(
                variant = %variant.text,
                keyword = keyword.len(),
                semantic = semantic.len(),
                "variant search complete"
            );
            Ok::<_, RegulaError>(VariantResults {
                keyword,
                semantic,
                weight: variant.weight,
            })
        });

        let variant_results = try_join_all(searches).await?;

        let fused = fusion::fuse(&variant_results, self.config.alpha, self.config.top_k);
        info!(
            variants = variants.len(),
            results = fused.len(),
            "hybrid retrieval complete"
        );
        Ok(fused)
    }
}
