use crate::core::render::render;
use crate::core::triples::enumerate_triples_profiled;
use crate::core::{ConfigProvider, Pipeline, RenderedOutput, SearchResult, Storage};
use crate::utils::error::Result;

/// Search, render, then store the triples for one configured bound.
pub struct TriplePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> TriplePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TriplePipeline<S, C> {
    async fn search(&self) -> Result<SearchResult> {
        let bound = self.config.bound();
        tracing::debug!("Searching for triples with bound {}", bound);

        // 計算密集，移到 blocking 執行緒避免阻塞 runtime
        let (triples, profile) =
            tokio::task::spawn_blocking(move || enumerate_triples_profiled(bound)).await?;

        tracing::debug!(
            "Evaluated {} pairs in {:?} ({:.0} pairs/s)",
            profile.pair_evaluations,
            profile.elapsed,
            profile.pairs_per_second()
        );

        Ok(SearchResult {
            bound,
            triples,
            profile,
        })
    }

    async fn render(&self, result: SearchResult) -> Result<RenderedOutput> {
        let format = self.config.output_format();
        tracing::debug!("Rendering {} triples as {}", result.triples.len(), format);

        let content = render(&result.triples, format)?;

        Ok(RenderedOutput {
            filename: self.config.resolved_filename(),
            content,
            triples_found: result.triples.len(),
            profile: result.profile,
        })
    }

    async fn load(&self, output: RenderedOutput) -> Result<String> {
        self.storage
            .write_file(&output.filename, output.content.as_bytes())
            .await?;

        Ok(self.storage.location(&output.filename))
    }
}
