use crate::core::render::OutputFormat;
use crate::domain::model::{RenderedOutput, SearchResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
    /// Human readable location of `path` once written.
    fn location(&self, path: &str) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn bound(&self) -> i64;
    fn output_format(&self) -> OutputFormat;
    fn output_dir(&self) -> Option<&str>;
    fn output_filename(&self) -> Option<&str>;
    fn profile(&self) -> bool;

    fn resolved_filename(&self) -> String {
        self.output_filename()
            .map(str::to_string)
            .unwrap_or_else(|| format!("triples.{}", self.output_format().extension()))
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn search(&self) -> Result<SearchResult>;
    async fn render(&self, result: SearchResult) -> Result<RenderedOutput>;
    async fn load(&self, output: RenderedOutput) -> Result<String>;
}
