use crate::core::Storage;
use crate::utils::error::{Result, TripleError};
use std::path::Path;
use tokio::io::AsyncWriteExt;

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: String,
}

impl LocalStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }
}

impl Storage for LocalStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        let full_path = Path::new(&self.base_path).join(path);
        let data = tokio::fs::read(full_path).await?;
        Ok(data)
    }

    async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = Path::new(&self.base_path).join(path);

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        tokio::fs::write(full_path, data).await?;
        Ok(())
    }

    fn location(&self, path: &str) -> String {
        Path::new(&self.base_path).join(path).display().to_string()
    }
}

/// Writes results to standard output; the file name is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutStorage;

impl Storage for StdoutStorage {
    async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
        Err(TripleError::ConfigError {
            message: format!("cannot read '{}' back from stdout", path),
        })
    }

    async fn write_file(&self, _path: &str, data: &[u8]) -> Result<()> {
        let mut stdout = tokio::io::stdout();
        stdout.write_all(data).await?;
        stdout.flush().await?;
        Ok(())
    }

    fn location(&self, _path: &str) -> String {
        "<stdout>".to_string()
    }
}
