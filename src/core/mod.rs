pub mod engine;
pub mod hypotenuse;
pub mod pipeline;
pub mod profile;
pub mod render;
pub mod triples;

pub use crate::domain::model::{RenderedOutput, SearchResult, Triple};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
