//! Brute-force Pythagorean triple search.
//!
//! [`enumerate_triples`] walks every pair `1 <= a <= b <= bound` and keeps the
//! pairs whose floating point hypotenuse is a whole number. The rest of the
//! crate wraps that search in a small CLI pipeline (search, render, store)
//! with profiling and process monitoring.

pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{
    cli::{LocalStorage, StdoutStorage},
    toml_config::TomlConfig,
};
pub use crate::core::{
    engine::{RunSummary, TripleEngine},
    hypotenuse::{hypotenuse, is_integral},
    pipeline::TriplePipeline,
    profile::ProfileReport,
    render::OutputFormat,
    triples::{enumerate_triples, enumerate_triples_profiled},
};
pub use domain::model::Triple;
pub use utils::error::{Result, TripleError};
