pub mod cli;
pub mod toml_config;

pub use crate::core::render::OutputFormat;

pub const DEFAULT_BOUND: i64 = 1000;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use super::{OutputFormat, DEFAULT_BOUND};
    use crate::core::ConfigProvider;
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_output_filename, validate_path, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "triple-finder")]
    #[command(about = "Brute-force search for Pythagorean triples")]
    pub struct CliConfig {
        /// Largest value considered for the two shorter sides
        #[arg(long, default_value_t = DEFAULT_BOUND, allow_negative_numbers = true)]
        pub bound: i64,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        pub format: OutputFormat,

        /// Directory to write results into; stdout when omitted
        #[arg(long)]
        pub output_dir: Option<String>,

        /// Output file name, defaults to triples.<ext>
        #[arg(long)]
        pub filename: Option<String>,

        #[arg(long, help = "Print a call-count profile to stderr")]
        pub profile: bool,

        #[arg(long, help = "Log process CPU and memory usage")]
        pub monitor: bool,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,
    }

    impl ConfigProvider for CliConfig {
        fn bound(&self) -> i64 {
            self.bound
        }

        fn output_format(&self) -> OutputFormat {
            self.format
        }

        fn output_dir(&self) -> Option<&str> {
            self.output_dir.as_deref()
        }

        fn output_filename(&self) -> Option<&str> {
            self.filename.as_deref()
        }

        fn profile(&self) -> bool {
            self.profile
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(dir) = &self.output_dir {
                validate_path("output_dir", dir)?;
            }
            if let Some(filename) = &self.filename {
                validate_output_filename("filename", filename, self.format)?;
            }
            Ok(())
        }
    }

}
