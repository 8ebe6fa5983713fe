use crate::domain::model::Triple;
use crate::utils::error::{Result, TripleError};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Text => "text",
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        };
        f.write_str(name)
    }
}

pub fn render(triples: &[Triple], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(triples)),
        OutputFormat::Csv => render_csv(triples),
        OutputFormat::Json => render_json(triples),
    }
}

fn render_text(triples: &[Triple]) -> String {
    let mut out = String::new();
    for triple in triples {
        out.push_str(&triple.to_string());
        out.push('\n');
    }
    out
}

fn render_csv(triples: &[Triple]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if triples.is_empty() {
        // serialize() 只在第一筆資料時寫入標題
        writer.write_record(["a", "b", "c"])?;
    }
    for triple in triples {
        writer.serialize(triple)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| TripleError::ProcessingError {
            message: format!("Failed to flush CSV output: {}", e),
        })?;
    String::from_utf8(bytes).map_err(|e| TripleError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

fn render_json(triples: &[Triple]) -> Result<String> {
    let mut out = serde_json::to_string_pretty(triples)?;
    out.push('\n');
    Ok(out)
}
