use crate::core::render::OutputFormat;
use crate::utils::error::{Result, TripleError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TripleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TripleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Output file name: a single path component whose extension matches `format`.
pub fn validate_output_filename(
    field_name: &str,
    filename: &str,
    format: OutputFormat,
) -> Result<()> {
    validate_path(field_name, filename)?;

    if filename.contains('/') || filename.contains('\\') {
        return Err(TripleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    let extension = std::path::Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str());
    match extension {
        Some(ext) if ext == format.extension() => Ok(()),
        Some(ext) => Err(TripleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: format!(
                "Extension '{}' does not match output format {} (expected .{})",
                ext,
                format,
                format.extension()
            ),
        }),
        None => Err(TripleError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: filename.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("output_dir", "./output").is_ok());
        assert!(validate_path("output_dir", "").is_err());
        assert!(validate_path("output_dir", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_output_filename() {
        assert!(validate_output_filename("filename", "triples.csv", OutputFormat::Csv).is_ok());
        assert!(validate_output_filename("filename", "triples.txt", OutputFormat::Text).is_ok());
        assert!(validate_output_filename("filename", "triples.csv", OutputFormat::Json).is_err());
        assert!(validate_output_filename("filename", "triples", OutputFormat::Json).is_err());
        assert!(
            validate_output_filename("filename", "out/triples.json", OutputFormat::Json).is_err()
        );
    }
}
