use anyhow::Result;
use tempfile::TempDir;
use triple_finder::core::Storage;
use triple_finder::{
    CliConfig, LocalStorage, OutputFormat, TomlConfig, Triple, TripleEngine, TriplePipeline,
};

fn cli_config(bound: i64, format: OutputFormat, output_dir: &str) -> CliConfig {
    CliConfig {
        bound,
        format,
        output_dir: Some(output_dir.to_string()),
        filename: None,
        profile: false,
        monitor: false,
        verbose: false,
        json_logs: false,
    }
}

#[tokio::test]
async fn test_end_to_end_csv_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = cli_config(25, OutputFormat::Csv, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let engine = TripleEngine::new(TriplePipeline::new(storage, config));

    let summary = engine.run().await?;

    assert_eq!(summary.triples_found, 11);
    assert!(summary.location.ends_with("triples.csv"));
    assert_eq!(summary.profile.pair_evaluations, 325);

    let csv_content = std::fs::read_to_string(temp_dir.path().join("triples.csv"))?;
    let mut lines = csv_content.lines();
    assert_eq!(lines.next(), Some("a,b,c"));
    assert_eq!(lines.next(), Some("3,4,5"));
    assert_eq!(csv_content.lines().count(), 12);
    Ok(())
}

#[tokio::test]
async fn test_end_to_end_json_output_with_monitoring() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let mut config = cli_config(30, OutputFormat::Json, &output_path);
    config.filename = Some("thirty.json".to_string());
    let storage = LocalStorage::new(output_path.clone());
    let engine = TripleEngine::new_with_monitoring(TriplePipeline::new(storage, config), true);

    let summary = engine.run().await?;

    let json = std::fs::read_to_string(temp_dir.path().join("thirty.json"))?;
    let triples: Vec<Triple> = serde_json::from_str(&json)?;
    assert_eq!(triples.len(), summary.triples_found);
    assert_eq!(triples, triple_finder::enumerate_triples(30));
    Ok(())
}

#[tokio::test]
async fn test_empty_bound_still_writes_output() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let config = cli_config(-3, OutputFormat::Text, &output_path);
    let storage = LocalStorage::new(output_path.clone());
    let summary = TripleEngine::new(TriplePipeline::new(storage.clone(), config))
        .run()
        .await?;

    assert_eq!(summary.triples_found, 0);
    assert_eq!(summary.profile.pair_evaluations, 0);
    assert!(storage.read_file("triples.txt").await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_toml_config_drives_pipeline() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output_path = temp_dir.path().to_str().unwrap().replace('\\', "/");

    let config_content = format!(
        r#"
[search]
bound = 20

[output]
format = "text"
dir = "{}"
filename = "twenty.txt"

[monitoring]
enabled = false
profile = true
"#,
        output_path
    );
    let config_path = temp_dir.path().join("triples.toml");
    tokio::fs::write(&config_path, config_content).await?;

    let config = TomlConfig::from_file(&config_path)?;
    let storage = LocalStorage::new(output_path.clone());
    let summary = TripleEngine::new(TriplePipeline::new(storage, config))
        .run()
        .await?;

    let text = std::fs::read_to_string(temp_dir.path().join("twenty.txt"))?;
    assert_eq!(
        text,
        "(3, 4, 5)\n(5, 12, 13)\n(6, 8, 10)\n(8, 15, 17)\n(9, 12, 15)\n(12, 16, 20)\n(15, 20, 25)\n"
    );
    assert_eq!(summary.triples_found, 7);
    assert!(summary.profile.to_string().contains("function calls"));
    Ok(())
}
