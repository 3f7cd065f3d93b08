use anyhow::Result;
use elec_client::utils::validation::Validate;
use elec_client::{ClientConfig, ClientError};
use tempfile::TempDir;

#[tokio::test]
async fn test_load_config_from_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("client.toml");
    tokio::fs::write(
        &config_path,
        r#"
base_url = "http://market.local:9090"
timeout_seconds = 5
token_header = "Authorization"
"#,
    )
    .await?;

    let config = ClientConfig::from_file(&config_path)?;
    config.validate()?;

    assert_eq!(config.base_url, "http://market.local:9090");
    assert_eq!(config.timeout_seconds, 5);
    assert_eq!(config.token_header, "Authorization");
    assert!(config.token.is_none());
    Ok(())
}

#[test]
fn test_missing_file_is_an_io_error() {
    let err = ClientConfig::from_file("/definitely/not/here.toml").unwrap_err();
    assert!(matches!(err, ClientError::Io(_)));
}
