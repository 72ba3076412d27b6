use anyhow::{Context, Result};
use serde_json::Value;

use crate::{CliTest, run};

/// Validates config file structure and default values.
fn assert_config_content(content: &str) -> Result<()> {
    let parsed: Value = serde_json::from_str(content).context("Config should be valid JSON")?;

    assert!(
        parsed["translationFilePaths"].is_array(),
        "Config should have 'translationFilePaths' field"
    );
    assert_eq!(parsed["translationFunction"], "t");
    assert_eq!(parsed["autoTranslateEnabled"], false);
    assert_eq!(parsed["removeFallback"], "ignoreCase");
    assert_eq!(parsed["openAi"]["model"], "gpt-4");

    assert!(
        content.contains("\n  \""),
        "Config should use 2-space indentation"
    );
    assert!(content.ends_with("}\n"));

    Ok(())
}

#[test]
fn test_init_creates_config() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.command().arg("init"))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "✓ Created .transkeyrc.json\n");
    assert!(test.root().join(".transkeyrc.json").exists());

    let content = test.read_file(".transkeyrc.json")?;
    assert_config_content(&content)?;

    Ok(())
}

#[test]
fn test_init_fails_if_exists() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transkeyrc.json", "{}")?;

    let out = run(test.command().arg("init"))?;

    assert_eq!(out.code, Some(1));
    assert_eq!(out.stderr, "Error: .transkeyrc.json already exists\n");
    assert_eq!(test.read_file(".transkeyrc.json")?, "{}");

    Ok(())
}

#[test]
fn test_init_config_is_loadable() -> Result<()> {
    let test = CliTest::new()?;
    run(test.command().arg("init"))?;

    let out = run(test.key_command().arg("Save"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert_eq!(out.stdout, "t('components.pages.save')\n");

    Ok(())
}

#[test]
fn test_no_command_prints_help() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(&mut test.command())?;

    assert_eq!(out.code, Some(0));
    assert!(out.stdout.contains("Usage:"), "{}", out.stdout);

    Ok(())
}
