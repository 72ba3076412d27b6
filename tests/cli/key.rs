use anyhow::Result;
use serde_json::{Value, json};

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    CliTest::with_config(json!({
        "translationFilePaths": ["locales/en.json"],
        "ignoredDirectories": ["src"]
    }))
}

#[test]
fn test_key_uses_file_directories() -> Result<()> {
    let test = project()?;

    let out = run(test
        .key_command()
        .args(["Save Changes", "--file", "src/components/pages/dashboard/Dashboard.tsx"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "t('components.pages.dashboard.saveChanges')\n");
    Ok(())
}

#[test]
fn test_key_without_file_uses_default_namespace() -> Result<()> {
    let test = project()?;

    let out = run(test.key_command().arg("  Save Changes  "))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "t('components.pages.saveChanges')\n");
    Ok(())
}

#[test]
fn test_key_function_override() -> Result<()> {
    let test = project()?;

    let out = run(test.key_command().args(["Sign in", "--function", "i18n.t"]))?;

    assert_eq!(out.stdout, "i18n.t('components.pages.signIn')\n");
    Ok(())
}

#[test]
fn test_key_without_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.key_command().args(["Log out", "--file", "views/Header.vue"]))?;

    assert_eq!(out.code, Some(0));
    assert_eq!(out.stdout, "t('views.header.logOut')\n");
    Ok(())
}

#[test]
fn test_key_json_output() -> Result<()> {
    let test = project()?;

    let out = run(test.key_command().args(["Çıkış yap", "--json"]))?;

    let parsed: Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(
        parsed,
        json!({
            "key": "components.pages.cikisYap",
            "replacement": "t('components.pages.cikisYap')",
            "text": "Çıkış yap"
        })
    );
    Ok(())
}

#[test]
fn test_key_rejects_existing_call() -> Result<()> {
    let test = project()?;

    let out = run(test.key_command().arg("{t('common.save')}"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.contains("already a translation call"), "{}", out.stderr);
    Ok(())
}

#[test]
fn test_key_from_punctuation_only() -> Result<()> {
    let test = project()?;

    let out = run(test.key_command().arg("!!!"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("no key could be generated"), "{}", out.stderr);
    Ok(())
}

#[test]
fn test_invalid_config_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".transkeyrc.json", "{ invalid")?;

    let out = run(test.key_command().arg("Save"))?;

    assert_eq!(out.code, Some(2));
    assert!(out.stderr.contains("Failed to parse config file"), "{}", out.stderr);
    Ok(())
}
