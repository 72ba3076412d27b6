use anyhow::Result;
use serde_json::json;

use crate::{CliTest, run};

fn project() -> Result<CliTest> {
    let test = CliTest::with_config(json!({
        "translationFilePaths": ["locales/tr.json", "locales/en.json"],
        "sourceLanguageFile": "locales/en.json"
    }))?;
    test.write_file(
        "locales/en.json",
        r#"{"components": {"pages": {"dashboard": {"saveChanges": "Save Changes"}}, "title": "Home"}}"#,
    )?;
    test.write_file(
        "locales/tr.json",
        r#"{"components": {"pages": {"dashboard": {"saveChanges": "Değişiklikleri Kaydet"}}}}"#,
    )?;
    Ok(test)
}

#[test]
fn test_remove_restores_source_text() -> Result<()> {
    let test = project()?;

    let out = run(test
        .remove_command()
        .arg("t('components.pages.dashboard.saveChanges')"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stdout.contains("restored: Save Changes"), "{}", out.stdout);
    assert!(out.stdout.contains("Updated 2 of 2 files"), "{}", out.stdout);
    assert_eq!(
        test.read_json("locales/en.json")?,
        json!({"components": {"title": "Home"}})
    );
    assert_eq!(test.read_json("locales/tr.json")?, json!({}));
    Ok(())
}

#[test]
fn test_remove_matches_case_insensitively_by_default() -> Result<()> {
    let test = project()?;
    test.write_file("locales/tr.json", r#"{"common": {"SaveAll": "Tümünü Kaydet"}}"#)?;
    test.write_file("locales/en.json", r#"{"common": {"SaveAll": "Save All"}}"#)?;

    let out = run(test.remove_command().arg("t('common.saveAll')"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stdout.contains("restored: Save All"), "{}", out.stdout);
    assert!(out.stdout.contains("removed \"SaveAll\""), "{}", out.stdout);
    assert_eq!(test.read_json("locales/en.json")?, json!({}));
    Ok(())
}

#[test]
fn test_remove_fallback_off() -> Result<()> {
    let test = project()?;
    let original = r#"{"common": {"SaveAll": "Save All"}}"#;
    test.write_file("locales/en.json", original)?;
    test.write_file("locales/tr.json", original)?;

    let out = run(test
        .remove_command()
        .args(["t('common.saveAll')", "--fallback", "off"]))?;

    assert_eq!(out.code, Some(1));
    assert_eq!(test.read_file("locales/en.json")?, original);
    Ok(())
}

#[test]
fn test_remove_unknown_key_restores_last_segment() -> Result<()> {
    let test = project()?;

    let out = run(test.remove_command().arg("t('common.signOut')"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stdout.contains("restored: signOut"), "{}", out.stdout);
    assert!(out.stderr.contains("warning:"), "{}", out.stderr);
    Ok(())
}

#[test]
fn test_remove_requires_a_call() -> Result<()> {
    let test = project()?;

    let out = run(test.remove_command().arg("components.pages.dashboard.saveChanges"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("not a translation call"), "{}", out.stderr);
    assert_eq!(
        test.read_json("locales/en.json")?["components"]["pages"]["dashboard"]["saveChanges"],
        "Save Changes"
    );
    Ok(())
}

#[test]
fn test_remove_json_output() -> Result<()> {
    let test = project()?;

    let out = run(test
        .remove_command()
        .args(["t('components.pages.dashboard.saveChanges')", "--json"]))?;

    let parsed: serde_json::Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(parsed["restoredText"], "Save Changes");
    assert_eq!(parsed["found"], true);
    assert_eq!(parsed["files"][0]["file"], "locales/tr.json");
    assert_eq!(parsed["files"][0]["status"], "removed");
    assert_eq!(parsed["files"][0]["value"], "Değişiklikleri Kaydet");
    Ok(())
}
