use anyhow::Result;
use serde_json::json;

use crate::{CliTest, fake_api, run};

const DASHBOARD: &str = "src/components/pages/dashboard/Dashboard.tsx";

fn project(extra: serde_json::Value) -> Result<CliTest> {
    let mut config = json!({
        "translationFilePaths": ["locales/en.json", "locales/tr.json"],
        "sourceLanguageFile": "locales/en.json",
        "ignoredDirectories": ["src"]
    });
    if let (Some(config), Some(extra)) = (config.as_object_mut(), extra.as_object()) {
        config.extend(extra.clone());
    }
    CliTest::with_config(config)
}

#[test]
fn test_add_creates_nested_key_in_every_file() -> Result<()> {
    let test = project(json!({}))?;

    let out = run(test.add_command().args(["Save Changes", "--file", DASHBOARD]))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stdout.contains("replacement: t('components.pages.dashboard.saveChanges')"));
    assert!(out.stdout.contains("Updated 2 of 2 files"));

    let expected = json!({"components": {"pages": {"dashboard": {"saveChanges": "Save Changes"}}}});
    assert_eq!(test.read_json("locales/en.json")?, expected);
    assert_eq!(test.read_json("locales/tr.json")?, expected);
    insta::assert_snapshot!(test.read_file("locales/en.json")?, @r#"
    {
      "components": {
        "pages": {
          "dashboard": {
            "saveChanges": "Save Changes"
          }
        }
      }
    }
    "#);
    Ok(())
}

#[test]
fn test_add_keeps_existing_keys_in_order() -> Result<()> {
    let test = project(json!({}))?;
    test.write_file("locales/en.json", r#"{"zeta": "Z", "components": {"pages": {"alpha": "A"}}}"#)?;

    let out = run(test.add_command().arg("Save"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    let content = test.read_file("locales/en.json")?;
    let zeta = content.find("zeta").unwrap();
    let alpha = content.find("alpha").unwrap();
    let save = content.find("\"save\"").unwrap();
    assert!(zeta < alpha && alpha < save, "{}", content);
    Ok(())
}

#[test]
fn test_add_resets_invalid_json() -> Result<()> {
    let test = project(json!({}))?;
    test.write_file("locales/tr.json", "{not json")?;

    let out = run(test.add_command().arg("Save Changes"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stderr.contains("warning:"), "{}", out.stderr);
    assert_eq!(
        test.read_json("locales/tr.json")?,
        json!({"components": {"pages": {"saveChanges": "Save Changes"}}})
    );
    Ok(())
}

#[test]
fn test_add_translates_target_languages() -> Result<()> {
    let api_base = fake_api(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"\"Değişiklikleri Kaydet\""}}]}"#,
    )?;
    let test = project(json!({
        "autoTranslateEnabled": true,
        "openAiApiKey": "sk-test",
        "openAi": {"apiBase": api_base}
    }))?;

    let out = run(test.add_command().arg("Save Changes"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert_eq!(
        test.read_json("locales/en.json")?,
        json!({"components": {"pages": {"saveChanges": "Save Changes"}}})
    );
    assert_eq!(
        test.read_json("locales/tr.json")?,
        json!({"components": {"pages": {"saveChanges": "Değişiklikleri Kaydet"}}})
    );
    Ok(())
}

#[test]
fn test_add_with_rejected_api_key_leaves_targets_unchanged() -> Result<()> {
    let api_base = fake_api(
        "401 Unauthorized",
        r#"{"error":{"message":"Incorrect API key provided"}}"#,
    )?;
    let test = project(json!({
        "autoTranslateEnabled": true,
        "openAiApiKey": "sk-invalid",
        "openAi": {"apiBase": api_base}
    }))?;
    let original = "{\n  \"common\": {\n    \"ok\": \"Tamam\"\n  }\n}\n";
    test.write_file("locales/tr.json", original)?;

    let out = run(test.add_command().arg("Save Changes"))?;

    assert_eq!(out.code, Some(1), "{}", out.stderr);
    assert!(out.stdout.contains("Updated 1 of 2 files"), "{}", out.stdout);
    assert!(out.stderr.contains("warning:"), "{}", out.stderr);
    assert_eq!(test.read_file("locales/tr.json")?, original);
    assert_eq!(
        test.read_json("locales/en.json")?,
        json!({"components": {"pages": {"saveChanges": "Save Changes"}}})
    );
    Ok(())
}

#[test]
fn test_add_without_api_key_writes_source_text() -> Result<()> {
    let test = project(json!({"autoTranslateEnabled": true}))?;

    let out = run(test.add_command().arg("Save"))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stderr.contains("wrote the source text"), "{}", out.stderr);
    assert_eq!(
        test.read_json("locales/tr.json")?,
        json!({"components": {"pages": {"save": "Save"}}})
    );
    Ok(())
}

#[test]
fn test_add_no_auto_translate_flag() -> Result<()> {
    let test = project(json!({"autoTranslateEnabled": true}))?;

    let out = run(test.add_command().args(["Save", "--no-auto-translate"]))?;

    assert_eq!(out.code, Some(0), "{}", out.stderr);
    assert!(out.stderr.is_empty(), "{}", out.stderr);
    Ok(())
}

#[test]
fn test_add_json_output() -> Result<()> {
    let test = project(json!({}))?;

    let out = run(test.add_command().args(["Save", "--json"]))?;

    let parsed: serde_json::Value = serde_json::from_str(&out.stdout)?;
    assert_eq!(parsed["key"], "components.pages.save");
    assert_eq!(parsed["updatedCount"], 2);
    assert_eq!(parsed["files"][0]["file"], "locales/en.json");
    assert_eq!(parsed["files"][0]["status"], "written");
    assert_eq!(parsed["files"][0]["action"], "added");
    Ok(())
}

#[test]
fn test_add_without_translation_files() -> Result<()> {
    let test = CliTest::new()?;

    let out = run(test.add_command().arg("Save"))?;

    assert_eq!(out.code, Some(1));
    assert!(out.stderr.contains("no translation files configured"), "{}", out.stderr);
    Ok(())
}
