use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;
use tempfile::TempDir;


/// Test fixture for MCP integration tests
///
/// Manages a temporary project with a `.transkeyrc.json` and JSON
/// translation files under `locales/`.
pub struct McpTestFixture {
    _temp_dir: TempDir,
    project_root: PathBuf,
}

impl McpTestFixture {
    /// Create an empty test project
    pub fn new() -> Result<Self> {
        let temp_dir = TempDir::new()?;
        let project_root = temp_dir.path().canonicalize()?;

        // Keeps the config file search inside the project
        fs::create_dir_all(project_root.join(".git"))?;

        Ok(Self {
            _temp_dir: temp_dir,
            project_root,
        })
    }

    /// Create a test project with `locales/en.json` as source file and
    /// `locales/tr.json` as target.
    ///
    /// # Example
    /// ```ignore
    /// let fixture = McpTestFixture::with_locales(
    ///     json!({"common": {"save": "Save"}}),
    ///     json!({"common": {"save": "Kaydet"}}),
    /// )?;
    /// ```
    pub fn with_locales(en: Value, tr: Value) -> Result<Self> {
        let fixture = Self::new()?;
        fixture.write_config(&serde_json::json!({
            "translationFilePaths": ["locales/en.json", "locales/tr.json"],
            "sourceLanguageFile": "locales/en.json"
        }))?;
        fixture.write_json("locales/en.json", &en)?;
        fixture.write_json("locales/tr.json", &tr)?;
        Ok(fixture)
    }

    /// Write a JSON file relative to the project root
    pub fn write_json(&self, relative_path: &str, content: &Value) -> Result<()> {
        let path = self.project_root.join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json_str = serde_json::to_string_pretty(content)
            .with_context(|| format!("Failed to serialize JSON for: {}", relative_path))?;
        fs::write(&path, format!("{}\n", json_str))
            .with_context(|| format!("Failed to write file: {}", path.display()))?;
        Ok(())
    }

    /// Read a JSON file relative to the project root
    pub fn read_json(&self, relative_path: &str) -> Result<Value> {
        let path = self.project_root.join(relative_path);
        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON from: {}", path.display()))
    }

    /// Write a .transkeyrc.json config file
    pub fn write_config(&self, content: &Value) -> Result<()> {
        self.write_json(".transkeyrc.json", content)
    }

    /// Get the project root path as a string (for MCP parameters)
    pub fn root(&self) -> String {
        self.project_root.to_string_lossy().to_string()
    }

    /// Get the project root path as a Path reference
    pub fn root_path(&self) -> &Path {
        &self.project_root
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Extract JSON value from a successful CallToolResult
///
/// Panics if the result indicates an error or cannot be parsed
pub fn extract_tool_result_json(result: &rmcp::model::CallToolResult) -> Value {
    if let Some(true) = result.is_error {
        panic!("Tool call returned an error: {:?}", result);
    }

    assert!(
        !result.content.is_empty(),
        "Tool result should have content"
    );

    let content_item = &result.content[0];
    let text_content = content_item
        .as_text()
        .expect("Tool result content should be text");

    serde_json::from_str(&text_content.text).expect("Tool result should be valid JSON")
}
