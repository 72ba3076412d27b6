use std::{path::Path, sync::Arc};

use anyhow::Result;
use rmcp::{
    ErrorData as McpError, ServerHandler, ServiceExt,
    handler::server::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::{
    config::API_KEY_ENV,
    ops::{self, OpError},
    store::TranslationStore,
    translate::Translator,
    workspace::Workspace,
};

use super::types::{
    AddTranslationParams, ConfigDto, GenerateKeyParams, GetConfigParams, LookupKeyParams,
    RemoveTranslationParams, ToolOutcome,
};

/// MCP server exposing key generation and translation file editing.
///
/// Tool calls that touch translation files are serialized through one store,
/// so concurrent calls never interleave writes to the same file.
#[derive(Clone)]
pub struct TranskeyMcpServer {
    tool_router: ToolRouter<Self>,
    store: Arc<Mutex<TranslationStore>>,
}

impl Default for TranskeyMcpServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl TranskeyMcpServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
            store: Arc::new(Mutex::new(TranslationStore::new())),
        }
    }

    /// Generate a translation key without touching any file
    #[tool(
        description = "Generate a translation key and the replacement call (e.g. t('components.pages.saveChanges')) for a piece of selected UI text. Does not modify any file."
    )]
    pub async fn generate_key(
        &self,
        params: Parameters<GenerateKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let workspace = load_workspace(&params.project_root_path)?;

        let generated = ops::generate_key(
            &workspace,
            &params.text,
            params.file_path.as_deref().map(Path::new),
        )
        .map_err(op_error)?;

        json_result(&generated)
    }

    /// Generate a key and write it into every translation file
    #[tool(
        description = "Generate a translation key for selected UI text and add it to every configured translation file, machine-translating into other languages when auto-translate is enabled. Returns the replacement call to put in place of the text and the outcome per file."
    )]
    pub async fn add_translation(
        &self,
        params: Parameters<AddTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut workspace = load_workspace(&params.project_root_path)?;
        if let Some(enabled) = params.auto_translate {
            workspace.config_mut().auto_translate_enabled = enabled;
        }

        let translator = ops::translator_for(&workspace).map_err(|e| {
            McpError::internal_error(format!("Failed to set up translation: {}", e), None)
        })?;

        let mut store = self.store.lock().await;
        let summary = ops::add_translation(
            &workspace,
            &mut store,
            translator.as_ref().map(|t| t as &dyn Translator),
            &params.text,
            params.file_path.as_deref().map(Path::new),
        )
        .await
        .map_err(op_error)?;
        info!(key = %summary.key, updated = summary.updated_count, "add_translation");

        json_result(&ToolOutcome {
            success: summary.is_success(),
            summary,
        })
    }

    /// Remove the key behind a translation call and recover its text
    #[tool(
        description = "Remove the key referenced by a translation call like t('key') from every translation file. Returns the original text to put back in place of the call and the outcome per file."
    )]
    pub async fn remove_translation(
        &self,
        params: Parameters<RemoveTranslationParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let mut workspace = load_workspace(&params.project_root_path)?;
        if let Some(fallback) = params.fallback {
            workspace.config_mut().remove_fallback = fallback;
        }

        let mut store = self.store.lock().await;
        let summary =
            ops::remove_translation(&workspace, &mut store, &params.selection).map_err(op_error)?;
        info!(key = %summary.key, updated = summary.updated_count, "remove_translation");

        json_result(&ToolOutcome {
            success: summary.is_success(),
            summary,
        })
    }

    /// Show the values stored for a key
    #[tool(
        description = "Look up the values stored for a key in every translation file. Accepts a dotted key or a call like t('key')."
    )]
    pub async fn lookup_key(
        &self,
        params: Parameters<LookupKeyParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;
        let workspace = load_workspace(&params.project_root_path)?;

        let mut store = self.store.lock().await;
        let summary = ops::lookup_key(&workspace, &mut store, &params.key).map_err(op_error)?;

        json_result(&summary)
    }

    /// Get the current transkey configuration
    #[tool(description = "Get the current transkey configuration.")]
    pub async fn get_config(
        &self,
        params: Parameters<GetConfigParams>,
    ) -> Result<CallToolResult, McpError> {
        let workspace = Workspace::load(Path::new(&params.0.project_root_path))
            .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

        let config_dto = ConfigDto::new(
            workspace.config().clone(),
            workspace
                .config_path()
                .map(|p| p.to_string_lossy().to_string()),
        );

        json_result(&config_dto)
    }
}

#[tool_handler]
impl ServerHandler for TranskeyMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "Transkey MCP replaces hardcoded UI text with translation calls and keeps JSON translation files in sync.\n\n\
                 Available tools:\n\
                 1. get_config - Get project configuration\n\
                 2. generate_key - Preview the key and replacement call for a piece of text\n\
                 3. add_translation - Add the key to every translation file and get the replacement call\n\
                 4. remove_translation - Remove the key behind a t('key') call and get the original text back\n\
                 5. lookup_key - Show the value of a key in every translation file\n\n\
                 Recommended Workflow:\n\
                 1. Use get_config to check translationFilePaths and sourceLanguageFile\n\
                 2. Call add_translation with the selected text and the file it came from\n\
                 3. Replace the text in the source file with the returned replacement\n\n\
                 IMPORTANT: Pass the file the text was selected in. Its directories form the key namespace."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

/// Entry point for MCP server
pub fn run_server() -> Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(async {
            let service = TranskeyMcpServer::new();
            let server = service.serve(rmcp::transport::stdio()).await?;
            server.waiting().await?;
            Ok(())
        })
}

// ============================================================
// Helpers
// ============================================================

fn load_workspace(project_root_path: &str) -> Result<Workspace, McpError> {
    let mut workspace = Workspace::load(Path::new(project_root_path))
        .map_err(|e| McpError::internal_error(format!("Failed to load config: {}", e), None))?;

    if let Ok(api_key) = std::env::var(API_KEY_ENV)
        && !api_key.trim().is_empty()
    {
        workspace.config_mut().open_ai_api_key = api_key;
    }

    Ok(workspace)
}

fn op_error(err: OpError) -> McpError {
    McpError::invalid_params(err.to_string(), None)
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json_str = serde_json::to_string_pretty(value).map_err(|e| {
        McpError::internal_error(format!("JSON serialization failed: {}", e), None)
    })?;

    Ok(CallToolResult::success(vec![Content::text(json_str)]))
}
