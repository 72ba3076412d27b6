use anyhow::{Context, Result};
use tracing::debug;

use super::helper::{active_file, finish, load_workspace, op_failed};
use crate::{
    cli::{args::AddCommand, exit_status::ExitStatus, report::print_add_summary},
    ops::{add_translation, translator_for},
    store::TranslationStore,
    translate::Translator,
};

pub fn add(cmd: AddCommand) -> Result<ExitStatus> {
    let mut workspace = load_workspace(&cmd.common)?;
    let config = workspace.config_mut();
    if cmd.auto_translate {
        config.auto_translate_enabled = true;
    } else if cmd.no_auto_translate {
        config.auto_translate_enabled = false;
    }
    if let Some(api_key) = cmd.openai_api_key.filter(|k| !k.trim().is_empty()) {
        config.open_ai_api_key = api_key;
    }

    let file = active_file(cmd.file.as_deref())?;
    let translator = translator_for(&workspace).context("Failed to set up translation")?;
    debug!(
        auto_translate = translator.is_some(),
        root = %workspace.root().display(),
        "adding translation"
    );

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    let mut store = TranslationStore::new();
    let result = runtime.block_on(add_translation(
        &workspace,
        &mut store,
        translator.as_ref().map(|t| t as &dyn Translator),
        &cmd.text,
        file.as_deref(),
    ));

    match result {
        Ok(summary) => finish(
            &summary,
            cmd.common.json,
            summary.is_success(),
            print_add_summary,
        ),
        Err(err) => Ok(op_failed(&err)),
    }
}
