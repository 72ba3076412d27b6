use anyhow::Result;

use super::helper::{finish, load_workspace, op_failed};
use crate::{
    cli::{args::RemoveCommand, exit_status::ExitStatus, report::print_remove_summary},
    ops::remove_translation,
    store::TranslationStore,
};

pub fn remove(cmd: RemoveCommand) -> Result<ExitStatus> {
    let mut workspace = load_workspace(&cmd.common)?;
    if let Some(fallback) = cmd.fallback {
        workspace.config_mut().remove_fallback = fallback;
    }

    let mut store = TranslationStore::new();
    match remove_translation(&workspace, &mut store, &cmd.selection) {
        Ok(summary) => finish(
            &summary,
            cmd.common.json,
            summary.is_success(),
            print_remove_summary,
        ),
        Err(err) => Ok(op_failed(&err)),
    }
}
