use anyhow::Result;

use super::helper::{finish, load_workspace, op_failed};
use crate::{
    cli::{args::LookupCommand, exit_status::ExitStatus, report::print_lookup_summary},
    ops::lookup_key,
    store::TranslationStore,
};

pub fn lookup(cmd: LookupCommand) -> Result<ExitStatus> {
    let workspace = load_workspace(&cmd.common)?;

    let mut store = TranslationStore::new();
    match lookup_key(&workspace, &mut store, &cmd.key) {
        Ok(summary) => {
            let found = !summary.translations.is_empty();
            finish(&summary, cmd.common.json, found, print_lookup_summary)
        }
        Err(err) => Ok(op_failed(&err)),
    }
}
