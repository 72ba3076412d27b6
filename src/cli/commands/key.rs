use anyhow::Result;

use super::helper::{active_file, finish, load_workspace, op_failed};
use crate::{
    cli::{args::KeyCommand, exit_status::ExitStatus, report::print_generated},
    ops::generate_key,
};

pub fn key(cmd: KeyCommand) -> Result<ExitStatus> {
    let workspace = load_workspace(&cmd.common)?;
    let file = active_file(cmd.file.as_deref())?;

    match generate_key(&workspace, &cmd.text, file.as_deref()) {
        Ok(generated) => finish(&generated, cmd.common.json, true, print_generated),
        Err(err) => Ok(op_failed(&err)),
    }
}
