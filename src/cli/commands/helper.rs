use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;

use super::super::{
    args::CommonArgs,
    exit_status::ExitStatus,
    report::{FAILURE_MARK, print_json},
};
use crate::{ops::OpError, workspace::Workspace};

/// Load the workspace for the command's `--path`, applying command line
/// overrides on top of the config file.
pub fn load_workspace(common: &CommonArgs) -> Result<Workspace> {
    let start_dir = common
        .path
        .canonicalize()
        .with_context(|| format!("Failed to resolve path: {}", common.path.display()))?;
    let mut workspace = Workspace::load(&start_dir)?;

    if let Some(function) = &common.function {
        workspace.config_mut().translation_function = function.clone();
        workspace.config().validate()?;
    }

    Ok(workspace)
}

/// Make `--file` absolute against the current directory so it can be placed
/// under the workspace root.
pub fn active_file(file: Option<&Path>) -> Result<Option<PathBuf>> {
    file.map(|file| {
        file.canonicalize()
            .or_else(|_| std::path::absolute(file))
            .with_context(|| format!("Failed to resolve file: {}", file.display()))
    })
    .transpose()
}

/// Print a result as JSON or through `print`, returning the exit status for
/// `success`.
pub fn finish<T: Serialize>(
    value: &T,
    json: bool,
    success: bool,
    print: impl FnOnce(&T),
) -> Result<ExitStatus> {
    if json {
        print_json(value)?;
    } else {
        print(value);
    }
    Ok(ExitStatus::from_success(success))
}

/// Report an operation that could not run on the selection.
pub fn op_failed(err: &OpError) -> ExitStatus {
    eprintln!("{} {}", FAILURE_MARK.red(), err.to_string().red());
    ExitStatus::Failure
}
