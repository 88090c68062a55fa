use crate::lib::error::FlowpackResult;
use clap::Parser;
use flowpack_core::loader::WorkflowLoader;
use std::path::PathBuf;

/// Loads a workflow package and prints its structure.
#[derive(Parser)]
pub struct ShowOpts {
    /// Path of the workflow package (a .tar.gz archive).
    package: PathBuf,
}

pub fn exec(loader: &mut WorkflowLoader, opts: ShowOpts) -> FlowpackResult {
    loader.load(&opts.package)?;
    print!("{}", loader.print_workflow_structure());
    Ok(())
}
