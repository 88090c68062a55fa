use crate::lib::error::FlowpackResult;
use clap::Parser;
use flowpack_core::loader::WorkflowLoader;
use std::path::PathBuf;

/// Loads a workflow package and reports what it contains.
#[derive(Parser)]
pub struct CheckOpts {
    /// Path of the workflow package (a .tar.gz archive).
    package: PathBuf,
}

pub fn exec(loader: &mut WorkflowLoader, opts: CheckOpts) -> FlowpackResult {
    loader.load(&opts.package)?;
    let description = loader.take_workflow_description();
    let property_count = description.properties.len()
        + description
            .units
            .iter()
            .map(|unit| unit.properties.len())
            .sum::<usize>();
    println!(
        "{}: ok ({} units, {} properties)",
        opts.package.display(),
        description.units.len(),
        property_count
    );
    Ok(())
}
