use crate::lib::error::FlowpackResult;
use clap::Subcommand;
use flowpack_core::loader::WorkflowLoader;

mod check;
mod show;

#[derive(Subcommand)]
pub enum FlowpackCommand {
    Check(check::CheckOpts),
    Show(show::ShowOpts),
}

pub fn exec(loader: &mut WorkflowLoader, cmd: FlowpackCommand) -> FlowpackResult {
    match cmd {
        FlowpackCommand::Check(opts) => check::exec(loader, opts),
        FlowpackCommand::Show(opts) => show::exec(loader, opts),
    }
}
