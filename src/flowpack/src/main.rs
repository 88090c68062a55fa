#![allow(special_module_name)]
use crate::lib::error::FlowpackResult;
use crate::lib::logger::create_root_logger;
use clap::{ArgAction, Parser};
use flowpack_core::loader::WorkflowLoader;
use std::path::PathBuf;

mod commands;
mod lib;

/// Loads and inspects packaged workflow descriptions.
#[derive(Parser)]
#[command(name = "flowpack", version, arg_required_else_help = true)]
pub struct CliOpts {
    /// Displays detailed information about operations. -vv will generate a very large number of messages.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppresses informational messages. -qq limits to errors only; -qqqq disables them all.
    #[arg(long, short, action = ArgAction::Count, global = true)]
    quiet: u8,

    /// Creates per-load workspaces under this directory instead of the system temp dir.
    #[arg(long, global = true, value_name = "DIR")]
    workspace_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: commands::FlowpackCommand,
}

fn setup_logging(opts: &CliOpts) -> slog::Logger {
    let verbose_level = opts.verbose as i64 - opts.quiet as i64;
    create_root_logger(verbose_level)
}

fn inner_main() -> FlowpackResult {
    let cli_opts = CliOpts::parse();
    let logger = setup_logging(&cli_opts);

    let mut builder = WorkflowLoader::builder().with_logger(logger);
    if let Some(dir) = cli_opts.workspace_dir.clone() {
        builder = builder.with_workspace_in(dir);
    }
    let mut loader = builder.build();

    commands::exec(&mut loader, cli_opts.command)
}

fn main() {
    if let Err(err) = inner_main() {
        for (level, cause) in err.chain().enumerate() {
            if level == 0 {
                eprintln!("Error: {cause}");
            } else {
                eprintln!("Caused by: {cause}");
            }
        }
        std::process::exit(255);
    }
}

#[cfg(test)]
mod tests {
    use crate::CliOpts;
    use clap::CommandFactory;

    #[test]
    fn validate_cli() {
        CliOpts::command().debug_assert();
    }
}
