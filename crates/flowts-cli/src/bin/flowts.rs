#![allow(clippy::print_stderr)]

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;

use flowts_cli::args::{CliArgs, DiagnosticsFormat};
use flowts_cli::reporter::Reporter;
use flowts_cli::{config, driver};

fn main() -> Result<()> {
    // Initialize tracing if FLOWTS_LOG or RUST_LOG is set (zero cost otherwise).
    flowts_cli::tracing_config::init_tracing();

    let args = CliArgs::parse();
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;

    let config = config::find_config(args.config.as_deref(), &cwd)?;
    let options = config::resolve_options(&args, config.as_ref(), &cwd);

    let result = driver::run(&args.inputs, &options, &cwd)?;

    let reporter = Reporter::new(!args.no_color && std::io::stderr().is_terminal());
    match options.diagnostics_format {
        DiagnosticsFormat::Text => eprint!("{}", reporter.render(&result)),
        DiagnosticsFormat::Json => println!("{}", reporter.render_json(&result)?),
    }

    std::process::exit(result.exit_code(options.deny_warnings));
}
