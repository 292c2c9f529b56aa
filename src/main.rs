//! Entry point for the `site-i18n` command-line tool.

use std::process::ExitCode;

use clap::Parser;
use site_i18n::cli::{
    self,
    Arguments,
    ExitStatus,
};
use tracing_subscriber::EnvFilter;

#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    // stdout は結果出力専用
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Arguments::parse();
    match cli::run(args, &mut std::io::stdout().lock()) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitStatus::Error.into()
        }
    }
}
