use anyhow::{Context, Result};

use dprof_cli::runner::run;
use dprof_cli::types::RunReport;
use dprof_model::ProfileOptions;

use crate::cli::Cli;

pub fn run_profile(cli: &Cli) -> Result<RunReport> {
    let options = ProfileOptions::default();
    run(&cli.path, cli.predictor.as_deref(), &options)
        .with_context(|| format!("profile {}", cli.path.display()))
}
