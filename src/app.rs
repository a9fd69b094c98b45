use std::io;

use crate::cli::Cli;
use crate::config::{self, Config};
use crate::error::AppError;
use crate::input;
use crate::request;
use crate::timezone;

/// One full run: load settings, collect the entry, build the request, then
/// dispatch (or preview) and print the result. Strictly linear; the first
/// error propagates to `main`.
pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    config::load_env_file(cli.env_file.as_deref())?;
    let cfg = Config::from_env()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let task = input::collect_task(
        &mut stdin.lock(),
        &mut stdout,
        cli.preset(),
        &cfg.default_project,
    )?;

    let spent_date = timezone::today_in(cfg.timezone);
    let submission = request::build(&cfg, &task, spent_date)?;

    if cli.dry_run {
        println!("{}", serde_json::to_string_pretty(&submission.preview())?);
    } else {
        println!("{}", submission.send()?);
    }
    Ok(())
}
