use crate::{
    api::GitLab,
    libs::{
        config::{Config, ConfigError, WORKER_USERNAME},
        messages::Message,
        notes_log::NotesLog,
        report::{Goal, Reporter},
        view::View,
        window::MonthWindow,
    },
    msg_debug, msg_print,
};
use anyhow::{Context, Result};
use clap::Args;
use std::io;

#[derive(Debug, Args, PartialEq)]
pub struct ReportArgs {
    #[arg(help = "Year of the reported month", value_parser = clap::value_parser!(i32).range(1..=9999))]
    pub year: i32,
    #[arg(help = "Reported month (1-12)", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: u32,
    #[arg(help = "Business days in the month, 8 hours each", value_parser = clap::value_parser!(u32).range(1..))]
    pub business_days: u32,
}

pub async fn cmd(args: ReportArgs) -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    let worker = config
        .primary_worker()
        .ok_or(ConfigError::Empty(WORKER_USERNAME))?;
    msg_print!(Message::WorkerUsernames(config.worker_usernames.join(",")));
    msg_print!(Message::ProjectIds(config.project_ids.clone()));

    let window = MonthWindow::new(args.year, args.month)?;
    let goal = Goal::new(args.business_days);

    let mut gitlab = GitLab::new(&config.gitlab)?;
    if let Some(notes_log) = &config.notes_log {
        msg_debug!(Message::NotesLogEnabled(notes_log.path.display().to_string()));
        gitlab = gitlab.with_notes_log(NotesLog::new(notes_log));
    }

    let report = Reporter::new(&gitlab, &config).run(worker, window).await?;

    let mut out = io::stdout().lock();
    View::report(&mut out, &report, &goal)?;

    Ok(())
}
