//! taskdeck - command-line task tracker with snapshot-based undo

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::generate;
use taskdeck::cli::{self, Cli, Commands};
use taskdeck::shell;

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::var("TASKDECK_DEBUG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter("taskdeck=debug")
            .init();
    }

    let cli = Cli::parse();

    // Completion works without touching config or the task file.
    if let Some(Commands::Completion { shell }) = &cli.command {
        generate(*shell, &mut Cli::command(), "td", &mut std::io::stdout());
        return Ok(());
    }

    match cli.command {
        Some(Commands::Add(args)) => cli::add::run(cli.file, args).await,
        Some(Commands::Done(args)) => cli::done::run(cli.file, args).await,
        Some(Commands::Rm(args)) => cli::remove::run(cli.file, args).await,
        Some(Commands::List(args)) => cli::list::run(cli.file, args).await,
        Some(Commands::Find(args)) => cli::find::run(cli.file, args).await,
        Some(Commands::Completion { .. }) => unreachable!(),
        None => shell::run(cli.file).await,
    }
}
