use anyhow::Result;
use button_group::cli::Cli;
use button_group::ui::terminal_guard::install_panic_hook;
use button_group::{util, App};
use clap::Parser;
use std::fs::{self, OpenOptions};

fn main() -> Result<()> {
    let cli = Cli::parse();
    util::init_data_dir(cli.data_dir.clone());

    // Initialize logging to file (~/.button-group/logs/button-group.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let config = cli.resolve_config()?;
    let mut app = App::new(config);

    if cli.print {
        println!("{}", app.render_snapshot(cli.width));
        return Ok(());
    }

    install_panic_hook();
    app.run()
}
