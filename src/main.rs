use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::error;

use top_sellers::config::load_config;
use top_sellers::load_top_sellers;
use top_sellers::presenter::{
    render_reduced_notice, report_error, table_heading, ColoredStyle, ConsoleStyle, Presenter,
    PromptOutcome, SystemBrowser, TableLayout,
};
use top_sellers::utilities::logger::init_logger;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logger();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", format!("{:#}", e).red());
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<ExitCode> {
    let config = load_config()?;
    let style = ColoredStyle;

    print!("{}", style.clear_screen());
    io::stdout().flush().context("Failed to write to stdout")?;

    let list = match load_top_sellers(&config).await {
        Ok(list) => list,
        Err(e) => {
            error!(error = %e, "failed to load top sellers");
            report_error(&mut io::stdout(), &style, e.label(), Some(e.to_string().as_str()))
                .context("Failed to write to stdout")?;
            return Ok(ExitCode::FAILURE);
        }
    };

    render_reduced_notice(&mut io::stdout(), &style, &list).context("Failed to write to stdout")?;

    let presenter = Presenter {
        heading: table_heading(&list, &config.store.region_label),
        layout: TableLayout::from(&config.display),
        style: &style,
        browser: &SystemBrowser,
    };

    let outcome = presenter
        .run(&list, &mut io::stdin().lock(), &mut io::stdout().lock())
        .context("Console I/O failed")?;

    Ok(match outcome {
        PromptOutcome::Opened(_) | PromptOutcome::InputClosed => ExitCode::SUCCESS,
        PromptOutcome::LaunchFailed(_) => ExitCode::FAILURE,
    })
}
