use clap::Parser;
use log::error;
use std::path::PathBuf;
use trivia_quiz::app::{self, AppState};

/// Serve a spreadsheet of trivia questions as a click-through quiz.
#[derive(Parser)]
#[command(about = "Serve a spreadsheet of trivia questions as a click-through quiz.")]
struct Args {
    /// Workbook to quiz on (.xlsx, .xlsm, .xlsb, .xls, .ods or .csv).
    workbook: PathBuf,

    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: String,
}

/// Main entry point for the quiz server
///
/// Loads every sheet of the workbook before binding, so a bad workbook
/// stops the process without ever serving a request.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let state = match AppState::load(&args.workbook) {
        Ok(state) => state,
        Err(e) => {
            error!("Error reading {}: {}", args.workbook.display(), e);
            return Err(e.into());
        }
    };

    app::run(state, &args.bind).await
}
