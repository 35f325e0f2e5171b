use std::process::ExitCode;

use taskboard::config::Config;
use taskboard::store::BoardStore;
use taskboard::store::http::HttpBoardStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    if let Err(e) = dotenv {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = Config::from_env();
    let store = match HttpBoardStore::from_config(&config) {
        Ok(store) => store,
        Err(e) => {
            tracing::error!(error = %e, "board store unavailable");
            return ExitCode::FAILURE;
        }
    };

    let boards = match store.fetch_boards().await {
        Ok(boards) => boards,
        Err(e) => {
            tracing::error!(error = %e, url = store.base_url(), "failed to fetch boards");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(count = boards.len(), url = store.base_url(), "boards loaded");
    for board in &boards {
        tracing::info!(
            board_id = %board.id,
            title = %board.title,
            columns = board.columns.len(),
            tasks = board.task_count(),
            "board"
        );
    }

    ExitCode::SUCCESS
}
