//! Worksheet Builder HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use worksheet_builder::adapters::http::{api_router, with_middleware, ExerciseHandlers, WorksheetHandlers};
use worksheet_builder::adapters::{
    FileExerciseRepository, FontSet, InMemoryExerciseRepository, PrintPdfRenderer,
};
use worksheet_builder::application::{
    CreateExerciseHandler, DeleteExerciseHandler, GenerateExercisePdfHandler, GeneratePdfHandler,
    GenerateSamplePdfHandler, GetExerciseHandler, ListExercisesHandler, UpdateExerciseHandler,
};
use worksheet_builder::config::{AppConfig, StorageBackend};
use worksheet_builder::ports::ExerciseRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_tracing(&config);

    let fonts = match config.pdf.font_paths() {
        Some((regular, bold)) => {
            FontSet::from_files(regular, bold).context("Failed to load TrueType fonts")?
        }
        None => FontSet::builtin(),
    };
    tracing::info!(builtin = fonts.is_builtin(), "Fonts loaded");

    let repository: Arc<dyn ExerciseRepository> = match config.storage.backend {
        StorageBackend::Memory => Arc::new(InMemoryExerciseRepository::new()),
        StorageBackend::File => {
            Arc::new(FileExerciseRepository::new(&config.storage.data_dir))
        }
    };

    let generate = Arc::new(GeneratePdfHandler::new(
        Arc::new(PrintPdfRenderer::new(fonts)),
        config.pdf.layout_options(),
    ));
    let worksheet = WorksheetHandlers::new(
        generate.clone(),
        Arc::new(GenerateSamplePdfHandler::new(generate.clone())),
        Arc::new(GenerateExercisePdfHandler::new(repository.clone(), generate)),
    );
    let exercises = ExerciseHandlers::new(
        Arc::new(CreateExerciseHandler::new(repository.clone())),
        Arc::new(UpdateExerciseHandler::new(repository.clone())),
        Arc::new(GetExerciseHandler::new(repository.clone())),
        Arc::new(ListExercisesHandler::new(repository.clone())),
        Arc::new(DeleteExerciseHandler::new(repository)),
    );

    let app = with_middleware(api_router(worksheet, exercises), &config.server);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(%addr, storage = ?config.storage.backend, "Worksheet builder listening");

    axum::serve(listener, app).await?;
    Ok(())
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    if config.is_production() {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
