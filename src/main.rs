mod model;
mod server;

use crate::server::{
    config::Config, error::AppError, lifecycle::Lifecycle, router, startup, state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();
    startup::init_panic_hook();

    if let Err(err) = run().await {
        tracing::error!("Server stopped: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;
    let lifecycle = Lifecycle::new(config.port);

    let db = startup::connect_to_database(&config).await?;

    tracing::info!("Starting server");

    let app = router::router(AppState::new(db, config));

    lifecycle.watch_signals();
    lifecycle.serve(app).await
}
