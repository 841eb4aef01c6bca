pub mod handlers;
pub use handlers::AppState;

use axum::{Router, routing::get};
use tokio::net::TcpListener;

use handlers::{convert_handler, rates_handler};

// GET-only routes; axum answers other methods with 405.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/convert", get(convert_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening at http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
