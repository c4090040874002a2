use lambda_http::{run, tracing, Error};
use stock_api::{create_router, AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing::init_default_subscriber();
    dotenvy::dotenv().ok();

    // opened once per cold start and reused by every invocation
    let config = AppConfig::load()?;
    let store = stock_core::store::open(&config.data).await?;

    run(create_router(AppState::new(store))).await
}
