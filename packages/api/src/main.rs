use lambda_http::{run, tracing, Error};
use std::env::set_var;

use api::config::Config;
use api::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Error> {
    set_var("AWS_LAMBDA_HTTP_IGNORE_STAGE_IN_PATH", "true");

    let config = Config::from_env()?;

    match config.bind_addr.clone() {
        Some(addr) => {
            tracing_subscriber::fmt()
                .with_max_level(tracing::Level::DEBUG)
                .with_target(false)
                .init();

            let app = api::create_app(AppState::from_config(&config).await);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on {}", addr);
            axum::serve(listener, app).await?;
            Ok(())
        }
        None => {
            // required to enable CloudWatch error logging by the runtime
            tracing::init_default_subscriber();

            let app = api::create_app(AppState::from_config(&config).await);
            run(app).await
        }
    }
}
