use tokio::net::TcpListener;
use todo_server::{logging, AppConfig, ServerError};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let config = AppConfig::load()?;
    logging::init_logging(&config)?;
    let listener = TcpListener::bind(config.addr()).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");
    todo_server::run(listener, &config).await
}
