use devreg::config::Config;
use devreg::domain::device::service::Service;
use devreg::inbound::http::{HttpServer, HttpServerConfig};
use devreg::outbound::memory::InMemory;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let store = InMemory::new();
    let device_service = Service::new(store);

    let server_config = HttpServerConfig {
        host: &config.server_host,
        port: &config.server_port,
        read_timeout: config.read_timeout,
        write_timeout: config.write_timeout,
    };

    let http_server = HttpServer::new(device_service, server_config).await?;

    http_server.run().await
}
