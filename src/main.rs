use std::net::TcpListener;

use env_logger::Env;
use husk::{configuration::get_configuration, startup::run};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration().expect("Failed to read configuration.");
    let listener = TcpListener::bind(configuration.address())?;

    log::info!(
        "Server is running on http://localhost:{}",
        configuration.port
    );

    run(listener)?.await
}
