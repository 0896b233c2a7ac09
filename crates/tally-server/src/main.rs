use std::net::SocketAddr;

use clap::Parser;

use tally_server::{ServerConfig, TallyServer};

#[derive(Parser)]
#[command(name = "tallyd", about = "Tally — receipt points service", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:8080")]
    bind: SocketAddr,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();
    let server = TallyServer::new(ServerConfig {
        bind_addr: args.bind,
    });
    server.serve().await?;
    Ok(())
}
