//! Relax Server CLI
//!
//! Serves the visualizer's WebSocket endpoint. Open `client/index.html`
//! in a browser and point it at the listen address.

use std::net::SocketAddr;

use clap::Parser;

use relax_core::graph::CanvasSpec;
use relax_core::transport::Server;

#[derive(Parser)]
#[command(name = "relax-server")]
#[command(about = "Bellman-Ford step visualizer server")]
#[command(version)]
struct Cli {
    /// Address to listen on for WebSocket connections
    #[arg(long, default_value = "127.0.0.1:9090")]
    listen: SocketAddr,

    /// Canvas width in pixels
    #[arg(long, default_value = "800")]
    canvas_width: f32,

    /// Canvas height in pixels
    #[arg(long, default_value = "600")]
    canvas_height: f32,

    /// Gap between the layout circle and the canvas edge
    #[arg(long, default_value = "50")]
    margin: f32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let canvas = CanvasSpec {
        width: cli.canvas_width,
        height: cli.canvas_height,
        margin: cli.margin,
        ..CanvasSpec::default()
    };

    Server::new(canvas).run(cli.listen).await?;
    Ok(())
}
