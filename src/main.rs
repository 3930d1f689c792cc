//! Blunder Dodger HTTP server

use anyhow::Context;
use blunder_dodger::search::{SearchOptions, DEFAULT_SEARCH_DEPTH};
use blunder_dodger::{server, EvalKind};
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Serve fixed-depth chess moves over HTTP")]
struct Args {
    /// Address to bind
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Port to listen on
    #[arg(long, default_value_t = 5000)]
    port: u16,

    /// Plies searched below each root move
    #[arg(long, default_value_t = DEFAULT_SEARCH_DEPTH)]
    depth: i32,

    /// Resolve captures at the search horizon
    #[arg(long)]
    quiescence: bool,

    /// Evaluation: "pst", "endgame" or "material"
    #[arg(long, default_value_t = EvalKind::PieceSquare)]
    eval: EvalKind,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let options = SearchOptions::depth(args.depth)?
        .with_quiescence(args.quiescence)
        .with_eval(args.eval);

    let addr = SocketAddr::new(args.host, args.port);
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    info!(
        %addr,
        depth = options.depth.raw(),
        quiescence = options.quiescence,
        eval = %options.eval,
        "listening"
    );

    axum::serve(listener, server::router(options))
        .await
        .context("server error")?;

    Ok(())
}
