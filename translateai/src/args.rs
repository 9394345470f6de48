use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

/// Media translation server
#[derive(Debug, Parser)]
#[command(name = "translateai", about = "Translate English audio and video into Spanish speech")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "translateai.toml", env = "TRANSLATEAI_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "TRANSLATEAI_LISTEN")]
    pub listen: Option<SocketAddr>,

    /// Log filter, in `RUST_LOG` syntax
    #[arg(long, default_value = "info", env = "TRANSLATEAI_LOG")]
    pub log: String,
}
