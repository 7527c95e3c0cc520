use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about = "Terminal client for a Kuh Handel game server", long_about = None)]
pub struct Config {
    /// WebSocket URL of the game server.
    #[arg(short, long, default_value = "ws://127.0.0.1:9876/")]
    pub server: String,

    /// Send this username as soon as the connection is up.
    #[arg(short, long)]
    pub name: Option<String>,
}
