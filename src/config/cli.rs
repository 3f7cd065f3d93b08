use crate::config::ClientConfig;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "elec-client")]
#[command(about = "Command line client for the electricity goods marketplace")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with base_url / timeout_seconds / token_header / token")]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub base_url: Option<String>,

    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    #[arg(long)]
    pub token: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    #[command(subcommand)]
    Goods(GoodsCommand),
    #[command(subcommand)]
    Orders(OrdersCommand),
    #[command(subcommand)]
    User(UserCommand),
}

/// JSON bodies are passed as a single string argument, e.g. `'{"owner":"alice"}'`.
#[derive(Debug, Clone, Subcommand)]
pub enum GoodsCommand {
    List,
    Add { body: String },
    Update { body: String },
    Delete { id: String },
    Search { body: String },
    Get { body: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum OrdersCommand {
    List { body: String },
    ByBuyer { body: String },
    Submit { body: String },
    Add { body: String },
    Update { body: String },
    Delete { id: String },
    SearchByBuyer { body: String },
    Get { body: String },
    ByOrderNum { body: String },
}

#[derive(Debug, Clone, Subcommand)]
pub enum UserCommand {
    Wallet { body: String },
    SetWallet { body: String },
    ConfirmOrder { body: String },
}

impl CliConfig {
    /// File values first, then command line flags on top.
    pub fn resolve(&self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::from_file(path)?,
            None => ClientConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.timeout_seconds = timeout;
        }
        if let Some(token) = &self.token {
            config.token = Some(token.clone());
        }

        Ok(config)
    }
}
