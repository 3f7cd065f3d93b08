pub mod api;
pub mod client;
pub mod config;
pub mod domain;
pub mod session;
pub mod transport;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use api::{GoodsApi, OrdersApi, UserApi};
pub use client::MarketClient;
pub use config::ClientConfig;
pub use domain::model::{ApiResponse, Credential, Method, RequestDescriptor};
pub use domain::ports::Transport;
pub use session::{Session, SessionState, WalletState};
pub use transport::HttpTransport;
pub use utils::error::{ClientError, Result};
