use crate::api::UserApi;
use crate::domain::model::{ApiResponse, Wallet};
use crate::domain::ports::Transport;
use crate::utils::error::{ClientError, Result};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Cached view of one user's on-chain wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletState {
    pub username: String,
    pub address: String,
    pub balance: String,
}

impl WalletState {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            address: String::new(),
            balance: "0".to_string(),
        }
    }

    pub fn apply(&mut self, wallet: Wallet) {
        self.address = wallet.address;
        self.balance = wallet.balance;
    }

    pub async fn refresh<T>(&mut self, api: &UserApi<T>) -> Result<Wallet>
    where
        T: Transport<Response = ApiResponse>,
        T::Error: Into<ClientError>,
    {
        let response = api
            .get_wallet(json!({ "username": self.username }))
            .await
            .map_err(Into::<ClientError>::into)?;

        if response.data_is_empty() {
            return Err(ClientError::verification("Failed to fetch user info."));
        }

        let wallet: Wallet = response.data_as()?;
        self.apply(wallet.clone());
        tracing::debug!("Wallet for {} refreshed", self.username);
        Ok(wallet)
    }
}
