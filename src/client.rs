use crate::api::{GoodsApi, OrdersApi, UserApi};
use crate::config::ClientConfig;
use crate::domain::ports::Transport;
use crate::transport::HttpTransport;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// All three bindings over one shared transport.
#[derive(Debug, Clone)]
pub struct MarketClient<T: Transport> {
    pub goods: GoodsApi<Arc<T>>,
    pub orders: OrdersApi<Arc<T>>,
    pub user: UserApi<Arc<T>>,
}

impl<T: Transport> MarketClient<T> {
    pub fn new(transport: T) -> Self {
        let shared = Arc::new(transport);
        Self {
            goods: GoodsApi::new(Arc::clone(&shared)),
            orders: OrdersApi::new(Arc::clone(&shared)),
            user: UserApi::new(shared),
        }
    }
}

impl MarketClient<HttpTransport> {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!("Using backend at {}", config.base_url);
        Ok(Self::new(HttpTransport::from_config(config)?))
    }
}
