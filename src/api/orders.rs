use crate::api::endpoints;
use crate::domain::model::RequestDescriptor;
use crate::domain::ports::Transport;
use serde_json::Value;
use std::fmt::Display;
use std::future::Future;

pub fn list_order_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSALS_BY_SELLER).with_body(data)
}

pub fn get_proposal_by_buyer_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSALS_BY_BUYER).with_body(data)
}

pub fn submit_order_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::USER_SUBMIT_ORDER).with_body(data)
}

pub fn add_order_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSAL_SET).with_body(data)
}

pub fn update_order_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSAL_UPDATE).with_body(data)
}

pub fn delete_order_request(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("{}{}", endpoints::ORDER_DELETE_PREFIX, id))
}

/// Targets the seller endpoint, same as [`list_order_request`]. Callers that really
/// want buyer-side proposals should use [`get_proposal_by_buyer_request`]; this one is
/// kept as-is until the backend contract says otherwise.
pub fn search_order_by_buyer_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSALS_BY_SELLER).with_body(data)
}

pub fn get_proposal_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSAL_GET).with_body(data)
}

pub fn get_proposal_by_order_num_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::PROPOSAL_BY_ORDER_NUM).with_body(data)
}

/// Proposal ("order") endpoints between buyers and sellers.
#[derive(Debug, Clone)]
pub struct OrdersApi<T: Transport> {
    transport: T,
}

impl<T: Transport> OrdersApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Proposals received by a seller: `{seller}`.
    pub fn list_order(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(list_order_request(data))
    }

    /// Proposals sent by a buyer: `{buyer}`.
    pub fn get_proposal_by_buyer(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(get_proposal_by_buyer_request(data))
    }

    pub fn submit_order(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(submit_order_request(data))
    }

    pub fn add_order(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(add_order_request(data))
    }

    pub fn update_order(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(update_order_request(data))
    }

    pub fn delete_order(
        &self,
        id: impl Display,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(delete_order_request(id))
    }

    pub fn search_order_by_buyer(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(search_order_by_buyer_request(data))
    }

    pub fn get_proposal(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(get_proposal_request(data))
    }

    pub fn get_proposal_by_order_num(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(get_proposal_by_order_num_request(data))
    }
}
