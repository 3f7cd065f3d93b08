use crate::api::endpoints;
use crate::domain::model::RequestDescriptor;
use crate::domain::ports::Transport;
use serde_json::Value;
use std::fmt::Display;
use std::future::Future;

pub fn list_elec_request() -> RequestDescriptor {
    RequestDescriptor::get(endpoints::GOODS_LIST)
}

pub fn add_elec_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::GOODS_ADD).with_body(data)
}

pub fn update_elec_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::GOODS_UPDATE_PRICE).with_body(data)
}

/// The identifier is appended as-is; escaping is left to the transport.
pub fn delete_elec_request(id: impl Display) -> RequestDescriptor {
    RequestDescriptor::post(format!("{}{}", endpoints::GOODS_DELETE_PREFIX, id))
}

pub fn search_elec_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::GOODS_BY_OWNER).with_body(data)
}

pub fn get_elec_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::GOODS_GET).with_body(data)
}

/// Inventory ("elec") endpoints.
#[derive(Debug, Clone)]
pub struct GoodsApi<T: Transport> {
    transport: T,
}

impl<T: Transport> GoodsApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn list_elec(&self) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(list_elec_request())
    }

    pub fn add_elec(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(add_elec_request(data))
    }

    /// Sends `{id, price}`; nothing is checked locally.
    pub fn update_elec(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(update_elec_request(data))
    }

    pub fn delete_elec(
        &self,
        id: impl Display,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(delete_elec_request(id))
    }

    pub fn search_elec(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(search_elec_request(data))
    }

    pub fn get_elec(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(get_elec_request(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Method;
    use serde_json::json;

    #[test]
    fn test_list_has_no_body() {
        let request = list_elec_request();
        assert_eq!(request.path, "/good/getAll");
        assert_eq!(request.method, Method::Get);
        assert!(request.body.is_none());
        assert!(request.credential.is_none());
    }

    #[test]
    fn test_delete_interpolates_id_verbatim() {
        assert_eq!(delete_elec_request(42).path, "/elec/delete/42");
        assert_eq!(delete_elec_request("a b/c").path, "/elec/delete/a b/c");
        assert_eq!(delete_elec_request(42).method, Method::Post);
        assert!(delete_elec_request(42).body.is_none());
    }

    #[test]
    fn test_update_forwards_partial_body() {
        let body = json!({"price": "9"});
        let request = update_elec_request(body.clone());
        assert_eq!(request.path, "/good/updateGoodPrice");
        assert_eq!(request.body, Some(body));
    }
}
