use crate::api::endpoints;
use crate::domain::model::{Credential, RequestDescriptor};
use crate::domain::ports::Transport;
use serde_json::Value;
use std::future::Future;

pub fn login_request(credentials: Value) -> RequestDescriptor {
    RequestDescriptor::get(endpoints::USER_LOGIN).with_body(credentials)
}

pub fn get_info_request(credential: Credential) -> RequestDescriptor {
    RequestDescriptor::get(endpoints::USER_INFO).with_credential(credential)
}

pub fn logout_request(credential: Credential) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::USER_LOGOUT).with_credential(credential)
}

pub fn get_wallet_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::USER_GET_WALLET).with_body(data)
}

pub fn set_wallet_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::USER_SET_WALLET).with_body(data)
}

pub fn confirm_order_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post(endpoints::USER_UPDATE_ORDER).with_body(data)
}

/// Account, wallet and order-confirmation endpoints.
#[derive(Debug, Clone)]
pub struct UserApi<T: Transport> {
    transport: T,
}

impl<T: Transport> UserApi<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn login(
        &self,
        credentials: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(login_request(credentials))
    }

    pub fn get_info(
        &self,
        credential: Credential,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(get_info_request(credential))
    }

    pub fn logout(
        &self,
        credential: Credential,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(logout_request(credential))
    }

    pub fn get_wallet(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(get_wallet_request(data))
    }

    /// Credits `{username, amount}`.
    pub fn set_wallet(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(set_wallet_request(data))
    }

    /// Seller confirmation of an order: `{orderNum, buyer, seller}`.
    pub fn confirm_order(
        &self,
        data: Value,
    ) -> impl Future<Output = Result<T::Response, T::Error>> + Send + '_ {
        self.transport.send(confirm_order_request(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Method;
    use serde_json::json;

    #[test]
    fn test_login_is_a_get_with_credentials() {
        let body = json!({"username": "alice", "password": "pw"});
        let request = login_request(body.clone());
        assert_eq!(request.method, Method::Get);
        assert_eq!(request.path, "/user/login");
        assert_eq!(request.body, Some(body));
        assert!(request.credential.is_none());
    }

    #[test]
    fn test_info_and_logout_carry_the_credential() {
        let credential = Credential::new("t-1");
        let info = get_info_request(credential.clone());
        assert_eq!(info.credential.as_ref(), Some(&credential));
        assert!(info.body.is_none());

        let logout = logout_request(credential.clone());
        assert_eq!(logout.method, Method::Post);
        assert_eq!(logout.credential, Some(credential));
    }

    #[test]
    fn test_wallet_paths() {
        assert_eq!(get_wallet_request(json!({})).path, "/user/getwallet");
        assert_eq!(set_wallet_request(json!({})).path, "/user/setwallet");
        assert_eq!(confirm_order_request(json!({})).path, "/user/updateOrder");
    }
}
