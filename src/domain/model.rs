use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque bearer value handed out by the login endpoint.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Credential(String);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

/// What a binding asks the transport to do. The body is forwarded exactly as the
/// caller supplied it.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestDescriptor {
    pub path: String,
    pub method: Method,
    pub body: Option<Value>,
    pub credential: Option<Credential>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Get,
            body: None,
            credential: None,
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: Method::Post,
            body: None,
            credential: None,
        }
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn with_credential(mut self, credential: Credential) -> Self {
        self.credential = Some(credential);
        self
    }
}

/// Response envelope written by every backend controller.
///
/// Failures are reported with HTTP 200 and a non-200 `code`. `data` is usually the
/// chaincode result re-encoded as a JSON string, so use [`ApiResponse::data_as`] rather
/// than deserializing it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub code: i64,
    #[serde(default)]
    pub msg: Value,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub count: i64,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        self.code == 200
    }

    /// True when `data` is null, an empty string, or an empty object/array.
    pub fn data_is_empty(&self) -> bool {
        match &self.data {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(map) => map.is_empty(),
            _ => false,
        }
    }

    pub fn data_as<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        match &self.data {
            Value::String(raw) => match serde_json::from_str(raw) {
                Ok(decoded) => Ok(decoded),
                // Plain strings such as "login" are not JSON documents.
                Err(_) => serde_json::from_value(self.data.clone()),
            },
            other => serde_json::from_value(other.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Good {
    pub id: String,
    pub owner: String,
    pub price: i64,
    pub amount: i64,
    /// 0 idle, 1 on sale, 2 locked.
    pub status: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub order_num: String,
    pub good_id: String,
    pub ciphertext: String,
    pub sender: String,
    #[serde(rename = "reciver")]
    pub receiver: String,
    pub flag: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    pub address: String,
    pub balance: String,
}
