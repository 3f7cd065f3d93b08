#![allow(dead_code)]

use elec_client::{ApiResponse, ClientError, RequestDescriptor, Transport};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Records every descriptor it receives and answers from a script.
#[derive(Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<RequestDescriptor>>>,
    script: Arc<Mutex<VecDeque<Result<ApiResponse, ClientError>>>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond_with(self, response: ApiResponse) -> Self {
        self.script.lock().unwrap().push_back(Ok(response));
        self
    }

    pub fn fail_with(self, error: ClientError) -> Self {
        self.script.lock().unwrap().push_back(Err(error));
        self
    }

    pub fn calls(&self) -> Vec<RequestDescriptor> {
        self.calls.lock().unwrap().clone()
    }

    pub fn single_call(&self) -> RequestDescriptor {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one transport call");
        calls.into_iter().next().unwrap()
    }
}

impl Transport for RecordingTransport {
    type Response = ApiResponse;
    type Error = ClientError;

    async fn send(&self, request: RequestDescriptor) -> Result<ApiResponse, ClientError> {
        self.calls.lock().unwrap().push(request);
        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(envelope(json!(null))))
    }
}

pub fn envelope(data: Value) -> ApiResponse {
    ApiResponse {
        code: 200,
        msg: json!("SUCCESS"),
        data,
        count: 1,
    }
}
