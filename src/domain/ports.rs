use crate::domain::model::RequestDescriptor;
use std::future::Future;

/// The collaborator that actually issues requests.
///
/// Implementations own base-URL resolution, headers, credential attachment and
/// encoding. Bindings hand over one descriptor per call and return the future
/// unchanged, so `Response` and `Error` reach the caller exactly as produced here.
pub trait Transport: Send + Sync {
    type Response: Send;
    type Error: Send;

    fn send(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send;
}

impl<T: Transport> Transport for &T {
    type Response = T::Response;
    type Error = T::Error;

    fn send(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send {
        (**self).send(request)
    }
}

impl<T: Transport> Transport for std::sync::Arc<T> {
    type Response = T::Response;
    type Error = T::Error;

    fn send(
        &self,
        request: RequestDescriptor,
    ) -> impl Future<Output = Result<Self::Response, Self::Error>> + Send {
        (**self).send(request)
    }
}
