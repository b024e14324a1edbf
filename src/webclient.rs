use alloy_json_rpc::{Response, SerializedRequest};
use alloy_transport::TransportResult;
use async_trait::async_trait;
use std::{rc::Rc, sync::Arc};

/// The dispatch handle the host hands to [`crate::WalletAdapter`].
///
/// Implementors deliver one serialized JSON-RPC request to the wallet and give
/// back its response. A wallet-side failure (rejection, unsupported method)
/// is a `Response` with a failure payload; `Err` is reserved for requests that
/// never reached the wallet.
// need this to be a trait (in order to implement async)
#[async_trait(?Send)]
pub trait WebClient {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response>;
}

#[async_trait(?Send)]
impl<'a, T: WebClient + ?Sized> WebClient for &'a T {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response> {
        (**self).send(req).await
    }
}

#[async_trait(?Send)]
impl<T: WebClient + ?Sized> WebClient for Box<T> {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response> {
        (**self).send(req).await
    }
}

#[async_trait(?Send)]
impl<T: WebClient + ?Sized> WebClient for Rc<T> {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response> {
        (**self).send(req).await
    }
}

#[async_trait(?Send)]
impl<T: WebClient + ?Sized> WebClient for Arc<T> {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response> {
        (**self).send(req).await
    }
}
