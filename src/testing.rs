//! In-memory [`WebClient`] for exercising a [`crate::WalletAdapter`] without a wallet.
//!
//! Answers are scripted up front and consumed in order; every request that
//! reaches the client is recorded.

use std::{cell::RefCell, collections::VecDeque};

use alloy_json_rpc::{ErrorPayload, Id, Response, ResponsePayload, SerializedRequest};
use alloy_transport::{TransportErrorKind, TransportResult};
use async_trait::async_trait;
use serde_json::{json, value::to_raw_value, Value};

use crate::webclient::WebClient;

#[derive(Debug, Clone, PartialEq)]
pub struct SentRequest {
    pub id: Id,
    pub method: String,
    pub params: Value,
}

#[derive(Debug, Clone)]
enum Scripted {
    Success(Value),
    Failure { code: i64, message: String },
    Transport,
}

#[derive(Debug, Default)]
pub struct RecordingClient {
    script: RefCell<VecDeque<Scripted>>,
    sent: RefCell<Vec<SentRequest>>,
}

impl RecordingClient {
    /// Queues a successful result.
    pub fn respond(&self, result: Value) {
        self.script.borrow_mut().push_back(Scripted::Success(result));
    }

    /// Queues a wallet error object.
    pub fn reject(&self, code: i64, message: &str) {
        self.script.borrow_mut().push_back(Scripted::Failure {
            code,
            message: message.to_string(),
        });
    }

    /// Queues a request that never reaches the wallet.
    pub fn fail_transport(&self) {
        self.script.borrow_mut().push_back(Scripted::Transport);
    }

    pub fn sent(&self) -> Vec<SentRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl WebClient for RecordingClient {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response> {
        let params = match req.params() {
            Some(raw) => serde_json::from_str(raw.get()).map_err(TransportErrorKind::custom)?,
            None => Value::Null,
        };
        self.sent.borrow_mut().push(SentRequest {
            id: req.id().clone(),
            method: req.method().to_string(),
            params,
        });

        let next = self.script.borrow_mut().pop_front();
        let payload = match next {
            Some(Scripted::Success(result)) => {
                ResponsePayload::Success(to_raw_value(&result).map_err(TransportErrorKind::custom)?)
            }
            Some(Scripted::Failure { code, message }) => {
                let err: ErrorPayload =
                    serde_json::from_value(json!({ "code": code, "message": message }))
                        .map_err(TransportErrorKind::custom)?;
                ResponsePayload::Failure(err)
            }
            Some(Scripted::Transport) => return Err(TransportErrorKind::backend_gone()),
            None => return Err(TransportErrorKind::custom_str("no scripted response")),
        };
        Ok(Response {
            id: req.id().clone(),
            payload,
        })
    }
}
