use async_trait::async_trait;
use serde::Serialize;
use serde_json::{json, value::to_raw_value, Value};
use thiserror::Error;
use wasm_bindgen::{prelude::*, JsCast, JsValue};

use alloy_json_rpc::{ErrorPayload, Response, ResponsePayload, SerializedRequest};
use alloy_transport::{TransportErrorKind, TransportResult};

use crate::{builder::AdapterConfig, WalletAdapter, WebClient};

// JSON-RPC internal error, for rejections without a numeric code
const INTERNAL_ERROR: i64 = -32603;

#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct Eip1193Request {
    method: String,
    params: JsValue,
}

#[wasm_bindgen]
impl Eip1193Request {
    pub(crate) fn new(method: String, params: JsValue) -> Eip1193Request {
        Eip1193Request { method, params }
    }

    #[wasm_bindgen(getter)]
    pub fn method(&self) -> String {
        self.method.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn params(&self) -> JsValue {
        self.params.clone()
    }
}

#[derive(Error, Debug)]
pub enum Eip1193Error {
    /// Thrown if the request failed
    #[error("JsValue error: {0}")]
    JsValueError(String),

    /// Thrown if no window.ethereum is found in DOM
    #[error("No ethereum found")]
    JsNoEthereum,

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),
}

// serde_wasm_bindgen::Error holds a JsValue, which cannot cross into TransportError
impl From<serde_wasm_bindgen::Error> for Eip1193Error {
    fn from(src: serde_wasm_bindgen::Error) -> Self {
        Eip1193Error::JsValueError(src.to_string())
    }
}

impl From<JsValue> for Eip1193Error {
    fn from(src: JsValue) -> Self {
        Eip1193Error::JsValueError(format!("{:?}", src))
    }
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    /// An EIP-1193 provider object. Available by convention at `window.ethereum`
    pub type Ethereum;

    #[wasm_bindgen(catch, method)]
    async fn request(_: &Ethereum, args: Eip1193Request) -> Result<JsValue, JsValue>;
}

impl Ethereum {
    pub fn injected() -> Result<Self, Eip1193Error> {
        let ethereum = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ethereum"))?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return Err(Eip1193Error::JsNoEthereum);
        }
        Ok(ethereum.unchecked_into())
    }
}

/// [`WebClient`] over the provider the wallet extension injects.
// The provider is looked up on every request: it is not Send and may be
// injected after the page loaded.
#[derive(Debug, Clone, Default)]
pub struct Eip1193 {}

impl Eip1193 {
    pub fn is_available() -> bool {
        Ethereum::injected().is_ok()
    }

    pub fn new() -> Self {
        Eip1193 {}
    }

    async fn dispatch(&self, method: &str, params: Value) -> Result<Result<Value, Value>, Eip1193Error> {
        let ethereum = Ethereum::injected()?;
        // plain objects, serde_wasm_bindgen would build Maps otherwise
        let params = params.serialize(&serde_wasm_bindgen::Serializer::json_compatible())?;
        match ethereum
            .request(Eip1193Request::new(method.to_string(), params))
            .await
        {
            Ok(v) => Ok(Ok(from_js(v)?)),
            Err(e) => Ok(Err(rejection(&e))),
        }
    }
}

fn from_js(value: JsValue) -> Result<Value, Eip1193Error> {
    if value.is_undefined() {
        return Ok(Value::Null);
    }
    Ok(serde_wasm_bindgen::from_value(value)?)
}

// Rejections are usually Error instances whose `message` is not enumerable,
// so the fields are read one by one instead of deserializing the whole object.
fn rejection(err: &JsValue) -> Value {
    let field = |name: &str| js_sys::Reflect::get(err, &JsValue::from_str(name)).ok();
    let code = field("code")
        .and_then(|c| c.as_f64())
        .map(|c| c as i64)
        .unwrap_or(INTERNAL_ERROR);
    let message = field("message")
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    let mut payload = json!({ "code": code, "message": message });
    if let Some(data) = field("data").filter(|d| !d.is_undefined()) {
        if let Ok(data) = from_js(data) {
            payload["data"] = data;
        }
    }
    payload
}

fn error_payload(rejected: Value) -> Result<ErrorPayload, Eip1193Error> {
    Ok(serde_json::from_value(rejected)?)
}

impl Eip1193 {
    async fn call(&self, req: &SerializedRequest) -> Result<ResponsePayload, Eip1193Error> {
        let params = match req.params() {
            Some(raw) => serde_json::from_str(raw.get())?,
            None => json!([]),
        };
        tracing::trace!(method = req.method(), %params, "window.ethereum.request");
        Ok(match self.dispatch(req.method(), params).await? {
            Ok(result) => ResponsePayload::Success(to_raw_value(&result)?),
            Err(rejected) => ResponsePayload::Failure(error_payload(rejected)?),
        })
    }
}

#[async_trait(?Send)]
impl WebClient for Eip1193 {
    async fn send(&self, req: SerializedRequest) -> TransportResult<Response> {
        let payload = self.call(&req).await.map_err(TransportErrorKind::custom)?;
        Ok(Response {
            id: req.id().clone(),
            payload,
        })
    }
}

impl WalletAdapter<Eip1193> {
    /// Adapter over `window.ethereum`, `None` when no wallet is injected.
    pub fn injected(config: AdapterConfig) -> Option<Self> {
        if !Eip1193::is_available() {
            tracing::warn!("no injected ethereum provider");
            return None;
        }
        Some(Self::with_config(Eip1193::new(), config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::WalletError;
    use wasm_bindgen_test::*;

    fn set(target: &JsValue, key: &str, value: JsValue) {
        js_sys::Reflect::set(target, &JsValue::from_str(key), &value).unwrap();
    }

    #[wasm_bindgen_test]
    fn rejected_error_instance_keeps_code_and_message() {
        // wallets reject with Error instances, `message` is not enumerable there
        let err: JsValue = js_sys::Error::new("User rejected the request.").into();
        set(&err, "code", JsValue::from_f64(4001.0));

        let err = WalletError::from(error_payload(rejection(&err)).unwrap());
        assert!(err.is_user_rejection());
        match err {
            WalletError::Rpc { message, data, .. } => {
                assert_eq!(message, "User rejected the request.");
                assert_eq!(data, None);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[wasm_bindgen_test]
    fn rejected_plain_object_with_data() {
        let err: JsValue = js_sys::Object::new().into();
        set(&err, "code", JsValue::from_f64(4001.0));
        set(&err, "message", JsValue::from_str("User rejected the request."));
        set(&err, "data", JsValue::from_str("popup closed"));

        let payload = rejection(&err);
        assert_eq!(
            payload,
            json!({ "code": 4001, "message": "User rejected the request.", "data": "popup closed" })
        );
        assert!(WalletError::from(error_payload(payload).unwrap()).is_user_rejection());
    }

    #[wasm_bindgen_test]
    fn rejection_without_code_is_internal_error() {
        let payload = rejection(&JsValue::from_str("boom"));
        assert_eq!(payload["code"], json!(INTERNAL_ERROR));
    }
}
