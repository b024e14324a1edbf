use alloy_chains::NamedChain;
use alloy_json_rpc::ErrorPayload;
use alloy_transport::TransportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WalletError {
    /// The dispatch handle could not deliver the request
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The wallet answered with an error object (ie: 4001 user rejected)
    #[error("Wallet error {code}: {message}")]
    Rpc {
        code: i64,
        message: String,
        data: Option<serde_json::Value>,
    },

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error("No chain descriptor for {0}")]
    UnknownChain(NamedChain),
}

impl WalletError {
    /// EIP-1193 code for "user rejected the request".
    pub const USER_REJECTED: i64 = 4001;

    pub fn is_user_rejection(&self) -> bool {
        matches!(self, WalletError::Rpc { code, .. } if *code == Self::USER_REJECTED)
    }
}

impl From<ErrorPayload> for WalletError {
    fn from(src: ErrorPayload) -> Self {
        let data = src
            .data
            .as_ref()
            .and_then(|raw| serde_json::from_str(raw.get()).ok());
        WalletError::Rpc {
            code: src.code,
            message: src.message.to_string(),
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_payload_keeps_code_message_and_data() {
        let payload: ErrorPayload = serde_json::from_value(serde_json::json!({
            "code": 4001,
            "message": "User rejected the request.",
            "data": { "origin": "localhost" }
        }))
        .unwrap();
        let err = WalletError::from(payload);
        assert!(err.is_user_rejection());
        match err {
            WalletError::Rpc { code, message, data } => {
                assert_eq!(code, 4001);
                assert_eq!(message, "User rejected the request.");
                assert_eq!(data, Some(serde_json::json!({ "origin": "localhost" })));
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unknown_chain_names_the_chain() {
        let err = WalletError::UnknownChain(NamedChain::Holesky);
        assert!(err.to_string().to_lowercase().contains("holesky"));
        assert!(!err.is_user_rejection());
    }
}
