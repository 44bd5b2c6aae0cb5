use wasm_bindgen::JsValue;

/// Error returned by every fallible bridge operation.
///
/// The bridge distinguishes failures it detects itself (a missing registry,
/// an unknown wallet tag, a value without the capability an operation needs)
/// from failures raised on the JavaScript side. The latter are carried in
/// [`BridgeError::Js`] exactly as the wallet produced them; nothing is
/// rewritten, retried or recovered. Use [`BridgeError::decode`] to read a
/// forwarded error as one of the typed CIP-30 shapes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BridgeError {
    /// The host environment does not expose a wallet registry at all.
    #[error("No CIP-30 wallet registry is injected in this environment.")]
    NoRegistry,
    /// The registry has no object-typed entry under the requested tag.
    #[error("No wallet `{0}' in the registry.")]
    UnknownWallet(String),
    /// A value is missing a capability the operation requires, e.g. a
    /// transaction without `to_hex` handed to `submit_tx`.
    #[error("Missing required capability `{0}'.")]
    MissingCapability(&'static str),
    /// The wallet resolved a value whose JavaScript type does not match the
    /// one the CIP-30 interface declares for the call.
    #[error("Unexpected {context}: {value}.")]
    UnexpectedValue {
        context: &'static str,
        value: String,
    },
    /// An error raised on the JavaScript side, forwarded verbatim: the
    /// wallet's own rejection value, or the host's `TypeError` when a handle
    /// lacks the invoked method.
    #[error("The wallet raised an error: {0:?}.")]
    Js(JsValue),
}

impl From<JsValue> for BridgeError {
    fn from(value: JsValue) -> Self {
        Self::Js(value)
    }
}

impl BridgeError {
    pub(crate) fn unexpected(context: &'static str, value: &JsValue) -> Self {
        Self::UnexpectedValue {
            context,
            value: format!("{value:?}"),
        }
    }

    /// Decode a forwarded error into one of the CIP-30 error shapes.
    ///
    /// Returns `None` when the error did not come from the JavaScript side
    /// or does not have the requested shape. Decoding is opt-in: the bridge
    /// itself never interprets the values it forwards.
    pub fn decode<T>(&self) -> Option<T>
    where
        T: serde::de::DeserializeOwned,
    {
        match self {
            Self::Js(value) => serde_wasm_bindgen::from_value(value.clone()).ok(),
            _ => None,
        }
    }

    /// Shorthand for [`decode`](Self::decode) against [`APIError`], the
    /// error shape shared by `enable`, `isEnabled` and all the data queries.
    pub fn api_error(&self) -> Option<APIError> {
        self.decode()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum APIErrorCode {
    #[error("Invalid inputs.")]
    InvalidRequest,
    #[error("An error occured during the execution of this API call.")]
    InternalError,
    #[error("The request was denied. The wallet may be disconnected.")]
    Refused,
    /// If this error happens we might need to re-authenticate.
    #[error("The account has changed.")]
    AccountChange,
    #[error("Unknown error code `{0}'")]
    Unknown(i64),
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct APIError {
    pub code: APIErrorCode,
    pub info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum DataSignErrorCode {
    #[error(
        "Wallet could not sign the data (e.g. does not have the secret key associated with the address)"
    )]
    ProofGeneration,
    #[error("Address was not a P2PK address and thus had no SK associated with it")]
    AddressNotPK,
    #[error("User declined to sign the data")]
    UserDeclined,
    #[error("Unknown error code `{0}'")]
    Unknown(u64),
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct DataSignError {
    pub code: DataSignErrorCode,
    pub info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum TxSignErrorCode {
    /// The user accepted the signature request but the wallet could not sign
    /// the whole transaction and `partial_sign` was `false`.
    #[error("Wallet could not sign the transaction")]
    ProofGeneration,
    #[error("User declined to sign the transaction")]
    UserDeclined,
    #[error("Unknown error code `{0}'")]
    Unknown(u64),
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct TxSignError {
    pub code: TxSignErrorCode,
    pub info: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error)]
pub enum TxSendErrorCode {
    #[error("Wallet refused to send the transaction (possibly rate limited)")]
    Refused,
    #[error("Wallet could not send the transaction")]
    Failure,
    #[error("Unknown error code `{0}'")]
    Unknown(u64),
}

#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[error("{code}. {info}.")]
pub struct TxSendError {
    pub code: TxSendErrorCode,
    pub info: String,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, thiserror::Error, serde::Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[error("Pagination error")]
pub struct PaginateError {
    pub max_size: usize,
}

impl From<i64> for APIErrorCode {
    fn from(code: i64) -> Self {
        match code {
            -1 => Self::InvalidRequest,
            -2 => Self::InternalError,
            -3 => Self::Refused,
            -4 => Self::AccountChange,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<u64> for DataSignErrorCode {
    fn from(code: u64) -> Self {
        match code {
            1 => Self::ProofGeneration,
            2 => Self::AddressNotPK,
            3 => Self::UserDeclined,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<u64> for TxSignErrorCode {
    fn from(code: u64) -> Self {
        match code {
            1 => Self::ProofGeneration,
            2 => Self::UserDeclined,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl From<u64> for TxSendErrorCode {
    fn from(code: u64) -> Self {
        match code {
            1 => Self::Refused,
            2 => Self::Failure,
            unknown => Self::Unknown(unknown),
        }
    }
}

impl<'de> serde::Deserialize<'de> for APIErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <i64 as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> serde::Deserialize<'de> for DataSignErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <u64 as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> serde::Deserialize<'de> for TxSignErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <u64 as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}

impl<'de> serde::Deserialize<'de> for TxSendErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <u64 as serde::Deserialize>::deserialize(deserializer).map(Self::from)
    }
}
