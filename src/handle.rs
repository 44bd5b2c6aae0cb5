use crate::{
    error::BridgeError,
    ffi::{self, DataSignature},
};
use wasm_bindgen::{JsCast, JsValue};

/// Pagination request for the list-returning CIP30 calls.
///
/// Encoded on the wire as `{ page, limit }`, the exact shape the standard
/// specifies. A wallet that cannot serve the requested page rejects with
/// the `PaginateError` shape; read it back with [`BridgeError::decode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Paginate {
    pub page: usize,
    pub limit: usize,
}

impl Paginate {
    fn to_js(self) -> Result<JsValue, BridgeError> {
        serde_wasm_bindgen::to_value(&self).map_err(|error| BridgeError::Js(error.into()))
    }
}

/// The wire spelling of an omitted [`WalletHandle::utxos`] pagination
/// argument.
///
/// Two readings of the standard exist in the wild for that call: leaving
/// the argument out entirely, so the wallet sees `undefined`, or passing an
/// explicit `null` through. Most wallets accept both; for the ones that do
/// not, [`WalletHandle::with_omitted_paginate`] selects the spelling. The
/// other paginated calls always spell an omitted argument `undefined`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OmittedPaginate {
    /// the wallet sees `undefined`, as if the argument was left out
    #[default]
    Undefined,
    /// the wallet sees an explicit `null`
    Null,
}

impl OmittedPaginate {
    fn to_js(self) -> JsValue {
        match self {
            Self::Undefined => JsValue::UNDEFINED,
            Self::Null => JsValue::NULL,
        }
    }
}

/// The API surface of an enabled wallet, obtained from [`Wallet::enable`].
///
/// Every method forwards one CIP30 call to the wallet and hands the outcome
/// back with as little interpretation as possible: hexadecimal strings stay
/// hexadecimal strings, arrays become `Vec<String>`, a `null` answer
/// becomes `None`. Nothing is validated, retried or recovered; a rejection
/// comes back in [`BridgeError::Js`] exactly as the wallet raised it, and
/// [`BridgeError::decode`] reads it as one of the typed CIP30 error shapes
/// when wanted.
///
/// The handle holds whatever object the wallet's `enable` resolved to.
/// Calling a method that object does not have rejects with the host's own
/// `TypeError`, forwarded like any wallet error.
///
/// [`Wallet::enable`]: crate::Wallet::enable
#[derive(Clone, PartialEq)]
pub struct WalletHandle {
    api: ffi::Cip30Api,
    omitted_paginate: OmittedPaginate,
}

impl WalletHandle {
    pub(crate) fn new(api: ffi::Cip30Api) -> Self {
        Self {
            api,
            omitted_paginate: OmittedPaginate::default(),
        }
    }

    /// Wrap an api object obtained by other means, e.g. one another library
    /// already enabled, or a stub.
    pub fn from_value(api: JsValue) -> Self {
        Self::new(api.into())
    }

    /// Select the wire spelling [`Self::utxos`] uses when no pagination is
    /// given.
    pub fn with_omitted_paginate(mut self, omitted_paginate: OmittedPaginate) -> Self {
        self.omitted_paginate = omitted_paginate;
        self
    }

    /// the network id of the currently connected account, `0` for the test
    /// networks and `1` for mainnet
    ///
    /// Network ids are small integers; a fulfilment that is not an integer
    /// in `u8` range is reported as [`BridgeError::UnexpectedValue`] rather
    /// than coerced.
    pub async fn network_id(&self) -> Result<u8, BridgeError> {
        let value = self.api.get_network_id().await?;

        match value.as_f64() {
            Some(id) if (0.0..=255.0).contains(&id) && id.fract() == 0.0 => Ok(id as u8),
            _ => Err(BridgeError::unexpected("network id", &value)),
        }
    }

    /// the total balance of the wallet, the hexadecimal string of a CBOR
    /// encoded value
    pub async fn balance(&self) -> Result<String, BridgeError> {
        let value = self.api.get_balance().await?;

        value
            .as_string()
            .ok_or_else(|| BridgeError::unexpected("balance", &value))
    }

    /// the address the wallet wants change sent to, in hexadecimal
    pub async fn change_address(&self) -> Result<String, BridgeError> {
        let value = self.api.get_change_address().await?;

        value
            .as_string()
            .ok_or_else(|| BridgeError::unexpected("change address", &value))
    }

    /// the reward addresses owned by the wallet, in hexadecimal
    pub async fn reward_addresses(&self) -> Result<Vec<String>, BridgeError> {
        let value = self.api.get_reward_addresses().await?;

        string_array("reward addresses", value)
    }

    /// the unused addresses of the wallet, in hexadecimal
    pub async fn unused_addresses(&self) -> Result<Vec<String>, BridgeError> {
        let value = self.api.get_unused_addresses().await?;

        string_array("unused addresses", value)
    }

    /// the used addresses of the wallet, in hexadecimal
    ///
    /// An omitted `paginate` always goes out as `undefined`;
    /// [`OmittedPaginate`] only concerns [`Self::utxos`].
    pub async fn used_addresses(
        &self,
        paginate: Option<&Paginate>,
    ) -> Result<Vec<String>, BridgeError> {
        let paginate = match paginate {
            Some(paginate) => paginate.to_js()?,
            None => JsValue::UNDEFINED,
        };
        let value = self.api.get_used_addresses(&paginate).await?;

        string_array("used addresses", value)
    }

    /// the UTxOs controlled by the wallet, each the hexadecimal string of
    /// its CBOR encoding
    ///
    /// Resolves to `None` when the wallet answers `null`, which the
    /// standard reserves for "the requested target cannot be attained".
    /// An omitted `paginate` goes out as the configured [`OmittedPaginate`]
    /// spelling.
    pub async fn utxos(
        &self,
        paginate: Option<&Paginate>,
    ) -> Result<Option<Vec<String>>, BridgeError> {
        let paginate = match paginate {
            Some(paginate) => paginate.to_js()?,
            None => self.omitted_paginate.to_js(),
        };
        let value = self.api.get_utxos(&paginate).await?;

        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }
        string_array("utxos", value).map(Some)
    }

    /// the UTxOs the wallet set aside as collateral, or `None` if there are
    /// none
    ///
    /// `params` goes to the wallet unchanged. The standard describes an
    /// `{ amount }` object carrying a CBOR coin but wallets diverge here,
    /// so the shape is left to the caller.
    pub async fn collateral(&self, params: &JsValue) -> Result<Option<Vec<String>>, BridgeError> {
        let value = self.api.get_collateral(params).await?;

        if value.is_null() || value.is_undefined() {
            return Ok(None);
        }
        string_array("collateral", value).map(Some)
    }

    /// ask the user to sign the transaction, the hexadecimal string of its
    /// CBOR encoding; resolves to the hexadecimal witness set
    ///
    /// With `partial_sign` the wallet signs what it can instead of
    /// rejecting when it cannot provide every signature.
    pub async fn sign_tx(&self, tx_hex: &str, partial_sign: bool) -> Result<String, BridgeError> {
        let value = self.api.sign_tx(tx_hex, partial_sign).await?;

        value
            .as_string()
            .ok_or_else(|| BridgeError::unexpected("witness set", &value))
    }

    /// ask the user to sign `payload_hex` (hexadecimal encoded bytes) with
    /// the key behind `address` (hexadecimal)
    pub async fn sign_data(
        &self,
        address: &str,
        payload_hex: &str,
    ) -> Result<DataSignature, BridgeError> {
        Ok(self.api.sign_data(address, payload_hex).await?)
    }

    /// [`Self::sign_data`], hexadecimal encoding the payload first
    pub async fn sign_data_bytes(
        &self,
        address: &str,
        payload: impl AsRef<[u8]>,
    ) -> Result<DataSignature, BridgeError> {
        self.sign_data(address, &hex::encode(payload)).await
    }

    /// ask the wallet to submit a signed transaction; resolves to the
    /// transaction id
    ///
    /// `tx` is any object carrying a `to_hex` method, e.g. a transaction
    /// built with one of the cardano serialisation libraries; its
    /// hexadecimal rendering is what goes to the wallet. Fails with
    /// [`BridgeError::MissingCapability`] when `tx` has no callable
    /// `to_hex`.
    pub async fn submit_tx(&self, tx: &JsValue) -> Result<String, BridgeError> {
        let tx_hex = tx_to_hex(tx)?;
        self.submit_tx_hex(&tx_hex).await
    }

    /// [`Self::submit_tx`] for a transaction already rendered to the
    /// hexadecimal string of its CBOR encoding
    pub async fn submit_tx_hex(&self, tx_hex: &str) -> Result<String, BridgeError> {
        let value = self.api.submit_tx(tx_hex).await?;

        value
            .as_string()
            .ok_or_else(|| BridgeError::unexpected("transaction id", &value))
    }

    /// [`Self::submit_tx_hex`], hexadecimal encoding the CBOR bytes first
    pub async fn submit_tx_bytes(&self, tx: impl AsRef<[u8]>) -> Result<String, BridgeError> {
        self.submit_tx_hex(&hex::encode(tx)).await
    }
}

/// render `tx` through its own `to_hex` capability
fn tx_to_hex(tx: &JsValue) -> Result<String, BridgeError> {
    let to_hex = js_sys::Reflect::get(tx, &JsValue::from_str("to_hex")).map_err(BridgeError::Js)?;
    let to_hex: js_sys::Function = to_hex
        .dyn_into()
        .map_err(|_| BridgeError::MissingCapability("to_hex"))?;
    let rendered = to_hex.call0(tx).map_err(BridgeError::Js)?;

    rendered
        .as_string()
        .ok_or_else(|| BridgeError::unexpected("to_hex result", &rendered))
}

fn string_array(context: &'static str, value: JsValue) -> Result<Vec<String>, BridgeError> {
    let array: js_sys::Array = value
        .dyn_into()
        .map_err(|value| BridgeError::unexpected(context, &value))?;

    let mut strings = Vec::with_capacity(array.length() as usize);
    for element in array {
        let Some(string) = element.as_string() else {
            return Err(BridgeError::unexpected(context, &element));
        };
        strings.push(string);
    }
    Ok(strings)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use wasm_bindgen_test::*;

    use super::*;
    use crate::{
        error::{TxSignError, TxSignErrorCode},
        test_support::{object, recording1, recording2, rejecting, resolving, set},
    };

    fn handle_over(api: JsValue) -> WalletHandle {
        WalletHandle::from_value(api)
    }

    #[wasm_bindgen_test]
    async fn balance_hands_back_the_wallet_string_untouched() {
        let api = object();
        set(&api, "getBalance", resolving(JsValue::from_str("00aabb")));

        assert_eq!(handle_over(api).balance().await, Ok("00aabb".to_owned()));
    }

    #[wasm_bindgen_test]
    async fn network_id_unwraps_the_number() {
        let api = object();
        set(&api, "getNetworkId", resolving(JsValue::from_f64(1.0)));

        assert_eq!(handle_over(api).network_id().await, Ok(1));
    }

    #[wasm_bindgen_test]
    async fn network_id_rejects_numbers_that_are_not_byte_integers() {
        for out_of_shape in [1000.0, 0.5] {
            let api = object();
            set(&api, "getNetworkId", resolving(JsValue::from_f64(out_of_shape)));

            assert!(matches!(
                handle_over(api).network_id().await,
                Err(BridgeError::UnexpectedValue { context, .. }) if context == "network id"
            ));
        }
    }

    #[wasm_bindgen_test]
    async fn change_address_rejects_non_string_fulfilments() {
        let api = object();
        set(&api, "getChangeAddress", resolving(JsValue::from_f64(5.0)));

        assert!(matches!(
            handle_over(api).change_address().await,
            Err(BridgeError::UnexpectedValue { context, .. }) if context == "change address"
        ));
    }

    #[wasm_bindgen_test]
    async fn reward_addresses_collect_the_array() {
        let addresses = js_sys::Array::of2(&JsValue::from_str("e1aa"), &JsValue::from_str("e1bb"));
        let api = object();
        set(&api, "getRewardAddresses", resolving(addresses.into()));

        assert_eq!(
            handle_over(api).reward_addresses().await,
            Ok(vec!["e1aa".to_owned(), "e1bb".to_owned()])
        );
    }

    #[wasm_bindgen_test]
    async fn utxos_defaults_to_an_undefined_pagination_argument() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "getUtxos", recording1(&calls, js_sys::Array::new().into()));

        let utxos = handle_over(api).utxos(None).await.unwrap();

        assert_eq!(utxos, Some(Vec::new()));
        assert_eq!(calls.borrow().len(), 1);
        assert!(calls.borrow()[0].is_undefined());
    }

    #[wasm_bindgen_test]
    async fn utxos_can_spell_the_omitted_pagination_as_null() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "getUtxos", recording1(&calls, js_sys::Array::new().into()));

        handle_over(api)
            .with_omitted_paginate(OmittedPaginate::Null)
            .utxos(None)
            .await
            .unwrap();

        assert!(calls.borrow()[0].is_null());
    }

    #[wasm_bindgen_test]
    async fn utxos_forwards_the_pagination_descriptor() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "getUtxos", recording1(&calls, js_sys::Array::new().into()));

        handle_over(api)
            .utxos(Some(&Paginate { page: 3, limit: 20 }))
            .await
            .unwrap();

        let argument = calls.borrow()[0].clone();
        let page = js_sys::Reflect::get(&argument, &JsValue::from_str("page")).unwrap();
        let limit = js_sys::Reflect::get(&argument, &JsValue::from_str("limit")).unwrap();
        assert_eq!(page.as_f64(), Some(3.0));
        assert_eq!(limit.as_f64(), Some(20.0));
    }

    #[wasm_bindgen_test]
    async fn utxos_reads_null_as_none() {
        let api = object();
        set(&api, "getUtxos", resolving(JsValue::NULL));

        assert_eq!(handle_over(api).utxos(None).await, Ok(None));
    }

    #[wasm_bindgen_test]
    async fn used_addresses_forward_the_pagination_descriptor() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let addresses = js_sys::Array::of1(&JsValue::from_str("01ab"));
        let api = object();
        set(&api, "getUsedAddresses", recording1(&calls, addresses.into()));

        let used = handle_over(api)
            .used_addresses(Some(&Paginate { page: 0, limit: 5 }))
            .await
            .unwrap();

        assert_eq!(used, vec!["01ab".to_owned()]);
        let argument = calls.borrow()[0].clone();
        let page = js_sys::Reflect::get(&argument, &JsValue::from_str("page")).unwrap();
        let limit = js_sys::Reflect::get(&argument, &JsValue::from_str("limit")).unwrap();
        assert_eq!(page.as_f64(), Some(0.0));
        assert_eq!(limit.as_f64(), Some(5.0));
    }

    #[wasm_bindgen_test]
    async fn used_addresses_always_spell_the_omitted_page_as_undefined() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "getUsedAddresses", recording1(&calls, js_sys::Array::new().into()));

        handle_over(api)
            .with_omitted_paginate(OmittedPaginate::Null)
            .used_addresses(None)
            .await
            .unwrap();

        assert!(calls.borrow()[0].is_undefined());
    }

    #[wasm_bindgen_test]
    async fn collateral_forwards_the_params_object_itself() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "getCollateral", recording1(&calls, JsValue::NULL));

        let params = object();
        set(&params, "amount", JsValue::from_str("1a001e8480"));
        let collateral = handle_over(api).collateral(&params).await.unwrap();

        assert_eq!(collateral, None);
        // the very object the caller supplied, by identity
        assert_eq!(calls.borrow()[0], params);
    }

    #[wasm_bindgen_test]
    async fn sign_tx_forwards_both_arguments() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "signTx", recording2(&calls, JsValue::from_str("a100")));

        let witness_set = handle_over(api).sign_tx("84a300", true).await.unwrap();

        assert_eq!(witness_set, "a100");
        let (tx, partial_sign) = calls.borrow()[0].clone();
        assert_eq!(tx.as_string(), Some("84a300".to_owned()));
        assert_eq!(partial_sign, JsValue::TRUE);
    }

    #[wasm_bindgen_test]
    async fn sign_tx_forwards_the_rejection_value() {
        let refusal = object();
        set(&refusal, "code", JsValue::from_f64(2.0));
        set(&refusal, "info", JsValue::from_str("declined"));

        let api = object();
        set(&api, "signTx", rejecting(refusal.clone()));

        let error = handle_over(api).sign_tx("84a300", false).await.unwrap_err();

        assert_eq!(error, BridgeError::Js(refusal));
        assert_eq!(
            error.decode::<TxSignError>().map(|e| e.code),
            Some(TxSignErrorCode::UserDeclined)
        );
    }

    #[wasm_bindgen_test]
    async fn sign_data_bytes_encodes_the_payload_in_hexadecimal() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let signature = object();
        set(&signature, "signature", JsValue::from_str("845882"));
        set(&signature, "key", JsValue::from_str("a50101"));

        let api = object();
        set(&api, "signData", recording2(&calls, signature));

        let signed = handle_over(api)
            .sign_data_bytes("e1aa", b"hello")
            .await
            .unwrap();

        assert_eq!(signed.signature(), "845882");
        assert_eq!(signed.key(), "a50101");
        let (address, payload) = calls.borrow()[0].clone();
        assert_eq!(address.as_string(), Some("e1aa".to_owned()));
        assert_eq!(payload.as_string(), Some("68656c6c6f".to_owned()));
    }

    #[wasm_bindgen_test]
    async fn submit_tx_renders_the_transaction_through_to_hex() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "submitTx", recording1(&calls, JsValue::from_str("deadbeef")));

        let tx = object();
        set(
            &tx,
            "to_hex",
            js_sys::Function::new_no_args("return \"84a3deadbeef\";"),
        );

        let tx_id = handle_over(api).submit_tx(&tx).await.unwrap();

        assert_eq!(tx_id, "deadbeef");
        assert_eq!(
            calls.borrow()[0].as_string(),
            Some("84a3deadbeef".to_owned())
        );
    }

    #[wasm_bindgen_test]
    async fn submit_tx_requires_the_to_hex_capability() {
        let api = object();
        set(&api, "submitTx", resolving(JsValue::from_str("deadbeef")));

        let result = handle_over(api).submit_tx(&object()).await;

        assert_eq!(result, Err(BridgeError::MissingCapability("to_hex")));
    }

    #[wasm_bindgen_test]
    async fn submit_tx_bytes_encodes_the_transaction_in_hexadecimal() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let api = object();
        set(&api, "submitTx", recording1(&calls, JsValue::from_str("id")));

        handle_over(api)
            .submit_tx_bytes([0xde, 0xad])
            .await
            .unwrap();

        assert_eq!(calls.borrow()[0].as_string(), Some("dead".to_owned()));
    }

    #[wasm_bindgen_test]
    async fn a_method_missing_on_the_api_object_rejects_with_the_host_error() {
        let error = handle_over(object()).balance().await.unwrap_err();

        assert!(matches!(error, BridgeError::Js(_)));
    }
}
