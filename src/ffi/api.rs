use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The return shape of `signData`: a COSE_Sign1 signature together with
    /// the COSE_Key it verifies against, both as hexadecimal strings.
    #[derive(Clone, PartialEq)]
    pub type DataSignature;

    #[wasm_bindgen(method, getter, js_name = "signature")]
    pub fn signature(this: &DataSignature) -> String;
    #[wasm_bindgen(method, getter, js_name = "key")]
    pub fn key(this: &DataSignature) -> String;
}

#[wasm_bindgen]
extern "C" {
    /// The api object a provider's `enable` resolves to.
    ///
    /// Each method forwards exactly one CIP-30 call. Results and rejections
    /// are left as the raw [`JsValue`] the wallet produced; the wrapping
    /// layer decides how much typing to impose on them. Invoking a method
    /// the underlying object does not have rejects with the host's own
    /// `TypeError`, which is forwarded like any other error.
    #[derive(Clone, PartialEq)]
    pub type Cip30Api;

    /// Returns the network id of the currently connected account. 0 is
    /// testnet and 1 is mainnet but other networks can possibly be returned
    /// by wallets. This result will stay the same unless the connected
    /// account changes.
    #[wasm_bindgen(method, catch, js_name = "getNetworkId")]
    pub async fn get_network_id(this: &Cip30Api) -> Result<JsValue, JsValue>;

    /// Returns the total balance available of the wallet, the hexadecimal
    /// string of a CBOR encoded value. This is the same as summing the
    /// results of `getUtxos`, but it is both useful to dApps and likely
    /// already maintained by the implementing wallet in a more efficient
    /// manner so it has been included in the API as well.
    #[wasm_bindgen(method, catch, js_name = "getBalance")]
    pub async fn get_balance(this: &Cip30Api) -> Result<JsValue, JsValue>;

    /// Returns an address owned by the wallet that should be used as a
    /// change address to return leftover assets during transaction creation
    /// back to the connected wallet. This can be used as a generic receive
    /// address as well.
    #[wasm_bindgen(method, catch, js_name = "getChangeAddress")]
    pub async fn get_change_address(this: &Cip30Api) -> Result<JsValue, JsValue>;

    /// Returns the reward addresses owned by the wallet. This can return
    /// multiple addresses e.g. CIP-0018.
    #[wasm_bindgen(method, catch, js_name = "getRewardAddresses")]
    pub async fn get_reward_addresses(this: &Cip30Api) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method, catch, js_name = "getUnusedAddresses")]
    pub async fn get_unused_addresses(this: &Cip30Api) -> Result<JsValue, JsValue>;

    /// `paginate` is forwarded verbatim: a `{ page, limit }` object,
    /// `undefined` or `null`.
    #[wasm_bindgen(method, catch, js_name = "getUsedAddresses")]
    pub async fn get_used_addresses(
        this: &Cip30Api,
        paginate: &JsValue,
    ) -> Result<JsValue, JsValue>;

    /// Returns the UTxOs controlled by the wallet, or `null` when the
    /// requested target cannot be attained. `paginate` is forwarded
    /// verbatim.
    #[wasm_bindgen(method, catch, js_name = "getUtxos")]
    pub async fn get_utxos(this: &Cip30Api, paginate: &JsValue) -> Result<JsValue, JsValue>;

    /// Returns the UTxOs the wallet set aside as collateral for script
    /// transactions, or `null` if there are none. `params` is forwarded
    /// verbatim.
    #[wasm_bindgen(method, catch, js_name = "getCollateral")]
    pub async fn get_collateral(this: &Cip30Api, params: &JsValue) -> Result<JsValue, JsValue>;

    /// Requests that the user sign the unsigned portions of the supplied
    /// transaction. If `partial_sign` is `true` the wallet only signs what
    /// it can; if `false` and the wallet cannot sign the whole transaction,
    /// it rejects with a `TxSignError`, as it does when the user declines.
    /// Resolves to the hexadecimal encoded CBOR of the transaction witness
    /// set.
    #[wasm_bindgen(method, catch, js_name = "signTx")]
    pub async fn sign_tx(
        this: &Cip30Api,
        tx: &str,
        partial_sign: bool,
    ) -> Result<JsValue, JsValue>;

    /// Requests that the user sign the payload with the key associated to
    /// the address. Both arguments are hexadecimal strings and are forwarded
    /// untouched.
    #[wasm_bindgen(method, catch, js_name = "signData")]
    pub async fn sign_data(
        this: &Cip30Api,
        address: &str,
        payload: &str,
    ) -> Result<DataSignature, JsValue>;

    /// Asks the wallet to send the given transaction, the hexadecimal
    /// string of its CBOR encoding. Resolves to the transaction id; the
    /// wallet is free to reject with a `TxSendError`.
    #[wasm_bindgen(method, catch, js_name = "submitTx")]
    pub async fn submit_tx(this: &Cip30Api, tx_hex: &str) -> Result<JsValue, JsValue>;
}
