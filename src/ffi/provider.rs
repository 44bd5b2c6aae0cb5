use super::Cip30Api;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// One entry of the injected wallet registry: the object a CIP-30
    /// wallet extension places under `window.cardano.<tag>`.
    #[derive(Clone, PartialEq)]
    pub type Cip30Provider;

    /// A name for the wallet which can be used inside of the dApp for the
    /// purpose of asking the user which wallet they would like to connect with.
    #[wasm_bindgen(method, getter)]
    pub fn name(this: &Cip30Provider) -> String;

    /// The version number of the API that the wallet supports.
    #[wasm_bindgen(method, getter, js_name = "apiVersion")]
    pub fn api_version(this: &Cip30Provider) -> String;

    /// A URI image (e.g. data URI base64 or other) for img src for the wallet
    /// which can be used inside of the dApp for the purpose of asking the user
    /// which wallet they would like to connect with.
    #[wasm_bindgen(method, getter)]
    pub fn icon(this: &Cip30Provider) -> String;

    /// Resolves `true` if the dApp is already connected or whitelisted,
    /// meaning [`enable`](Cip30Provider::enable) will succeed without
    /// prompting the user.
    #[wasm_bindgen(method, catch, js_name = "isEnabled")]
    pub async fn is_enabled(this: &Cip30Provider) -> Result<JsValue, JsValue>;

    /// Establishes the initial connection with the user's wallet, returning
    /// the api object used for every account-level call. Prompts for user
    /// permission on first connect; subsequent connections may use cached
    /// permissions. A declined prompt rejects with the wallet's own error.
    #[wasm_bindgen(method, catch)]
    pub async fn enable(this: &Cip30Provider) -> Result<Cip30Api, JsValue>;
}
