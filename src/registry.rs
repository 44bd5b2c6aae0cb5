use crate::{Wallet, capability::CapabilityDescriptor, error::BridgeError};
use wasm_bindgen::JsValue;

/// The injected wallet registry, conventionally `window.cardano`.
///
/// The registry is owned by the host environment: each wallet extension adds
/// one entry under its own tag (`"nami"`, `"eternl"`, ...). The bridge only
/// ever reads it; entries are never created, mutated or removed here. Every
/// operation takes the registry explicitly; hand a stub object to
/// [`WalletRegistry::from_value`] to run against something other than the
/// page's registry, e.g. in tests.
#[derive(Debug, Clone, PartialEq)]
pub struct WalletRegistry {
    entries: Option<js_sys::Object>,
}

impl WalletRegistry {
    /// The registry injected into the current page.
    ///
    /// Extensions inject their entries at their own pace, often well after
    /// the page scripts started running, so the global object is re-read on
    /// every call rather than captured once.
    pub fn injected() -> Self {
        let registry = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("cardano"))
            .unwrap_or(JsValue::UNDEFINED);
        Self::from_value(registry)
    }

    /// Treat `value` as the wallet registry. Any non-object value stands
    /// for "no registry is present".
    pub fn from_value(value: JsValue) -> Self {
        let entries = value.is_object().then(|| js_sys::Object::from(value));
        Self { entries }
    }

    /// Whether the host environment exposes a registry at all.
    pub fn is_present(&self) -> bool {
        self.entries.is_some()
    }

    /// The tags of every object-typed registry entry, valid provider or
    /// not, in the host's enumeration order. A `null` entry does not
    /// count, even though `typeof` calls it an object. Empty when no
    /// registry is present.
    pub fn tags(&self) -> Vec<String> {
        let Some(entries) = &self.entries else {
            return Vec::new();
        };

        let mut tags = Vec::new();
        for key in js_sys::Object::keys(entries) {
            let Some(tag) = key.as_string() else { continue };
            let value = js_sys::Reflect::get(entries, &key).unwrap_or(JsValue::UNDEFINED);
            if value.is_object() {
                tags.push(tag);
            }
        }
        tags
    }

    /// Whether `tag` names a usable wallet: the registry is present, holds
    /// an object under `tag`, and that object satisfies
    /// [`CapabilityDescriptor::PROVIDER`]. Nothing is invoked.
    pub fn is_available(&self, tag: &str) -> bool {
        self.entry(tag)
            .map(|entry| CapabilityDescriptor::PROVIDER.is_satisfied_by(&entry))
            .unwrap_or(false)
    }

    /// Look up the provider registered under `tag`.
    ///
    /// This is a plain lookup. The entry is not checked against the
    /// provider descriptor, so reads on an entry of unexpected shape behave
    /// however the host makes them behave; only absence is reported here,
    /// as [`BridgeError::NoRegistry`] or [`BridgeError::UnknownWallet`].
    /// Non-object entries count as absent, consistently with
    /// [`Self::tags`].
    pub fn wallet(&self, tag: &str) -> Result<Wallet, BridgeError> {
        if self.entries.is_none() {
            return Err(BridgeError::NoRegistry);
        }
        let entry = self
            .entry(tag)
            .ok_or_else(|| BridgeError::UnknownWallet(tag.to_owned()))?;
        Ok(Wallet::new(tag.to_owned(), entry.into()))
    }

    /// Every available wallet: [`Self::wallet`] over the tags that pass
    /// [`Self::is_available`].
    pub fn wallets(&self) -> Vec<Wallet> {
        self.tags()
            .into_iter()
            .filter(|tag| self.is_available(tag))
            .filter_map(|tag| self.wallet(&tag).ok())
            .collect()
    }

    fn entry(&self, tag: &str) -> Option<JsValue> {
        let entries = self.entries.as_ref()?;
        let value = js_sys::Reflect::get(entries, &JsValue::from_str(tag)).ok()?;
        value.is_object().then_some(value)
    }
}

impl From<js_sys::Object> for WalletRegistry {
    fn from(entries: js_sys::Object) -> Self {
        Self {
            entries: Some(entries),
        }
    }
}
