use crate::{WalletHandle, error::BridgeError, ffi};

/// A wallet provider found in the registry, not yet enabled.
///
/// This is the pre-connection surface of CIP30: the metadata the extension
/// publishes about itself plus the two calls (`isEnabled`, `enable`) that
/// exist before the user granted anything. Obtain one from
/// [`WalletRegistry::wallet`] or [`WalletRegistry::wallets`].
///
/// The metadata getters are plain property reads on the injected entry. On
/// an entry that does not carry the property they return whatever the host
/// coerces `undefined` into; [`WalletRegistry::is_available`] is the way to
/// check the shape beforehand.
///
/// [`WalletRegistry::wallet`]: crate::WalletRegistry::wallet
/// [`WalletRegistry::wallets`]: crate::WalletRegistry::wallets
/// [`WalletRegistry::is_available`]: crate::WalletRegistry::is_available
#[derive(Clone, PartialEq)]
pub struct Wallet {
    tag: String,
    provider: ffi::Cip30Provider,
}

impl Wallet {
    pub(crate) fn new(tag: String, provider: ffi::Cip30Provider) -> Self {
        Self { tag, provider }
    }

    /// The registry key this wallet was found under (`"nami"`, `"eternl"`,
    /// ...). Stable for the lifetime of the page, unlike [`Self::name`]
    /// which is whatever the extension chooses to display.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// The wallet's self-reported display name.
    pub fn name(&self) -> String {
        self.provider.name()
    }

    /// The CIP30 API version the wallet claims to implement.
    pub fn api_version(&self) -> String {
        self.provider.api_version()
    }

    /// The wallet's icon, a data URI.
    pub fn icon(&self) -> String {
        self.provider.icon()
    }

    /// Ask the wallet whether a previous [`Self::enable`] grant is still in
    /// place, without prompting the user.
    ///
    /// A rejection from the wallet is forwarded untouched in
    /// [`BridgeError::Js`]. A fulfilment that is not a boolean is reported
    /// as [`BridgeError::UnexpectedValue`] rather than coerced.
    pub async fn is_enabled(&self) -> Result<bool, BridgeError> {
        let value = self.provider.is_enabled().await?;

        value
            .as_bool()
            .ok_or_else(|| BridgeError::unexpected("isEnabled result", &value))
    }

    /// Request access to the wallet's full API, prompting the user if no
    /// grant is in place yet.
    ///
    /// On success the wallet hands back its API object, wrapped here as a
    /// [`WalletHandle`]. On refusal the wallet's rejection value is
    /// forwarded untouched in [`BridgeError::Js`]; see
    /// [`BridgeError::api_error`] for reading it as the CIP30 `APIError`
    /// shape.
    pub async fn enable(&self) -> Result<WalletHandle, BridgeError> {
        let api = self.provider.enable().await?;

        Ok(WalletHandle::new(api))
    }
}
