/*!

# Cardano wallet bridge for CIP30

This library is meant to be used for web applications that need to talk to
the Cardano wallets injected in the page. It binds the CIP30 connector
standard and nothing more: every call is forwarded to the wallet exactly as
given, every outcome is handed back exactly as the wallet produced it. The
wallet stays the single source of truth for prompts, failures and timing;
the bridge adds no retries, no timeouts and no validation of its own.

## Features

- Enumerate the wallet registry injected in the page
- Probe a wallet entry's shape before touching it
- Enable a wallet and reach the full CIP30 api
- Query balance, addresses, UTxOs and collateral
- Sign transactions or arbitrary data, submit transactions

## Usage

First list the wallets the page knows about:

```no_run
use cip30_bridge::WalletRegistry;

for wallet in WalletRegistry::injected().wallets() {
    println!("Wallet: {} ({})", wallet.name(), wallet.api_version());
}
```

Extensions inject their entries at their own pace, so the registry is worth
re-reading once the page settled. Only the entries exposing the CIP30
provider shape are listed; [`WalletRegistry::tags`] shows the rest.

To go further, enable a wallet. The first call usually prompts the user;
on success the wallet hands back its api object, a [`WalletHandle`] here:

```no_run
# use cip30_bridge::{WalletRegistry, error::BridgeError};
#
# async fn test() -> Result<(), BridgeError> {
let wallet = WalletRegistry::injected().wallet("nami")?;
let handle = wallet.enable().await?;

let balance = handle.balance().await?;
# Ok(()) }
```

Anything the wallet rejects with is forwarded untouched; see
[`error::BridgeError`] for reading those values back as the standard's
error shapes.

*/

pub mod capability;
pub mod error;
pub mod ffi;
mod handle;
mod registry;
#[cfg(all(test, target_arch = "wasm32"))]
mod test_support;
mod wallet;

pub use self::{
    ffi::DataSignature,
    handle::{OmittedPaginate, Paginate, WalletHandle},
    registry::WalletRegistry,
    wallet::Wallet,
};
