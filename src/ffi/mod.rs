//! Raw `#[wasm_bindgen]` declarations of the CIP-30 interface.
//!
//! This is the pure pass-through layer: every binding forwards one property
//! read or method call on the injected object and hands back whatever the
//! wallet produced, errors included. The wrappers in the crate root build on
//! these; use them directly when no typing at all is wanted.

pub mod api;
pub mod provider;

pub use self::{
    api::{Cip30Api, DataSignature},
    provider::Cip30Provider,
};
