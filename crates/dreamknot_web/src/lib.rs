//! Browser binding for the DreamKnot site script.
//!
//! Only [`dom_contract`] builds on native targets, so the workspace tests
//! without a wasm toolchain. The binding itself needs `--features web` and a
//! wasm32 target.

pub mod dom_contract;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
mod web;

#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub use web::start;
