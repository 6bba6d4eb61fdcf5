//! Platform abstraction layer
//!
//! The simulation itself is platform independent; this module only hosts the
//! browser bridge, which forwards key presses in and snapshots out.

#[cfg(target_arch = "wasm32")]
pub mod web;
