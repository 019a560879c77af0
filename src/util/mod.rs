//! Browser adapters (`hydrate` only).
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that calls `web-sys` lives here so the rest of the crate stays
//! testable without a browser.

pub mod boot;
pub mod dom;
pub mod effects;
pub mod storage;
