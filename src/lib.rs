//! # folio
//!
//! WebAssembly behavior layer for the terminal-styled portfolio page.
//!
//! The page itself is static HTML + CSS. This crate owns everything that
//! moves: the customization panel and its persisted preferences, display-mode
//! toggles, typewriter text, scroll-driven navigation highlighting, and the
//! reveal animations. All decision logic is plain Rust over two small traits
//! ([`store::PreferenceStore`] and [`surface::Surface`]) so it can be tested
//! natively; the `hydrate` feature adds the `web-sys` adapters and the
//! `wasm-bindgen` entry point.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`applier`] | Preference store & applier: load, set, reset, apply theme |
//! | [`theme`] | Immutable theme registry |
//! | [`color`] | Hex color parsing for the color pickers |
//! | [`state`] | Preference set, display mode, and the [`state::Page`] aggregate |
//! | [`dispatch`] | Control id → handler table built once at startup |
//! | [`store`] | Persistent key-value store trait and in-memory fake |
//! | [`surface`] | Document surface trait and in-memory fake |
//! | [`effects`] | Typewriter, scroll, and reveal effect cores |
//! | [`error`] | Store and preference error types |
//! | [`consts`] | Element ids, class names, CSS variables, storage keys, timings |
//! | `util` | Browser adapters and boot wiring (`hydrate` only) |

pub mod applier;
pub mod color;
pub mod consts;
pub mod dispatch;
pub mod effects;
pub mod error;
pub mod state;
pub mod store;
pub mod surface;
pub mod theme;

#[cfg(feature = "hydrate")]
pub mod util;
