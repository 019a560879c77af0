//! Page effects that do not touch preferences.
//!
//! Each module holds the decision logic only; `util::effects` drives them
//! from browser scroll, timer, and intersection callbacks.

pub mod reveal;
pub mod scroll;
pub mod typewriter;
