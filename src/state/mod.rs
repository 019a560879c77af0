//! Page state modules.
//!
//! DESIGN
//! ======
//! `prefs` is the persisted record; `mode` is transient presentation state;
//! `page` ties both to one surface so dispatch handlers have a single target.

pub mod mode;
pub mod page;
pub mod prefs;

pub use page::Page;
