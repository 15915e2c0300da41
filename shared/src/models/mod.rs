//! Data models
//!
//! Entities owned by the arrangement store plus their create/update payloads.
//! All IDs are opaque `String`s generated by the store.

pub mod dining_table;
pub mod menu_option;
pub mod obstacle;
pub mod room;
pub mod seat;

// Re-exports
pub use dining_table::*;
pub use menu_option::*;
pub use obstacle::*;
pub use room::*;
pub use seat::*;
