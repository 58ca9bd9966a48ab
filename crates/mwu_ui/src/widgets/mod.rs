//! Custom widgets.

pub mod drop_zone;
pub mod error_block;

pub use drop_zone::drop_zone;
pub use error_block::{error_block, preformatted};
