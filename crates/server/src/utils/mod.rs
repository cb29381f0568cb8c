pub mod block;
pub mod format;
pub mod normalize;

pub use block::{parse_block_number, sort_blocks_descending};
pub use format::{display_value, escape_html, short_hash};
pub use normalize::normalize;
