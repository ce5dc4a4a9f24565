pub mod line;
pub mod types;

pub use line::{encode_batch, parse_line, parse_value};
pub use types::*;
