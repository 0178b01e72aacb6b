pub mod png;

pub use png::{PNG_SIGNATURE, encode_png};
