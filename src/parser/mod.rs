pub mod tokens;

// Re-export the public API so call sites can stay at `parser::`.
pub use tokens::{normalize, order_by_length, prepare, tokenize};
