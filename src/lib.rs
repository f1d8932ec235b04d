pub mod api;
pub mod config;
pub mod error;
pub mod geometry;
pub mod layouts;
pub mod scorer;
// cmd and reports belong to the binary crate (main.rs).

pub use api::{alphabet, bigram, bigram_weight, key_position, list_layouts, BigramRegistry};
pub use error::{KeyWeightError, KwResult};
pub use layouts::KnownLayout;
