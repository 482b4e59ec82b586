//! Board-to-feature-vector hooks for external evaluators.

pub mod encoder;

pub use encoder::{BoardEncoder, TdGammonEncoder};
