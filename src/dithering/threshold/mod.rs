pub mod bayer_transform;
pub mod matrices;

pub use bayer_transform::{BayerConfig, BayerStrategy};
pub use matrices::BayerMatrix;
