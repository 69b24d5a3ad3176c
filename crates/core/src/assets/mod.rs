//! Assets module - domain models.

mod assets_model;


pub use assets_model::{Asset, AssetCategory};
