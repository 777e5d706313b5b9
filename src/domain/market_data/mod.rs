//! Market data aggregate containing entities, indicator math and value objects.

pub mod entities;
pub mod indicators;
pub mod normalizer;
pub mod value_objects;

pub use entities::*;
pub use normalizer::normalize_payload;
pub use value_objects::*;
