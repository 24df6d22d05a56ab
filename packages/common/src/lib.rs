pub mod config;
pub mod entity_kind;
pub mod error;
pub mod number;
pub mod shape;
pub mod timestamp;

pub use entity_kind::{EntityKind, ParseKindError};
pub use error::ShapeError;
pub use shape::{Normalize, Patch, set_if_present};
