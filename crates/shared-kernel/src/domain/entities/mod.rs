mod entity;

pub use entity::{Entity, EntityMetadata, EntityOptionExt};
