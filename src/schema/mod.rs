//! Boundary schema validation and version stamps.

pub(crate) mod validate;
pub(crate) mod version;
