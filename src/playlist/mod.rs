//! Playlist kind: a named list of dashboard references cycled on a timer.

pub(crate) mod dto;
pub(crate) mod model;
pub(crate) mod store;
