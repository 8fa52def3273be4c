//! Speech engine backends

pub mod native;
