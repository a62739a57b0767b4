//! Browser-side helpers

pub mod constants;
