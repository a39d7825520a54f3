//! Command implementations for the refalign CLI

pub mod align;
pub mod config;
pub mod score;
pub mod validate;
