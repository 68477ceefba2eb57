//! Client credential models and secret sources.

pub mod reader;
pub mod secret;

pub use reader::*;
pub use secret::*;
