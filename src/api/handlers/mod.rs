//! HTTP endpoint handlers organized by resource.

pub mod assets;
pub mod flashlight;
pub mod system;
