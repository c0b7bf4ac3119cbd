//! Command implementations for the mocap-rs CLI

pub mod convert;
pub mod info;
pub mod play;
pub mod validate;
