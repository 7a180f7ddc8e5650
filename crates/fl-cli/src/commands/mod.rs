//! CLI command implementations.

pub mod keygen;
pub mod prove;
pub mod verify;
