//! FieldLedger CLI library components.
//!
//! This library exposes the command implementations for testing purposes.

pub mod commands;
