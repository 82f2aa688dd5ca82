// src/translator.rs

//! # Command Translation Module
//!
//! This module provides the shared interface for PID-based command
//! translators along with the RC channel translator implementation.

pub mod command_translator;
pub use command_translator::*;
pub mod rc;
pub use rc::*;
