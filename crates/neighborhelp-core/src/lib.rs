// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// NeighborHelp — Core types, forms, and error definitions shared across all crates.

pub mod config;
pub mod display;
pub mod error;
pub mod forms;
pub mod generation;
pub mod human_errors;
pub mod load_state;
pub mod types;
pub mod validation;

pub use config::AppConfig;
pub use error::NeighborHelpError;
pub use generation::{RequestGeneration, Ticket};
pub use load_state::LoadState;
pub use types::*;
