// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Page components — one per route.

pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod service_profile;
