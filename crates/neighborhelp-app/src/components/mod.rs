// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Components shared between pages.

pub mod add_service_modal;
pub mod header;
pub mod notice;
pub mod service_card;
