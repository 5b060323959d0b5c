// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Request generation counter.
//
// Requests cannot be aborted once sent. A view takes a ticket before each
// load and applies the result only while that ticket is still current; a
// route change or unmount bumps the generation and stale completions are
// dropped on the floor.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Cloneable handle; clones share one counter.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

/// Proof of which generation a request was issued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, invalidating every earlier ticket.
    pub fn begin(&self) -> Ticket {
        Ticket(self.current.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Invalidate outstanding tickets without issuing a new one.
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::AcqRel);
    }

    /// The ticket in force right now, without starting a new generation.
    pub fn current(&self) -> Ticket {
        Ticket(self.current.load(Ordering::Acquire))
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.current.load(Ordering::Acquire) == ticket.0
    }
}
