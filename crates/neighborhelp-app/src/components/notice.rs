// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dioxus::prelude::*;
use neighborhelp_core::human_errors::Notice;

/// Inline success/error line under a form.
#[component]
pub fn NoticeLine(notice: Option<Notice>) -> Element {
    let Some(notice) = notice else {
        return rsx! {};
    };
    let role = if notice.is_success() { "status" } else { "alert" };
    rsx! {
        p { role,
            style: "color: {notice.colour()}; font-size: 14px; text-align: center; margin: 8px 0;",
            "{notice.text}"
        }
    }
}
