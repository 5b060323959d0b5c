// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Platform-aware data directory resolution.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "neighborhelp";

/// Return the application data directory, creating it if needed.
///
/// Holds `config.json` and `session.json`.
pub fn data_dir() -> PathBuf {
    let dir = app_dir(&base_dir(|key| std::env::var(key).ok()));
    if let Err(e) = std::fs::create_dir_all(&dir) {
        tracing::warn!(path = %dir.display(), error = %e, "could not create data directory");
    }
    dir
}

fn app_dir(base: &Path) -> PathBuf {
    base.join(APP_DIR)
}

/// XDG data dir, then `~/.local/share`, then `/tmp`.
fn base_dir(lookup: impl Fn(&str) -> Option<String>) -> PathBuf {
    if let Some(xdg) = lookup("XDG_DATA_HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(xdg);
    }
    if let Some(home) = lookup("HOME").filter(|v| !v.is_empty()) {
        return PathBuf::from(home).join(".local").join("share");
    }
    PathBuf::from("/tmp")
}
