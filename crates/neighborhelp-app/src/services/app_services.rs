// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads configuration, opens the persisted session,
// and builds the HTTP client. Pages reach it through
// `use_context::<AppServices>()` and hand its pieces to the client flows.

use std::path::{Path, PathBuf};

use neighborhelp_client::HttpApi;
use neighborhelp_core::AppConfig;
use neighborhelp_core::error::{NeighborHelpError, Result};
use neighborhelp_session::{FileBackend, SessionStore};
use tracing::{info, warn};

use super::data_dir;

pub const CONFIG_FILE: &str = "config.json";
pub const SESSION_FILE: &str = "session.json";

/// Shared application services.
///
/// Every field is cheap to clone, so handlers can move a copy into
/// `spawn(async move { .. })` without lifetime trouble.
#[derive(Clone)]
pub struct AppServices {
    api: HttpApi,
    session: SessionStore,
    config: AppConfig,
}

impl AppServices {
    /// Initialise from the platform data directory. Call once at startup.
    pub fn init() -> Result<Self> {
        let dir = data_dir::data_dir();
        info!(path = %dir.display(), "initialising app services");
        let config = load_or_create_config(&dir)?.with_env_overrides();
        Self::build(&dir, config)
    }

    /// Open the session file in `dir` and build a client for `config`.
    ///
    /// Falls back to an in-memory session when `dir` is missing.
    pub fn build(dir: &Path, config: AppConfig) -> Result<Self> {
        let api = HttpApi::new(&config)?;
        let session = if dir.is_dir() {
            SessionStore::open(FileBackend::new(dir.join(SESSION_FILE)))
        } else {
            warn!(path = %dir.display(), "data directory unusable, session will not persist");
            SessionStore::in_memory()
        };
        info!(
            api = %api.base_url(),
            signed_in = session.is_authenticated(),
            "app services initialised"
        );
        Ok(Self {
            api,
            session,
            config,
        })
    }

    pub fn api(&self) -> &HttpApi {
        &self.api
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

/// Where the configuration file lives for a given data directory.
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join(CONFIG_FILE)
}

/// Read `config.json`, writing the defaults on first run so there is a file
/// to edit. A file that exists but does not parse is an error, never
/// silently replaced.
fn load_or_create_config(data_dir: &Path) -> Result<AppConfig> {
    let path = config_path(data_dir);
    match std::fs::read_to_string(&path) {
        Ok(data) => serde_json::from_str(&data).map_err(|e| {
            NeighborHelpError::Config(format!("{} is not valid: {e}", path.display()))
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let config = AppConfig::default();
            if let Err(e) = persist_config(data_dir, &config) {
                warn!(path = %path.display(), error = %e, "could not write default config");
            }
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(config_path(data_dir), json)?;
    Ok(())
}
