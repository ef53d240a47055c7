// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — picks the backend, loads config and session, and
// hands the collaborators to the Dioxus pages.
//
// With an API URL configured the product and cart services are the HTTP
// backend; without one the app serves the in-memory house menu.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use comanda_client::{
    CartService, HttpBackend, MemoryBackend, ProductService, Session, SessionProvider,
    StaticSession,
};
use comanda_core::AppConfig;
use comanda_core::error::Result;
use tracing::{info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";
const SESSION_FILE: &str = "session.json";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are Arc-wrapped so the struct can be cloned into closures and
/// async blocks.
#[derive(Clone)]
pub struct AppServices {
    products: Arc<dyn ProductService>,
    cart: Arc<dyn CartService>,
    session: Arc<StaticSession>,
    config: Arc<AppConfig>,
    data_dir: PathBuf,
    online: bool,
}

impl AppServices {
    /// Initialise all services from the default data directory.
    pub fn init() -> Result<Self> {
        Self::init_in(&data_dir::data_dir())
    }

    /// Initialise from an explicit data directory.
    ///
    /// Writes a default `config.json` on first run so there is a file to edit.
    pub fn init_in(dir: &Path) -> Result<Self> {
        info!(path = %dir.display(), "initialising app services");

        let config = match load_config(dir) {
            Some(c) => c,
            None => {
                let defaults = AppConfig::default();
                if let Err(e) = persist_config(dir, &defaults) {
                    warn!(error = %e, "could not write default config");
                }
                defaults
            }
        }
        .with_env_overrides();
        config.validate()?;

        let session = StaticSession::new(load_session(dir));
        if session.current_user_id().is_none() {
            info!("no signed-in user; cart actions will ask to sign in");
        }

        let (products, cart, online) =
            match config.api_base_url {
                Some(ref url) => {
                    let http = Arc::new(HttpBackend::new(
                        url,
                        Duration::from_secs(config.request_timeout_secs),
                        session.token().map(str::to_owned),
                    )?);
                    info!(base = %url, "using restaurant API");
                    (
                        http.clone() as Arc<dyn ProductService>,
                        http as Arc<dyn CartService>,
                        true,
                    )
                }
                None => {
                    let memory = Arc::new(MemoryBackend::with_house_menu());
                    info!("no API configured; serving the house menu offline");
                    (
                        memory.clone() as Arc<dyn ProductService>,
                        memory as Arc<dyn CartService>,
                        false,
                    )
                }
            };

        Ok(Self {
            products,
            cart,
            session: Arc::new(session),
            config: Arc::new(config),
            data_dir: dir.to_path_buf(),
            online,
        })
    }

    /// Offline services with default settings. Cannot fail.
    pub fn fallback() -> Self {
        let memory = Arc::new(MemoryBackend::with_house_menu());
        Self {
            products: memory.clone(),
            cart: memory,
            session: Arc::new(StaticSession::signed_out()),
            config: Arc::new(AppConfig::default()),
            data_dir: PathBuf::from("/tmp"),
            online: false,
        }
    }

    pub fn products(&self) -> &dyn ProductService {
        self.products.as_ref()
    }

    pub fn cart(&self) -> &dyn CartService {
        self.cart.as_ref()
    }

    pub fn session(&self) -> &dyn SessionProvider {
        self.session.as_ref()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Whether the services talk to a real API.
    pub fn is_online(&self) -> bool {
        self.online
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_secs(self.config.toast_duration_secs)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

// -- File persistence --------------------------------------------------------

fn load_config(data_dir: &Path) -> Option<AppConfig> {
    let path = data_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable config");
            None
        }
    }
}

fn persist_config(data_dir: &Path, config: &AppConfig) -> Result<()> {
    let path = data_dir.join(CONFIG_FILE);
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(&path, json)?;
    Ok(())
}

/// The auth flow drops the signed-in user here.
fn load_session(data_dir: &Path) -> Option<Session> {
    let path = data_dir.join(SESSION_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(session) => Some(session),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring unreadable session");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use comanda_core::ComandaError;

    #[test]
    fn first_run_writes_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let svc = AppServices::init_in(dir.path()).expect("init");

        assert!(svc.session().current_user_id().is_none());
        assert!(dir.path().join(CONFIG_FILE).exists());

        let written = load_config(dir.path()).expect("config written");
        assert_eq!(written, AppConfig::default());
    }

    #[test]
    fn configured_url_goes_online() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "api_base_url": "http://localhost:3000/api", "request_timeout_secs": 3 }"#,
        )
        .expect("write config");

        let svc = AppServices::init_in(dir.path()).expect("init");
        assert!(svc.is_online());
        assert_eq!(svc.config().request_timeout_secs, 3);
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            r#"{ "request_timeout_secs": 0 }"#,
        )
        .expect("write config");

        let err = AppServices::init_in(dir.path()).err().expect("should fail");
        assert!(matches!(err, ComandaError::InvalidConfig(_)));
    }

    #[test]
    fn session_file_signs_user_in() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            dir.path().join(SESSION_FILE),
            r#"{ "user_id": "u-7", "token": "abc" }"#,
        )
        .expect("write session");

        let svc = AppServices::init_in(dir.path()).expect("init");
        let user = svc.session().current_user_id().expect("signed in");
        assert_eq!(user.0, "u-7");
    }

    #[test]
    fn corrupt_session_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(dir.path().join(SESSION_FILE), "not json").expect("write session");
        assert!(load_session(dir.path()).is_none());
    }

    #[test]
    fn fallback_is_offline_and_signed_out() {
        let svc = AppServices::fallback();
        assert!(!svc.is_online());
        assert!(svc.session().current_user_id().is_none());
        assert_eq!(svc.toast_duration(), Duration::from_secs(4));
    }
}
