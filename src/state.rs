//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the one shared backend client and the repositories built on
//! it. Cloning is cheap: `reqwest::Client` is reference counted.

use crate::config::ServerConfig;
use crate::net::auth::AuthRepository;
use crate::net::client::ApiClient;
use crate::net::lessons::LessonRepository;

#[derive(Clone, Debug)]
pub struct AppState {
    pub api: ApiClient,
    pub lessons: LessonRepository,
    pub auth: AuthRepository,
    /// Whether the `token` cookie is marked `Secure`.
    pub cookie_secure: bool,
}

impl AppState {
    pub fn new(api: ApiClient, cookie_secure: bool) -> Self {
        Self {
            lessons: LessonRepository::new(api.clone()),
            auth: AuthRepository::new(api.clone()),
            api,
            cookie_secure,
        }
    }

    /// Build the state, including the shared client, from server config.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` build error if the client cannot be created.
    pub fn from_config(config: &ServerConfig) -> Result<Self, reqwest::Error> {
        Ok(Self::new(ApiClient::new(&config.api)?, config.cookie_secure))
    }
}
