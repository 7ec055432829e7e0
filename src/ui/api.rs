//! Shared API and auth clients for the component tree

use leptos::logging::warn;
use leptos::prelude::*;
use std::sync::Arc;

use super::storage::LocalStoragePersistence;
use super::transport::GlooTransport;
use crate::core::api_client::ApiClient;
use crate::core::auth_client::HostedAuth;
use crate::core::config::ClientConfig;

pub type BrowserAuth = HostedAuth<GlooTransport, LocalStoragePersistence>;
pub type BrowserApi = ApiClient<Arc<BrowserAuth>, GlooTransport>;

/// Clients shared through context
#[derive(Clone)]
pub struct Services {
    pub config: ClientConfig,
    pub auth: Arc<BrowserAuth>,
    pub api: Arc<BrowserApi>,
}

impl Services {
    pub fn new(config: ClientConfig) -> Self {
        if !config.has_auth_provider() {
            warn!("ZPLUSE_AUTH_URL is not set; sign-in will fail");
        }
        let auth = Arc::new(HostedAuth::new(
            &config.auth_url,
            config.auth_anon_key.clone(),
            GlooTransport,
            LocalStoragePersistence,
        ));
        let api = Arc::new(ApiClient::new(config.api_url.clone(), auth.clone(), GlooTransport));
        Self { config, auth, api }
    }
}

pub fn provide_services(config: ClientConfig) -> Services {
    let services = Services::new(config);
    provide_context(services.clone());
    services
}

pub fn use_services() -> Services {
    expect_context::<Services>()
}

/// Shorthand for the API client
pub fn use_api() -> Arc<BrowserApi> {
    use_services().api
}
