use crate::url::DEFAULT_BASE_URL;

/// Transport configuration for comic API requests.
#[derive(Debug, Clone)]
pub struct ComicApiConfig {
    /// Base URL that `info.0.json` endpoints are resolved against.
    pub base_url: String,
    /// Optional `User-Agent` override.
    pub user_agent: Option<String>,
    /// Ignore `HTTP_PROXY`/`HTTPS_PROXY` from the environment.
    pub no_proxy: bool,
}

impl Default for ComicApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: None,
            no_proxy: false,
        }
    }
}

impl ComicApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn without_proxy(mut self) -> Self {
        self.no_proxy = true;
        self
    }
}
