use std::time::Duration;

use crate::site::Site;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);
/// Pause between chapter requests.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    pub site: Site,
    /// Per-request timeout, covering connect and body.
    pub timeout: Duration,
    pub delay: Duration,
    pub user_agent: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            site: Site::royal_road(),
            timeout: DEFAULT_TIMEOUT,
            delay: DEFAULT_DELAY,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl CrawlerConfig {
    pub fn with_site(mut self, site: Site) -> Self {
        self.site = site;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
