use reqwest::blocking::Client;
use reqwest::redirect;

use crate::error::{Result, ScrapeError};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.3";

/// Blocking HTTP client restricted to a single allowed domain. Redirects
/// leaving that domain are stopped rather than followed.
pub struct Collector {
    allowed_domain: String,
    client: Client,
}

impl Collector {
    pub fn new(allowed_domain: &str) -> Result<Self> {
        let domain = allowed_domain.to_string();
        let redirect_domain = domain.clone();
        let redirect_policy = redirect::Policy::custom(move |attempt| {
            if attempt.previous().len() > 10 {
                attempt.error("too many redirects (>10)")
            } else if attempt.url().host_str() != Some(redirect_domain.as_str()) {
                attempt.stop()
            } else {
                attempt.follow()
            }
        });

        let client = Client::builder()
            .redirect(redirect_policy)
            .build()?;

        Ok(Self { allowed_domain: domain, client })
    }

    /// Performs one GET against `url` and returns the response body.
    /// The URL host must match the allowed domain; a non-2xx status is an
    /// error, matching what the response logger reports.
    pub fn visit(&self, url: &str) -> Result<String> {
        let host = reqwest::Url::parse(url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));
        if host.as_deref() != Some(self.allowed_domain.as_str()) {
            return Err(ScrapeError::DisallowedDomain {
                url: url.to_string(),
                domain: self.allowed_domain.clone(),
            });
        }

        tracing::info!("Visiting {}", url);

        let response = self.client
            .get(url)
            .header("User-Agent", USER_AGENT)
            .send()?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::BadStatus { url: url.to_string(), status });
        }
        tracing::info!("Received response with status code: {}", status.as_u16());

        Ok(response.text()?)
    }
}
