use kong_types::list::ListOpt;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error};

use super::{
    consumer_group_consumers::ConsumerGroupConsumerService,
    consumer_groups::ConsumerGroupService, endpoint::Endpoint, error::Error, response::RawPage,
};

/// Configuration for the client.
/// base_url: Admin API address. (default: http://localhost:8001)
/// workspace: Workspace to scope every request to. (default: none)
/// admin_token: Sent as `Kong-Admin-Token` when set. (default: none)
/// timeout_secs: Per-request timeout. (default: 60)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub base_url: Option<String>,
    pub workspace: Option<String>,
    pub admin_token: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    const DEFAULT_BASE_URL: &'static str = "http://localhost:8001";
    const DEFAULT_TIMEOUT_SECS: u64 = 60;

    const ENV_BASE_URL: &'static str = "KONG_ADMIN_URL";
    const ENV_WORKSPACE: &'static str = "KONG_WORKSPACE";
    const ENV_ADMIN_TOKEN: &'static str = "KONG_ADMIN_TOKEN";

    pub fn new(
        base_url: Option<String>,
        workspace: Option<String>,
        admin_token: Option<String>,
    ) -> Self {
        Config {
            base_url,
            workspace,
            admin_token,
            timeout_secs: None,
        }
    }

    /// Reads `KONG_ADMIN_URL`, `KONG_WORKSPACE` and `KONG_ADMIN_TOKEN`.
    /// Unset or empty variables fall back to the defaults.
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).ok().filter(|v| !v.is_empty());
        Self::new(
            var(Self::ENV_BASE_URL),
            var(Self::ENV_WORKSPACE),
            var(Self::ENV_ADMIN_TOKEN),
        )
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(Self::DEFAULT_BASE_URL)
    }

    pub fn workspace(&self) -> Option<&str> {
        self.workspace.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS))
    }
}

/// A client for the Kong Admin API.
///
/// Requests are sent as-is: transport and API errors are returned to the
/// caller without retrying, and no responses are cached.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    const ADMIN_TOKEN_HEADER: &'static str = "Kong-Admin-Token";

    pub fn new(cfg: Option<Config>) -> Result<Self, Error> {
        let cfg = cfg.unwrap_or_default();
        let http = reqwest::Client::builder().timeout(cfg.timeout()).build()?;
        Ok(Self { cfg, http })
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn consumer_groups(&self) -> ConsumerGroupService<'_> {
        ConsumerGroupService::new(self)
    }

    pub fn consumer_group_consumers(&self) -> ConsumerGroupConsumerService<'_> {
        ConsumerGroupConsumerService::new(self)
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        endpoint.url(self.cfg.base_url(), self.cfg.workspace())
    }

    pub fn new_request(&self, method: Method, endpoint: &Endpoint) -> RequestBuilder {
        let url = self.url(endpoint);
        debug!("Sending {} request to {}", method, url);
        let request = self.http.request(method, url);
        match self.cfg.admin_token.as_deref() {
            Some(token) => request.header(Self::ADMIN_TOKEN_HEADER, token),
            None => request,
        }
    }

    /// Sends the request and decodes the JSON body of a successful response.
    pub async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let resp = self.send(request).await?;
        let body = resp.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Sends the request and discards the body of a successful response.
    pub async fn execute_empty(&self, request: RequestBuilder) -> Result<(), Error> {
        self.send(request).await.map(|_| ())
    }

    async fn send(&self, request: RequestBuilder) -> Result<reqwest::Response, Error> {
        self.handle_response(request.send().await?).await
    }

    async fn handle_response(&self, resp: reqwest::Response) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        if status.is_success() {
            debug!("request: {} status: {}", resp.url(), status);
            return Ok(resp);
        }
        let url = resp.url().clone();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("request {} status: {}, failed to read body: {}", url, status, e);
                String::new()
            }
        };
        error!("request {} status: {}", url, status);
        Err(Error::api(status.as_u16(), &body))
    }

    /// Fetches one page of `endpoint`. The returned options point at the next
    /// page and keep the caller's size and tag filter; `None` means this was
    /// the last page.
    pub async fn list<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        opt: Option<&ListOpt>,
    ) -> Result<(Vec<T>, Option<ListOpt>), Error> {
        let query = opt.map(ListOpt::query).unwrap_or_default();
        let request = self.new_request(Method::GET, endpoint).query(&query);
        let page: RawPage = self.execute(request).await?;
        let next = page.next_opt(opt)?;
        Ok((page.items()?, next))
    }
}
