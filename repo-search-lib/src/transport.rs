use crate::logging_middleware::LoggingMiddleware;
use async_trait::async_trait;
use log::Level;
use reqwest::{Client, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

const USER_AGENT: &str = "repo-search";

/// The HTTP collaborator: one GET, the whole body back or the client's error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> Result<Vec<u8>, reqwest_middleware::Error>;
}

/// `Transport` over reqwest with request logging.
///
/// A non-2xx status is reported as an error even when the server sent a body.
pub struct HttpTransport {
    client: ClientWithMiddleware,
}

impl HttpTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self::with_client(client))
    }

    pub fn with_client(client: Client) -> Self {
        Self {
            client: ClientBuilder::new(client)
                .with(LoggingMiddleware::new(Level::Debug))
                .build(),
        }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> Result<Vec<u8>, reqwest_middleware::Error> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        Ok(response.bytes().await?.to_vec())
    }
}
