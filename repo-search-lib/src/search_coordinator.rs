use crate::decoder::{DefaultResponseDecoder, ResponseDecoder};
use crate::error::SearchClientError;
use crate::listener::SearchListener;
use crate::object_model::RepositoryRecord;
use crate::result::SearchClientResult;
use crate::transport::Transport;
use log::{debug, warn};
use reqwest::Url;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::task::JoinHandle;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const SEARCH_PATH: &str = "/search/repositories?q=";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeliveryPolicy {
    /// Deliver every search in the order the searches complete.
    #[default]
    All,
    /// Drop a search's outcome if a newer search was started after it.
    LatestOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchState {
    Idle,
    InFlight,
}

pub struct SearchCoordinatorBuilder {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn ResponseDecoder>,
    listener: Option<Arc<dyn SearchListener>>,
    api_url: String,
    delivery_policy: DeliveryPolicy,
}

impl SearchCoordinatorBuilder {
    pub fn api_url(mut self, api_url: &str) -> Self {
        self.api_url = String::from(api_url.trim_end_matches('/'));
        self
    }

    pub fn decoder(mut self, decoder: Arc<dyn ResponseDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub fn listener(mut self, listener: Arc<dyn SearchListener>) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn delivery_policy(mut self, delivery_policy: DeliveryPolicy) -> Self {
        self.delivery_policy = delivery_policy;
        self
    }

    pub fn build(self) -> SearchCoordinator {
        SearchCoordinator {
            inner: Arc::new(Inner {
                transport: self.transport,
                decoder: self.decoder,
                listener: self.listener,
                api_url: self.api_url,
                delivery_policy: self.delivery_policy,
                generation: AtomicU64::new(0),
                in_flight: AtomicUsize::new(0),
            }),
        }
    }
}

/// Issues repository searches and reports each outcome to the listener.
///
/// The listener is fixed when the coordinator is built. Searches are not
/// serialized: each `search` call is an independent task.
#[derive(Clone)]
pub struct SearchCoordinator {
    inner: Arc<Inner>,
}

struct Inner {
    transport: Arc<dyn Transport>,
    decoder: Arc<dyn ResponseDecoder>,
    listener: Option<Arc<dyn SearchListener>>,
    api_url: String,
    delivery_policy: DeliveryPolicy,
    generation: AtomicU64,
    in_flight: AtomicUsize,
}

impl SearchCoordinator {
    pub fn builder(transport: Arc<dyn Transport>) -> SearchCoordinatorBuilder {
        SearchCoordinatorBuilder {
            transport,
            decoder: Arc::new(DefaultResponseDecoder),
            listener: None,
            api_url: String::from(DEFAULT_API_URL),
            delivery_policy: DeliveryPolicy::default(),
        }
    }

    /// Starts one search and delivers its outcome to the listener.
    ///
    /// `query` must already be URL-encoded; it is appended as-is.
    /// Must be called from within a tokio runtime.
    pub fn search(&self, query: &str) -> JoinHandle<()> {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let in_flight = InFlightGuard::new(Arc::clone(&self.inner));

        let inner = Arc::clone(&self.inner);
        let query = String::from(query);
        tokio::spawn(async move {
            // Released when the future is dropped, including on abort or panic.
            let _in_flight = in_flight;
            let outcome = inner.fetch(&query).await;
            inner.deliver(generation, outcome);
        })
    }

    /// Runs the same pipeline as `search` and returns the outcome directly.
    pub async fn fetch(&self, query: &str) -> SearchClientResult<Vec<RepositoryRecord>> {
        self.inner.fetch(query).await
    }

    pub fn search_url(&self, query: &str) -> SearchClientResult<Url> {
        self.inner.search_url(query)
    }

    pub fn state(&self) -> SearchState {
        if self.inner.in_flight.load(Ordering::SeqCst) == 0 {
            SearchState::Idle
        } else {
            SearchState::InFlight
        }
    }

    /// Generation of the most recently started search, 0 before the first.
    pub fn latest_generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.inner.transport
    }
}

struct InFlightGuard {
    inner: Arc<Inner>,
}

impl InFlightGuard {
    fn new(inner: Arc<Inner>) -> Self {
        inner.in_flight.fetch_add(1, Ordering::SeqCst);
        Self { inner }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.inner.in_flight.fetch_sub(1, Ordering::SeqCst);
    }
}

impl Inner {
    fn search_url(&self, query: &str) -> SearchClientResult<Url> {
        let url = format!("{}{}{}", self.api_url, SEARCH_PATH, query);
        Url::parse(&url).map_err(|source| SearchClientError::InvalidUrl { url, source })
    }

    async fn fetch(&self, query: &str) -> SearchClientResult<Vec<RepositoryRecord>> {
        let url = self.search_url(query)?;
        debug!("searching repositories at {}", url);

        let body = self.transport.get(url).await?;

        let records = self.decoder.decode(&body).map_err(|e| {
            warn!("could not decode search response for {:?}: {}", query, e);
            SearchClientError::Decode(e)
        })?;

        debug!("search for {:?} returned {} records", query, records.len());
        Ok(records)
    }

    fn deliver(&self, generation: u64, outcome: SearchClientResult<Vec<RepositoryRecord>>) {
        if self.delivery_policy == DeliveryPolicy::LatestOnly {
            let latest = self.generation.load(Ordering::SeqCst);
            if generation < latest {
                debug!(
                    "dropping outcome of search {} superseded by search {}",
                    generation, latest
                );
                return;
            }
        }

        let Some(listener) = self.listener.as_ref() else {
            debug!("no listener registered, dropping outcome of search {}", generation);
            return
        };

        match outcome {
            Ok(records) => listener.on_results(records),
            Err(e) => listener.on_error(e),
        }
    }
}
