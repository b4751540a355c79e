use crate::error::SearchClientError;
use crate::object_model::RepositoryRecord;
use log::debug;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

/// Receives the outcome of each delivered search: exactly one call per search.
pub trait SearchListener: Send + Sync {
    fn on_results(&self, records: Vec<RepositoryRecord>);
    fn on_error(&self, error: SearchClientError);
}

#[derive(Debug)]
pub enum SearchEvent {
    Results(Vec<RepositoryRecord>),
    Error(SearchClientError),
}

/// Forwards outcomes to a single receiver, so whoever owns the receiver is
/// the only code that ever touches the state built from them.
pub struct ChannelListener {
    sender: UnboundedSender<SearchEvent>,
}

impl ChannelListener {
    pub fn new() -> (Self, UnboundedReceiver<SearchEvent>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }

    fn send(&self, event: SearchEvent) {
        if let Err(e) = self.sender.send(event) {
            debug!("search event dropped, receiver is gone: {:?}", e.0);
        }
    }
}

impl SearchListener for ChannelListener {
    fn on_results(&self, records: Vec<RepositoryRecord>) {
        self.send(SearchEvent::Results(records));
    }

    fn on_error(&self, error: SearchClientError) {
        self.send(SearchEvent::Error(error));
    }
}
