use crate::object_model::RepositoryRecord;
use crate::transport::Transport;
use log::debug;
use reqwest::Url;

/// Downloads the owner avatar of `record`, or `None` if that is not possible.
///
/// Best effort: no cache, no retry, and failures are only logged.
pub async fn fetch_avatar(transport: &dyn Transport, record: &RepositoryRecord) -> Option<Vec<u8>> {
    if record.avatar_url().is_empty() {
        return None;
    }

    let url = match Url::parse(record.avatar_url()) {
        Ok(url) => url,
        Err(e) => {
            debug!("skipping avatar {:?}: {}", record.avatar_url(), e);
            return None;
        }
    };

    match transport.get(url).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            debug!("could not fetch avatar {}: {}", record.avatar_url(), e);
            None
        }
    }
}
