use crate::error::DecodeError;
use crate::object_model::{Item, RepositoryRecord, SearchResponse};

/// Turns a raw search response body into records.
pub trait ResponseDecoder: Send + Sync {
    fn decode(&self, body: &[u8]) -> Result<Vec<RepositoryRecord>, DecodeError>;
}

/// Decoder for the GitHub `search/repositories` payload.
///
/// Only the top-level shape is strict: a missing or mistyped field inside an
/// item falls back to its default instead of failing the whole response.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultResponseDecoder;

impl ResponseDecoder for DefaultResponseDecoder {
    fn decode(&self, body: &[u8]) -> Result<Vec<RepositoryRecord>, DecodeError> {
        Ok(SearchResponse::from_slice(body)?
            .items
            .into_iter()
            .map(|value| RepositoryRecord::from(Item::from_value(value)))
            .collect())
    }
}
