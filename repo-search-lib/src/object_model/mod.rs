mod owner;
mod repository_record;
mod search_response;

pub use self::repository_record::{RepositoryRecord, UNKNOWN_LANGUAGE};

pub(crate) use self::search_response::{Item, SearchResponse};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts any JSON value and keeps it only if it has the expected type.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).ok())
}
