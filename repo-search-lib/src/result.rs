use crate::error::SearchClientError;

pub type SearchClientResult<T> = std::result::Result<T, SearchClientError>;
