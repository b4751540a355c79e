mod avatar;
mod decoder;
mod error;
mod listener;
mod logging_middleware;
mod object_model;
mod result;
mod search_coordinator;
mod transport;

pub use self::avatar::fetch_avatar;
pub use self::decoder::{DefaultResponseDecoder, ResponseDecoder};
pub use self::error::{DecodeError, SearchClientError};
pub use self::listener::{ChannelListener, SearchEvent, SearchListener};
pub use self::logging_middleware::LoggingMiddleware;
pub use self::object_model::{RepositoryRecord, UNKNOWN_LANGUAGE};
pub use self::result::SearchClientResult;
pub use self::search_coordinator::{
    DeliveryPolicy, SearchCoordinator, SearchCoordinatorBuilder, SearchState, DEFAULT_API_URL,
};
pub use self::transport::{HttpTransport, Transport};
