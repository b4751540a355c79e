use http::Extensions;
use log::{log, Level};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};

/// Logs every request and its outcome at a fixed level.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new(level: Level) -> Self {
        Self { level }
    }
}

#[async_trait::async_trait]
impl Middleware for LoggingMiddleware {
    async fn handle(
        &self,
        request: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = request.method().clone();
        let url = request.url().clone();
        log!(self.level, "begin request {} {}", method, url);
        let result = next.run(request, extensions).await;
        match result.as_ref() {
            Ok(response) => {
                log!(
                    self.level,
                    "received response {} for {} {}",
                    response.status(),
                    method,
                    url
                );
            }
            Err(e) => {
                log!(self.level, "request {} {} failed {:?}", method, url, e);
            }
        }
        result
    }
}
