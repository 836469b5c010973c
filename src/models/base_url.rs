use std::future::{Ready, ready};

use actix_web::error::{ErrorBadRequest, ErrorInternalServerError};
use actix_web::{Error, FromRequest, HttpRequest, dev::Payload, web::Data};

use crate::domain::BaseUrl;
use crate::models::config::ServerConfig;

/// Base URL for building absolute links in the current request.
///
/// Taken from `GPODDER_BASE_URL` when configured, otherwise guessed from
/// the scheme and host the client used to reach us.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestBaseUrl(BaseUrl);

impl RequestBaseUrl {
    pub fn as_base_url(&self) -> &BaseUrl {
        &self.0
    }

    pub fn into_inner(self) -> BaseUrl {
        self.0
    }

    fn guess(req: &HttpRequest) -> Option<BaseUrl> {
        let info = req.connection_info();
        let candidate = format!("{}://{}/", info.scheme(), info.host());
        let base_url = BaseUrl::try_from_str(&candidate).ok()?;

        // The host header must name a host (and port) only.
        let url = base_url.as_url();
        if url.path() != "/" || !url.username().is_empty() || url.password().is_some() {
            return None;
        }
        Some(base_url)
    }
}

impl FromRequest for RequestBaseUrl {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let server_config = match req.app_data::<Data<ServerConfig>>() {
            Some(config) => config,
            None => return ready(Err(ErrorInternalServerError("Server config not found"))),
        };

        if let Some(base_url) = server_config.base_url() {
            return ready(Ok(Self(base_url.clone())));
        }

        match Self::guess(req) {
            Some(base_url) => ready(Ok(Self(base_url))),
            None => {
                log::warn!("Cannot guess base url for host {}", req.connection_info().host());
                ready(Err(ErrorBadRequest("Invalid host")))
            }
        }
    }
}
