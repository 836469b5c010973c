use actix_web::{HttpResponse, Responder, get, web};

use crate::dto::ServerInfoDto;
use crate::models::base_url::RequestBaseUrl;
use crate::models::config::ServerConfig;

#[get("/")]
pub async fn index(
    base_url: RequestBaseUrl,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    log::debug!("Serving server info for {}", base_url.as_base_url());
    HttpResponse::Ok().json(ServerInfoDto::new(base_url.as_base_url(), &server_config))
}
