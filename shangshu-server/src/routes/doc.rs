use crate::routes::{api, health};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(info(
    title = "shangshu-server",
    description = "Shangshu Technology site API",
    version = "0.1.0",
    contact(name = "Shangshu Technology", url = "https://kingcpm.com")
))]
pub struct ApiDoc;

pub fn get_docs() -> utoipa::openapi::OpenApi {
    let mut root = ApiDoc::openapi();
    root.merge(health::HealthApi::openapi());
    root.merge(api::api_docs());
    root
}
