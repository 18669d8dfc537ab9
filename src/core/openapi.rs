use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::features::threads::{dtos as threads_dtos, handlers as threads_handlers};
use crate::features::users::dtos as users_dtos;
use crate::shared::types::ApiResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        threads_handlers::create_thread,
        threads_handlers::list_threads,
        threads_handlers::get_thread,
        threads_handlers::update_thread,
        threads_handlers::delete_thread,
    ),
    components(
        schemas(
            users_dtos::UserSummaryDto,
            threads_dtos::CreateThreadDto,
            threads_dtos::UpdateThreadDto,
            threads_dtos::LikeResponseDto,
            threads_dtos::ReplyResponseDto,
            threads_dtos::ThreadResponseDto,
            threads_dtos::ThreadDetailResponseDto,
            ApiResponse<Vec<threads_dtos::ThreadResponseDto>>,
            ApiResponse<threads_dtos::ThreadDetailResponseDto>,
        )
    ),
    tags(
        (name = "threads", description = "Threads with likes and replies"),
    ),
    modifiers(&SecurityAddon),
    info(
        title = "Threads API",
        version = "0.1.0",
        description = "API documentation for Threads",
    )
)]
pub struct ApiDoc;

/// Adds Bearer JWT security scheme to OpenAPI spec
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
