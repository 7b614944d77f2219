use crate::domain::skill::Skill;
use crate::transport::http::handlers::{health, skills};
use crate::transport::http::types::{
    CreateSkillRequest, ErrorMessage, GetSkillsResponse, HealthResponse,
};
use axum::routing::{delete, get};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        skills::get_skills_handler,
        skills::create_skill_handler,
        skills::delete_skill_handler
    ),
    components(schemas(
        Skill,
        CreateSkillRequest,
        GetSkillsResponse,
        ErrorMessage,
        HealthResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/skills",
            get(skills::get_skills_handler).post(skills::create_skill_handler),
        )
        .route("/skills/:skill_id", delete(skills::delete_skill_handler))
        .with_state(app_state)
}
