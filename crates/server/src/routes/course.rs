use crate::{
    dtos::{
        course::{CourseRequest, CourseViewModel},
        validation::ValidationErrorResponse,
    },
    error::{AppError, ErrorResponse},
    extract::{CourseId, Validated},
    state::AppState,
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::get,
};
use database::{entities::course, services::course::CourseService};
use log::info;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/courses", get(get_courses).post(create_course))
        .route(
            "/courses/{id}",
            get(get_course_by_id).put(update_course).delete(delete_course),
        )
}

/// Get every course
#[utoipa::path(
    get,
    path = "/courses",
    responses(
        (status = 200, description = "List of courses retrieved successfully", body = Vec<CourseViewModel>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseViewModel>>, AppError> {
    let courses = CourseService::find_all(&state.db).await?;

    Ok(Json(courses.into_iter().map(CourseViewModel::from).collect()))
}

/// Get a specific course by ID
#[utoipa::path(
    get,
    path = "/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseViewModel),
        (status = 400, description = "Course ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn get_course_by_id(
    State(state): State<AppState>,
    CourseId(id): CourseId,
) -> Result<Json<CourseViewModel>, AppError> {
    let course = CourseService::get_by_id(&state.db, id).await?;

    Ok(Json(course.into()))
}

/// Create a course
#[utoipa::path(
    post,
    path = "/courses",
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Course created", body = CourseViewModel),
        (status = 400, description = "Malformed request body", body = ErrorResponse),
        (status = 422, description = "One or more fields are invalid", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn create_course(
    State(state): State<AppState>,
    Validated(request): Validated<CourseRequest>,
) -> Result<(StatusCode, Json<CourseViewModel>), AppError> {
    let course = course::Model::try_from(request).map_err(AppError::Validation)?;
    let created = CourseService::create(&state.db, course).await?;
    info!("Created course {} ({})", created.id, created.title);

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// Replace every field of an existing course
#[utoipa::path(
    put,
    path = "/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Course updated", body = CourseViewModel),
        (status = 400, description = "Malformed request body or non-integer ID", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 422, description = "One or more fields are invalid", body = ValidationErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn update_course(
    State(state): State<AppState>,
    CourseId(id): CourseId,
    Validated(request): Validated<CourseRequest>,
) -> Result<Json<CourseViewModel>, AppError> {
    let course = course::Model {
        id,
        ..course::Model::try_from(request).map_err(AppError::Validation)?
    };
    let updated = CourseService::update(&state.db, course).await?;
    info!("Updated course {id}");

    Ok(Json(updated.into()))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/courses/{id}",
    params(
        ("id" = i32, Path, description = "Course ID")
    ),
    responses(
        (status = 204, description = "Course deleted"),
        (status = 400, description = "Course ID is not an integer", body = ErrorResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Courses"
)]
pub async fn delete_course(
    State(state): State<AppState>,
    CourseId(id): CourseId,
) -> Result<StatusCode, AppError> {
    CourseService::delete(&state.db, id).await?;
    info!("Deleted course {id}");

    Ok(StatusCode::NO_CONTENT)
}
