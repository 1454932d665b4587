use crate::{
    dtos::{
        course::{CourseRequest, CourseViewModel},
        validation::{FieldError, ValidationErrorResponse},
    },
    error::ErrorResponse,
    routes::{course, health},
};
use utoipa::OpenApi;

/// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        course::get_courses,
        course::get_course_by_id,
        course::create_course,
        course::update_course,
        course::delete_course
    ),
    components(schemas(
        CourseRequest,
        CourseViewModel,
        FieldError,
        ValidationErrorResponse,
        ErrorResponse
    )),
    tags(
        (name = "Health", description = "Service health"),
        (name = "Courses", description = "Course related endpoints"),
    ),
    info(
        title = "Course Management API",
        version = "1.0.0",
        description = "Create, list, edit and delete courses",
        license(
            name = "MIT OR Apache-2.0",
        )
    )
)]
pub struct ApiDoc;
