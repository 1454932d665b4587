//! Field-for-field conversions between the course entity and its DTOs

use crate::dtos::{
    course::{CourseRequest, CourseViewModel},
    validation::{CheckFields, FieldError},
};
use database::entities::course;

impl From<course::Model> for CourseViewModel {
    fn from(course: course::Model) -> Self {
        Self {
            id: course.id,
            title: course.title,
            topic: course.topic,
            release_date: course.release_date,
            author: course.author,
        }
    }
}

impl From<CourseViewModel> for course::Model {
    fn from(view: CourseViewModel) -> Self {
        Self {
            id: view.id,
            title: view.title,
            topic: view.topic,
            release_date: view.release_date,
            author: view.author,
        }
    }
}

/// Runs the request's field rules first, so an invalid request never becomes a model.
/// The id is left at 0; set it before updating an existing course.
impl TryFrom<CourseRequest> for course::Model {
    type Error = Vec<FieldError>;

    fn try_from(request: CourseRequest) -> Result<Self, Self::Error> {
        request.check()?;

        let release_date = request.release_date();
        // Present whenever `check` passes
        let (Some(title), Some(topic), Some(release_date)) =
            (request.title, request.topic, release_date)
        else {
            return Err(Vec::new());
        };

        Ok(Self {
            id: 0,
            title,
            topic,
            release_date,
            author: request.author,
        })
    }
}
