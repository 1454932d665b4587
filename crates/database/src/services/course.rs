use crate::{entities::course, error::ServiceError};
use log::debug;
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Set},
    DatabaseConnection, DbErr, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder,
};

pub struct CourseService;

impl CourseService {
    /// Get every course, ordered by id
    pub async fn find_all(db: &DatabaseConnection) -> Result<Vec<course::Model>, DbErr> {
        course::Entity::find()
            .order_by_asc(course::Column::Id)
            .all(db)
            .await
    }

    /// Get a course by id, if it exists
    pub async fn find_by_id(
        db: &DatabaseConnection,
        id: i32,
    ) -> Result<Option<course::Model>, DbErr> {
        course::Entity::find_by_id(id).one(db).await
    }

    /// Get a course by id, failing with `NotFound` if there is no such row
    pub async fn get_by_id(db: &DatabaseConnection, id: i32) -> Result<course::Model, ServiceError> {
        Self::find_by_id(db, id)
            .await?
            .ok_or(ServiceError::NotFound(id))
    }

    /// Count all courses
    pub async fn count(db: &DatabaseConnection) -> Result<u64, DbErr> {
        course::Entity::find().count(db).await
    }

    /// Insert a new course and return it with its generated id
    ///
    /// The `id` of the given model is ignored.
    pub async fn create(
        db: &DatabaseConnection,
        course: course::Model,
    ) -> Result<course::Model, DbErr> {
        let created = Self::new_active_model(course).insert(db).await?;
        debug!("Created course {}", created.id);

        Ok(created)
    }

    /// Overwrite every field of the course identified by `course.id`
    pub async fn update(
        db: &DatabaseConnection,
        course: course::Model,
    ) -> Result<course::Model, ServiceError> {
        let id = course.id;
        let existing = Self::get_by_id(db, id).await?;

        let mut active = existing.into_active_model();
        active.title = Set(course.title);
        active.topic = Set(course.topic);
        active.release_date = Set(course.release_date);
        active.author = Set(course.author);

        let updated = active
            .update(db)
            .await
            .map_err(|e| ServiceError::from_update(id, e))?;
        debug!("Updated course {}", updated.id);

        Ok(updated)
    }

    /// Delete the course with the given id
    pub async fn delete(db: &DatabaseConnection, id: i32) -> Result<(), ServiceError> {
        let result = course::Entity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(ServiceError::NotFound(id));
        }

        debug!("Deleted course {id}");
        Ok(())
    }

    /// Build an insertable active model, leaving the id for the store to generate
    pub(crate) fn new_active_model(course: course::Model) -> course::ActiveModel {
        course::ActiveModel {
            id: NotSet,
            title: Set(course.title),
            topic: Set(course.topic),
            release_date: Set(course.release_date),
            author: Set(course.author),
        }
    }
}
