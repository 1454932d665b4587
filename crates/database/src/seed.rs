use crate::{entities::course, services::course::CourseService};
use chrono::Local;
use log::{debug, info};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, TransactionTrait};

/// (title, topic, author) of the demonstration courses
pub const SEED_COURSES: [(&str, &str, &str); 5] = [
    ("ASP.NET Core MVC", ".NET Programming", "vnLab"),
    ("ASP.NET Core API", ".NET Programming", "vnLab"),
    ("Java Spring Boot", "Java Programming", "vnLab"),
    ("Laravel - The PHP Framework", "PHP Programming", "vnLab"),
    ("Angular Tutorial For Beginner", "Angular Programming", "vnLab"),
];

/// Populates an empty `courses` table with the demonstration courses
///
/// Does nothing if at least one course already exists. Every seeded course
/// is released today.
///
/// # Returns
/// * The number of inserted courses
pub async fn seed_courses(db: &DatabaseConnection) -> Result<u64, DbErr> {
    if CourseService::count(db).await? > 0 {
        debug!("Courses table already populated, skipping seed");
        return Ok(0);
    }

    let today = Local::now().date_naive();
    let rows = SEED_COURSES.iter().map(|(title, topic, author)| {
        CourseService::new_active_model(course::Model {
            id: 0,
            title: title.to_string(),
            topic: topic.to_string(),
            release_date: today,
            author: Some(author.to_string()),
        })
    });

    let txn = db.begin().await?;
    course::Entity::insert_many(rows).exec(&txn).await?;
    txn.commit().await?;

    info!("Seeded {} courses", SEED_COURSES.len());
    Ok(SEED_COURSES.len() as u64)
}
