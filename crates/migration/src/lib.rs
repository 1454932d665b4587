pub use sea_orm_migration::prelude::*;

mod m20231201_000001_create_courses_table;
mod m20231213_154519_add_author_to_courses;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20231201_000001_create_courses_table::Migration),
            Box::new(m20231213_154519_add_author_to_courses::Migration),
        ]
    }
}
