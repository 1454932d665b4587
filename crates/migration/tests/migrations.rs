use migration::{Migrator, MigratorTrait};
use sea_orm_migration::{
    prelude::*,
    sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection},
};

async fn connect() -> DatabaseConnection {
    // Every pooled connection to `:memory:` is its own database, so keep exactly one
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).sqlx_logging(false);

    Database::connect(options)
        .await
        .expect("Failed to open in-memory database")
}

async fn insert_course(db: &DatabaseConnection, title: &str) {
    let insert = Query::insert()
        .into_table(Alias::new("courses"))
        .columns([
            Alias::new("title"),
            Alias::new("topic"),
            Alias::new("release_date"),
        ])
        .values_panic([
            title.into(),
            "Rust Programming".into(),
            "2023-12-01".into(),
        ])
        .to_owned();

    let backend = db.get_database_backend();
    db.execute(backend.build(&insert)).await.unwrap();
}

async fn titles(db: &DatabaseConnection) -> Vec<String> {
    let select = Query::select()
        .column(Alias::new("title"))
        .from(Alias::new("courses"))
        .order_by(Alias::new("id"), Order::Asc)
        .to_owned();

    let backend = db.get_database_backend();
    db.query_all(backend.build(&select))
        .await
        .unwrap()
        .into_iter()
        .map(|row| row.try_get::<String>("", "title").unwrap())
        .collect()
}

#[tokio::test]
async fn test_fresh_database_has_author_column() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("courses").await.unwrap());
    assert!(manager.has_column("courses", "author").await.unwrap());
}

#[tokio::test]
async fn test_add_author_keeps_existing_rows_with_null_author() {
    let db = connect().await;
    Migrator::up(&db, Some(1)).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_column("courses", "author").await.unwrap());

    insert_course(&db, "Existing Course").await;
    Migrator::up(&db, Some(1)).await.unwrap();
    assert!(manager.has_column("courses", "author").await.unwrap());

    let select = Query::select()
        .column(Alias::new("author"))
        .from(Alias::new("courses"))
        .to_owned();
    let backend = db.get_database_backend();
    let row = db
        .query_one(backend.build(&select))
        .await
        .unwrap()
        .expect("Row should survive the migration");
    let author: Option<String> = row.try_get("", "author").unwrap();
    assert_eq!(author, None);
}

#[tokio::test]
async fn test_up_then_down_restores_columns_without_data_loss() {
    let db = connect().await;
    Migrator::up(&db, Some(1)).await.unwrap();
    insert_course(&db, "First").await;
    insert_course(&db, "Second").await;

    Migrator::up(&db, Some(1)).await.unwrap();
    Migrator::down(&db, Some(1)).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_column("courses", "author").await.unwrap());
    for column in ["id", "title", "topic", "release_date"] {
        assert!(manager.has_column("courses", column).await.unwrap());
    }
    assert_eq!(titles(&db).await, vec!["First", "Second"]);
}

#[tokio::test]
async fn test_full_rollback_drops_table() {
    let db = connect().await;
    Migrator::up(&db, None).await.unwrap();
    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(!manager.has_table("courses").await.unwrap());
}
