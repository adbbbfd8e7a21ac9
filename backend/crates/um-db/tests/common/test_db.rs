use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    // In-memory databases live as long as their single connection
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect(":memory:")
        .await
        .expect("Failed to create test pool");

    um_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Makes every insert or update of `username` fail inside SQLite
pub async fn block_username(pool: &SqlitePool, username: &str) {
    for (name, event) in [("block_insert", "INSERT"), ("block_update", "UPDATE")] {
        let sql = format!(
            "CREATE TRIGGER {name} BEFORE {event} ON users \
             WHEN NEW.username = '{username}' \
             BEGIN SELECT RAISE(ABORT, 'blocked user'); END;"
        );
        sqlx::query(&sql)
            .execute(pool)
            .await
            .expect("Failed to create trigger");
    }
}
