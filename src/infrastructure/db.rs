use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    // Run migrations manually (simple SQL)
    run_migrations(&db).await?;

    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    // Cascades below only fire with enforcement on
    db.execute(Statement::from_string(
        db.get_database_backend(),
        "PRAGMA foreign_keys = ON".to_owned(),
    ))
    .await?;

    // Create heroes table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS heroes (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            super_name TEXT NOT NULL
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create powers table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS powers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL CHECK (name <> ''),
            description TEXT NOT NULL CHECK (length(description) >= 20)
        )
        "#
        .to_owned(),
    ))
    .await?;

    // Create hero_powers association table
    db.execute(Statement::from_string(
        db.get_database_backend(),
        r#"
        CREATE TABLE IF NOT EXISTS hero_powers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            strength TEXT NOT NULL CHECK (strength IN ('Strong', 'Weak', 'Average')),
            hero_id INTEGER NOT NULL,
            power_id INTEGER NOT NULL,
            CONSTRAINT fk_hero_powers_hero_id_heroes
                FOREIGN KEY (hero_id) REFERENCES heroes(id) ON DELETE CASCADE,
            CONSTRAINT fk_hero_powers_power_id_powers
                FOREIGN KEY (power_id) REFERENCES powers(id) ON DELETE CASCADE
        )
        "#
        .to_owned(),
    ))
    .await?;

    tracing::debug!("Schema migrations applied");

    Ok(())
}
