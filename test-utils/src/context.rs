use sea_orm::{
    sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection,
};
use std::sync::Arc;
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Holds the database connection and session a single test runs against.
///
/// Each context owns its own in-memory SQLite instance, so tests never see
/// each other's rows. The connection and the session are both created on
/// first use and live as long as the context does.
pub struct TestContext {
    /// Connection to the per-test SQLite database, opened on first access
    /// through `database()`.
    pub db: Option<DatabaseConnection>,

    /// Session backed by the same SQLite database, opened on first access
    /// through `session()`.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a context with nothing initialized yet.
    ///
    /// # Returns
    /// - New `TestContext` instance with no database connection
    pub fn new() -> Self {
        Self {
            db: None,
            session: None,
        }
    }

    /// Returns the test database, opening the in-memory SQLite connection
    /// on the first call.
    ///
    /// # Returns
    /// - `Ok(&DatabaseConnection)` - Reference to the database connection
    /// - `Err(TestError::Database)` - Opening the connection failed
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        match self.db {
            Some(ref db) => Ok(db),
            None => {
                let db = Database::connect("sqlite::memory:").await?;

                Ok(&*self.db.insert(db))
            }
        }
    }

    /// Applies the given CREATE TABLE statements to the test database.
    ///
    /// Called by `TestBuilder::build()` with the schemas derived from the
    /// entity definitions; tests rarely need to call it themselves.
    ///
    /// # Arguments
    /// - `stmts` - CREATE TABLE statements, applied in order
    ///
    /// # Returns
    /// - `Ok(())` - All tables created successfully
    /// - `Err(TestError::Database)` - A statement was rejected
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Runs raw SQL against the test database.
    ///
    /// Applied after table creation during `TestBuilder::build()`, for
    /// schema pieces the entity definitions cannot express (partial
    /// indexes).
    ///
    /// # Arguments
    /// - `stmts` - Statements to execute verbatim, in order
    ///
    /// # Returns
    /// - `Ok(())` - All statements executed successfully
    /// - `Err(TestError::Database)` - A statement failed to execute
    pub async fn with_statements(&mut self, stmts: Vec<String>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute_unprepared(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the test session, building it on the first call.
    ///
    /// First use opens the database if needed, migrates the session store
    /// table into it, and creates a session with a seven-day inactivity
    /// expiry. Later calls hand back the same session.
    ///
    /// # Returns
    /// - `Ok(&Session)` - Reference to the session instance
    /// - `Err(TestError::Database)` - Database or session table setup failed
    ///
    /// # Example
    /// ```rust,ignore
    /// let mut test = TestContext::new();
    /// let session = test.session().await?;
    ///
    /// session.insert("user_id", 123).await?;
    /// ```
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        match self.session {
            Some(ref session) => Ok(session),
            None => {
                let db = self.database().await?;

                let store = SqliteStore::new(db.get_sqlite_connection_pool().clone());
                store
                    .migrate()
                    .await
                    .map_err(|e| sea_orm::DbErr::Custom(e.to_string()))?;

                let session = Session::new(
                    None,
                    Arc::new(store),
                    Some(Expiry::OnInactivity(Duration::days(7))),
                );

                Ok(&*self.session.insert(session))
            }
        }
    }

    /// Returns the database and session together.
    ///
    /// Tests that drive a repository and a session in the same body would
    /// otherwise fight the borrow checker calling `database()` and
    /// `session()` back to back; this initializes both first and then
    /// borrows both fields at once.
    ///
    /// # Returns
    /// - `Ok((&DatabaseConnection, &Session))` - References to both
    /// - `Err(TestError::Database)` - Initializing either one failed
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.database().await?;
        self.session().await?;

        // Both were just initialized, so the unwraps cannot fire.
        Ok((self.db.as_ref().unwrap(), self.session.as_ref().unwrap()))
    }
}
