use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// SQL creating the partial unique index that backs the no-double-booking
/// rule in production. Tables built from entity schemas alone would miss it,
/// so booking tests add it explicitly to exercise the real constraint.
pub const BOOKING_ACTIVE_SLOT_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_booking_active_slot \
     ON booking (doctor_id, user_id, appointment_date, time_slot) \
     WHERE status <> 'cancelled'";

/// Declares the schema an individual test needs.
///
/// Tests chain `with_table()` calls (or one of the grouped helpers) to list
/// the entities they touch, then call `build()` to get a `TestContext` whose
/// in-memory database carries exactly those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Doctor, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Doctor)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements derived from entity models, applied in the
    /// order they were added.
    tables: Vec<TableCreateStatement>,

    /// Raw SQL applied after table creation, for schema elements the entity
    /// definitions cannot express, such as partial indexes.
    statements: Vec<String>,
}

impl TestBuilder {
    /// Creates a builder with no schema declared yet.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            statements: Vec::new(),
        }
    }

    /// Declares a table derived from a SeaORM entity.
    ///
    /// The CREATE TABLE statement is generated with SQLite syntax and run
    /// when `build()` is called. Add tables in dependency order so foreign
    /// keys resolve against already-created tables.
    ///
    /// # Arguments
    /// - `entity` - Entity whose table the test needs
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds a raw SQL statement to run after all tables are created.
    ///
    /// # Arguments
    /// - `sql` - Statement to execute verbatim against the test database
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_statement(mut self, sql: impl Into<String>) -> Self {
        self.statements.push(sql.into());
        self
    }

    /// Declares the tables booking tests depend on, in dependency order:
    /// User, Doctor, Booking.
    ///
    /// Also installs the partial unique index over active bookings so tests
    /// hit the same double-booking constraint the migrations create.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_booking_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_booking_tables(self) -> Self {
        self.with_table(User)
            .with_table(Doctor)
            .with_table(Booking)
            .with_statement(BOOKING_ACTIVE_SLOT_INDEX)
    }

    /// Adds the three standalone clinic tables (lab, checkup, surgery).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_clinic_tables(self) -> Self {
        self.with_table(LabAppointment)
            .with_table(CheckupAppointment)
            .with_table(Surgery)
    }

    /// Opens the in-memory database and applies the declared schema.
    ///
    /// Tables are created first, in the order declared, and any raw
    /// statements run after that.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Context with the database and schema ready
    /// - `Err(TestError::Database)` - Connecting or applying the schema failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;
        setup.with_statements(self.statements).await?;

        Ok(setup)
    }
}
