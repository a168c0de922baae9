//! Academic semester factory for creating test semester entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test semesters with customizable fields.
///
/// Defaults describe an Autumn semester (`"01"`) running January to June of 2030.
pub struct AcademicSemesterFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    year: i32,
    code: String,
    start_month: String,
    end_month: String,
}

impl<'a> AcademicSemesterFactory<'a> {
    /// Creates a new AcademicSemesterFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AcademicSemesterFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: "Autumn".to_string(),
            year: 2030,
            code: "01".to_string(),
            start_month: "January".to_string(),
            end_month: "June".to_string(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn start_month(mut self, start_month: impl Into<String>) -> Self {
        self.start_month = start_month.into();
        self
    }

    pub fn end_month(mut self, end_month: impl Into<String>) -> Self {
        self.end_month = end_month.into();
        self
    }

    /// Builds and inserts the semester entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::academic_semester::Model)` - Created semester entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::academic_semester::Model, DbErr> {
        let now = Utc::now();
        entity::academic_semester::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            title: ActiveValue::Set(self.title),
            year: ActiveValue::Set(self.year),
            code: ActiveValue::Set(self.code),
            start_month: ActiveValue::Set(self.start_month),
            end_month: ActiveValue::Set(self.end_month),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a semester with default values.
///
/// # Returns
/// - `Ok(entity::academic_semester::Model)` - Created semester entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_academic_semester(
    db: &DatabaseConnection,
) -> Result<entity::academic_semester::Model, DbErr> {
    AcademicSemesterFactory::new(db).build().await
}
