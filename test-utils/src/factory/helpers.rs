//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one semester per year starting at `first_year`, all with the default title.
///
/// # Arguments
/// - `db` - Database connection
/// - `first_year` - Year of the first semester
/// - `count` - Number of semesters to create
///
/// # Returns
/// - `Ok(Vec<entity::academic_semester::Model>)` - Created semesters in year order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_semesters_for_years(
    db: &DatabaseConnection,
    first_year: i32,
    count: i32,
) -> Result<Vec<entity::academic_semester::Model>, DbErr> {
    let mut semesters = Vec::new();
    for year in first_year..first_year + count {
        let semester = crate::factory::academic_semester::AcademicSemesterFactory::new(db)
            .year(year)
            .build()
            .await?;
        semesters.push(semester);
    }

    Ok(semesters)
}
