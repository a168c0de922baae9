//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for customization and a
//! `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(&db).await?;
//!
//! let semester = factory::academic_semester::AcademicSemesterFactory::new(&db)
//!     .title("Fall")
//!     .code("03")
//!     .year(2031)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities
//! - `academic_semester` - Create academic semester entities
//! - `helpers` - Shared counters and bulk helpers

pub mod academic_semester;
pub mod helpers;
pub mod user;

pub use academic_semester::create_academic_semester;
pub use user::create_user;
