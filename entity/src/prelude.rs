pub use super::academic_semester::Entity as AcademicSemester;
pub use super::user::Entity as User;
