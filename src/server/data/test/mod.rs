mod academic_semester;
mod user;
