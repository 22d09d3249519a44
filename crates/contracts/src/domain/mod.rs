pub mod a001_course;
pub mod a002_student;
pub mod a003_enrollment;
pub mod common;
