pub mod student;
pub mod university;
