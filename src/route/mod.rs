pub mod course;
pub mod message;
pub mod page;
pub mod post;
pub mod student;
