pub mod course;
pub mod db;
pub mod link;
pub mod list;
pub mod person;
