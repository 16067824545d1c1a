pub mod dashboard;
pub mod detail;
pub mod messages;
pub mod staffs;
