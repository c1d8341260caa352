pub mod employee;
pub mod weekly_schedule;
