pub mod weekly_schedule;
