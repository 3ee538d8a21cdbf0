pub mod samples;
pub mod users;
