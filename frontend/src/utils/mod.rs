pub mod download;
pub mod time;
