pub mod strings;
pub mod time;
