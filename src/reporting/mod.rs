pub mod log;
pub mod reporter;
