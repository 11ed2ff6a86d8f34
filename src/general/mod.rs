pub mod status;
pub mod stdin_handler;
