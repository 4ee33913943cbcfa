// Module exports for models

pub mod countdown;
pub mod milestone;
pub mod schedule;
pub mod settings;
