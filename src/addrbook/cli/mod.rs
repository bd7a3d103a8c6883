mod commands;
mod dispatch;
mod render;
mod setup;

pub use commands::run;
