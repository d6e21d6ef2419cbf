pub mod cli;

pub mod logging;
mod time;
