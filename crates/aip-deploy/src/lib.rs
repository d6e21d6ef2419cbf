//! AI Platform deploy library
//!
//! This crate turns a [`Deployment`] (an action plus its arguments) into the exact
//! `gcloud ai-platform` invocation for it, and runs that invocation as a blocking
//! child process. Command construction is pure; execution goes through the
//! [`CommandRunner`] seam so it can be swapped out.

pub mod action;
pub mod command;
pub mod config;
pub mod error;
pub mod execution;
pub mod logging;

// Re-export commonly used types for convenience
pub use action::{Action, BatchTrainArgs, Deployment, LocalBatchTrainArgs, PredictArgs, TrainArgs};
pub use command::CommandInvocation;
pub use config::{Config, ConfigError};
pub use error::DeployError;
pub use execution::{CommandRunner, ProcessRunner, deploy};

/// Result type commonly used throughout the library
pub type Result<T> = std::result::Result<T, DeployError>;
