use clap::{Args, Subcommand};
use derive_new::new;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::error::DeployError;

/// The closed set of things the front-end knows how to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "snake_case")]
pub enum Action {
    LocalTrain,
    Train,
    LocalBatchTrain,
    BatchTrain,
    Predict,
}

impl Action {
    /// Resolve an action by its command-line name.
    ///
    /// This is the name-level check for library callers; the command line
    /// resolves actions through the clap sub-commands of [`Deployment`].
    pub fn from_name(name: &str) -> crate::Result<Self> {
        Action::from_str(name).map_err(|_| DeployError::UnknownAction(name.to_string()))
    }
}

#[derive(new, Args, Debug, Clone, PartialEq, Eq)]
pub struct TrainArgs {
    /// Specify the storage bucket for saving model related output
    #[arg(long, required = true)]
    pub bucket: String,
    /// Specify the path in bucket for saving model related output
    #[arg(long, required = true)]
    pub path: String,
    /// Specify name of job for AI Platform Jobs
    #[arg(long, required = true)]
    pub name: String,
}

#[derive(new, Args, Debug, Clone, PartialEq, Eq)]
pub struct LocalBatchTrainArgs {
    /// Specify project name
    #[arg(long, required = true)]
    pub project: String,
    /// Specify output dataset.table in BigQuery
    #[arg(long = "dataset_table", required = true)]
    pub dataset_table: String,
}

#[derive(new, Args, Debug, Clone, PartialEq, Eq)]
pub struct BatchTrainArgs {
    /// Specify the storage bucket for saving model related output
    #[arg(long, required = true)]
    pub bucket: String,
    /// Specify name of job for AI Platform Jobs
    #[arg(long, required = true)]
    pub name: String,
    /// Specify project name
    #[arg(long, required = true)]
    pub project: String,
    /// Specify output dataset.table in BigQuery
    #[arg(long = "dataset_table", required = true)]
    pub dataset_table: String,
}

#[derive(new, Args, Debug, Clone, PartialEq, Eq)]
pub struct PredictArgs {
    /// Name of model version to create
    #[arg(long, required = true)]
    pub version: String,
    /// Name of already created model
    #[arg(long, required = true)]
    pub model: String,
    /// Path to model directory in cloud storage
    #[arg(long, required = true)]
    pub origin: String,
    /// Path to package/tarball in GCS - If multiple should be comma separated list
    #[arg(long = "package-path", required = true)]
    pub package_path: String,
}

/// A resolved action together with the options it was given.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Deployment {
    /// Test the training job locally
    #[command(name = "local_train")]
    LocalTrain,
    /// Run a training job in AI Platform
    #[command(name = "train")]
    Train(TrainArgs),
    /// Test the batch training job locally
    #[command(name = "local_batch_train")]
    LocalBatchTrain(LocalBatchTrainArgs),
    /// Run a batch training job in AI Platform
    #[command(name = "batch_train")]
    BatchTrain(BatchTrainArgs),
    /// Create a model version in AI Platform
    #[command(name = "predict", disable_version_flag = true)]
    Predict(PredictArgs),
}

impl Deployment {
    pub fn action(&self) -> Action {
        match self {
            Deployment::LocalTrain => Action::LocalTrain,
            Deployment::Train(_) => Action::Train,
            Deployment::LocalBatchTrain(_) => Action::LocalBatchTrain,
            Deployment::BatchTrain(_) => Action::BatchTrain,
            Deployment::Predict(_) => Action::Predict,
        }
    }
}
