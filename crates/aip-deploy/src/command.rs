//! Construction of the `gcloud ai-platform` invocation for each action.
//!
//! Every builder is a pure function of the [`Config`] and the action's arguments:
//! the same inputs always produce the same tokens, in the same order.

use std::fmt;

use crate::{
    action::{BatchTrainArgs, Deployment, LocalBatchTrainArgs, PredictArgs, TrainArgs},
    config::Config,
};

/// Ordered tokens of one external command: launcher prefix, tool, arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    tokens: Vec<String>,
}

impl CommandInvocation {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The program to spawn and the arguments to hand it.
    pub fn split_program(&self) -> Option<(&str, &[String])> {
        self.tokens
            .split_first()
            .map(|(program, args)| (program.as_str(), args))
    }
}

impl fmt::Display for CommandInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tokens.join(" "))
    }
}

/// Token list under construction, always starting with launcher and tool.
struct Tokens(Vec<String>);

impl Tokens {
    fn start(config: &Config) -> Self {
        let mut tokens = config.launcher.clone();
        tokens.push(config.tool.clone());
        Tokens(tokens)
    }

    fn args<const N: usize>(mut self, args: [&str; N]) -> Self {
        self.0.extend(args.iter().map(|arg| arg.to_string()));
        self
    }

    fn arg(mut self, arg: String) -> Self {
        self.0.push(arg);
        self
    }

    fn finish(self) -> CommandInvocation {
        CommandInvocation { tokens: self.0 }
    }
}

fn local_train_base(config: &Config, module: &str) -> Tokens {
    Tokens::start(config)
        .args(["ai-platform", "local", "train"])
        .args(["--package-path", config.package_path.as_str()])
        .args(["--module-name", module])
        .args(["--job-dir", config.local_job_dir.as_str()])
        .args(["--", "--run_location=local", "--bucket=None"])
}

fn submit_training_base(config: &Config, module: &str, name: &str, bucket: &str) -> Tokens {
    Tokens::start(config)
        .args(["ai-platform", "jobs", "submit", "training", name])
        .args(["--package-path", config.package_path.as_str()])
        .args(["--module-name", module])
        .args(["--staging-bucket"])
        .arg(format!("gs://{bucket}"))
        .args(["--python-version", config.python_version.as_str()])
        .args(["--runtime-version", config.runtime_version.as_str()])
        .args(["--"])
        .arg(format!("--bucket={bucket}"))
}

/// Test the training module locally.
pub fn local_train(config: &Config) -> CommandInvocation {
    local_train_base(config, &config.train_module).finish()
}

/// Submit the training module as an AI Platform job.
pub fn train(config: &Config, args: &TrainArgs) -> CommandInvocation {
    submit_training_base(config, &config.train_module, &args.name, &args.bucket)
        .arg(format!("--path={}", args.path))
        .finish()
}

/// Test the batch training module locally against a BigQuery table.
pub fn local_batch_train(config: &Config, args: &LocalBatchTrainArgs) -> CommandInvocation {
    local_train_base(config, &config.batch_train_module)
        .arg(format!("--project={}", args.project))
        .arg(format!("--dataset_table={}", args.dataset_table))
        .finish()
}

/// Submit the batch training module as an AI Platform job.
pub fn batch_train(config: &Config, args: &BatchTrainArgs) -> CommandInvocation {
    submit_training_base(config, &config.batch_train_module, &args.name, &args.bucket)
        .arg(format!("--project={}", args.project))
        .arg(format!("--dataset_table={}", args.dataset_table))
        .finish()
}

/// Create a model version served by the custom prediction class.
pub fn predict(config: &Config, args: &PredictArgs) -> CommandInvocation {
    Tokens::start(config)
        .args([
            "beta",
            "ai-platform",
            "versions",
            "create",
            args.version.as_str(),
        ])
        .args(["--model", args.model.as_str()])
        .args(["--runtime-version", config.runtime_version.as_str()])
        .args(["--python-version", config.python_version.as_str()])
        .args(["--origin", args.origin.as_str()])
        .args(["--package-uris", args.package_path.as_str()])
        .args(["--prediction-class", config.prediction_class.as_str()])
        .arg(format!("--verbosity={}", config.verbosity))
        .finish()
}

/// Build the invocation for a resolved deployment.
pub fn build(config: &Config, deployment: &Deployment) -> CommandInvocation {
    match deployment {
        Deployment::LocalTrain => local_train(config),
        Deployment::Train(args) => train(config, args),
        Deployment::LocalBatchTrain(args) => local_batch_train(config, args),
        Deployment::BatchTrain(args) => batch_train(config, args),
        Deployment::Predict(args) => predict(config, args),
    }
}
