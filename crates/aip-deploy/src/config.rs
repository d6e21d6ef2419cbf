use serde::Deserialize;
use std::{fs, io, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid configuration file: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Fixed values interpolated into every generated command.
///
/// The defaults are the values the trainer package and the model deployment were
/// built against; a TOML file only needs to list the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Program and arguments placed in front of the tool, e.g. `["powershell.exe"]`.
    pub launcher: Vec<String>,
    pub tool: String,
    pub package_path: String,
    pub train_module: String,
    pub batch_train_module: String,
    pub local_job_dir: String,
    pub python_version: String,
    pub runtime_version: String,
    pub prediction_class: String,
    pub verbosity: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            launcher: Vec::new(),
            tool: String::from("gcloud"),
            package_path: String::from("modeling"),
            train_module: String::from("modeling.trainer.model"),
            batch_train_module: String::from("modeling.trainer.batch_model"),
            local_job_dir: String::from("local-training-output"),
            python_version: String::from("3.7"),
            runtime_version: String::from("1.15"),
            prediction_class: String::from("modeling.predictor.predictor.Predictor"),
            verbosity: String::from("debug"),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    /// Replace the launcher with a single program, e.g. a shell.
    pub fn with_launcher<S: Into<String>>(mut self, launcher: S) -> Self {
        self.launcher = vec![launcher.into()];
        self
    }
}
