//! LoadConfigUseCase: populates a [`Config`] and marks it initialized.
//!
//! Loaders (the `.hdoc.toml` parser, command-line overrides, the runner that
//! stamps the timestamp) never touch a `Config` directly. Each one implements
//! [`ConfigSource`] and edits a [`ConfigBuilder`]; [`load_config`] applies the
//! sources in order and then calls [`ConfigBuilder::build`], which is the only
//! place a record becomes initialized.
//!
//! # Checks performed by `build`
//!
//! | Condition                                   | Error                                 |
//! |---------------------------------------------|---------------------------------------|
//! | `root_dir` empty                            | `MissingField("root_dir")`            |
//! | `compile_commands_json` empty               | `MissingField("compile_commands_json")` |
//! | `project_name` empty                        | `MissingField("project_name")`        |
//! | tier is `Full` and `output_dir` empty       | `MissingField("output_dir")`          |
//! | tier is not `Full` and `output_dir` set     | `LocalSaveNotPermitted(tier)`         |
//!
//! Paths are only checked for emptiness; they are never resolved or opened.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::binary_type::BinaryType;
use crate::domain::config::Config;

/// Errors reported while populating a configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// A required setting was not provided by any source.
    #[error("required configuration value `{0}` is missing")]
    MissingField(&'static str),

    /// An output directory was requested from a tier that may not save locally.
    #[error("saving documentation locally is not permitted for the {0} binary")]
    LocalSaveNotPermitted(BinaryType),

    /// A loading collaborator failed to produce its settings.
    #[error("configuration source {source_name} failed: {reason}")]
    Source { source_name: String, reason: String },
}

/// Producer of configuration settings, e.g. a config-file parser or the
/// command-line override layer.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigSource {
    /// Short name used in logs.
    fn name(&self) -> String;

    /// Applies this source's settings on top of `builder`.
    fn populate(&self, builder: ConfigBuilder) -> Result<ConfigBuilder, ConfigError>;
}

/// Applies `sources` in order to a default configuration and initializes it.
///
/// Later sources override settings made by earlier ones.
///
/// # Errors
///
/// Returns the first error raised by a source, or the validation error from
/// [`ConfigBuilder::build`].
pub fn load_config(sources: &[&dyn ConfigSource]) -> Result<Config, ConfigError> {
    let mut builder = ConfigBuilder::new();
    for source in sources {
        debug!("applying configuration source {}", source.name());
        builder = source.populate(builder)?;
    }
    builder.build()
}

/// Owned builder for [`Config`].
///
/// Setters consume and return the builder so they chain. Sequence setters
/// named in the plural replace the whole list; the singular forms append and
/// keep insertion order.
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Starts from the default, uninitialized record.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn use_system_includes(mut self, value: bool) -> Self {
        self.config.use_system_includes = value;
        self
    }

    /// `0` selects every available hardware thread.
    pub fn num_threads(mut self, value: u32) -> Self {
        self.config.num_threads = value;
        self
    }

    pub fn binary_type(mut self, value: BinaryType) -> Self {
        self.config.binary_type = value;
        self
    }

    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = path.into();
        self
    }

    pub fn compile_commands_json(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.compile_commands_json = path.into();
        self
    }

    pub fn output_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output_dir = path.into();
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.config.project_name = name.into();
        self
    }

    /// An empty string clears the version (unversioned project).
    pub fn project_version(mut self, version: impl Into<String>) -> Self {
        let version = version.into();
        self.config.project_version = (!version.is_empty()).then_some(version);
        self
    }

    pub fn timestamp(mut self, value: impl Into<String>) -> Self {
        self.config.timestamp = value.into();
        self
    }

    pub fn tool_version(mut self, value: impl Into<String>) -> Self {
        self.config.tool_version = value.into();
        self
    }

    pub fn git_repo_url(mut self, url: impl Into<String>) -> Self {
        self.config.git_repo_url = url.into();
        self
    }

    pub fn git_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.config.git_default_branch = branch.into();
        self
    }

    pub fn include_paths<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.include_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn include_path(mut self, path: impl Into<String>) -> Self {
        self.config.include_paths.push(path.into());
        self
    }

    pub fn ignore_paths<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignore_paths = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignore_path(mut self, pattern: impl Into<String>) -> Self {
        self.config.ignore_paths.push(pattern.into());
        self
    }

    pub fn ignore_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.ignore_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn ignore_name(mut self, name: impl Into<String>) -> Self {
        self.config.ignore_names.push(name.into());
        self
    }

    pub fn ignore_private_members(mut self, value: bool) -> Self {
        self.config.ignore_private_members = value;
        self
    }

    /// An empty path clears the homepage.
    pub fn homepage(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        self.config.homepage = (!path.as_os_str().is_empty()).then_some(path);
        self
    }

    pub fn md_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.config.md_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    pub fn md_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.md_paths.push(path.into());
        self
    }

    pub fn hide_tool_menu(mut self, value: bool) -> Self {
        self.config.hide_tool_menu = value;
        self
    }

    /// `0` removes the cap.
    pub fn debug_limit_num_indexed_files(mut self, value: u32) -> Self {
        self.config.debug_limit_num_indexed_files = value;
        self
    }

    pub fn debug_dump_payload(mut self, value: bool) -> Self {
        self.config.debug_dump_payload = value;
        self
    }

    /// Snapshot of the settings gathered so far. The result is never
    /// initialized.
    pub fn draft(&self) -> Config {
        self.config.clone()
    }

    /// Validates the gathered settings and returns the initialized record.
    ///
    /// # Errors
    ///
    /// See the module-level table.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = self.config;

        if config.root_dir.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("root_dir"));
        }
        if config.compile_commands_json.as_os_str().is_empty() {
            return Err(ConfigError::MissingField("compile_commands_json"));
        }
        if config.project_name.is_empty() {
            return Err(ConfigError::MissingField("project_name"));
        }

        let has_output_dir = !config.output_dir.as_os_str().is_empty();
        match config.binary_type {
            BinaryType::Full if !has_output_dir => {
                return Err(ConfigError::MissingField("output_dir"));
            }
            BinaryType::Online | BinaryType::Server if has_output_dir => {
                return Err(ConfigError::LocalSaveNotPermitted(config.binary_type));
            }
            _ => {}
        }

        config.initialized = true;
        info!(
            project = %config.project_name,
            tier = %config.binary_type,
            "configuration initialized"
        );
        debug!(
            num_threads = config.num_threads,
            include_paths = config.include_paths.len(),
            ignore_paths = config.ignore_paths.len(),
            ignore_names = config.ignore_names.len(),
            md_paths = config.md_paths.len(),
            "configuration details"
        );
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
