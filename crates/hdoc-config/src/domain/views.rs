//! Read-only projections of a [`Config`] for each downstream stage.
//!
//! The indexer and the serializers each see only the settings they consume.
//! Both views borrow the record, so they are `Copy` and can be handed to as
//! many worker threads as needed.

use std::num::{NonZeroU32, NonZeroUsize};
use std::path::{Path, PathBuf};

use super::binary_type::BinaryType;
use super::config::Config;

/// Settings read by the indexing stage.
#[derive(Debug, Clone, Copy)]
pub struct IndexingSettings<'a> {
    config: &'a Config,
}

impl<'a> IndexingSettings<'a> {
    pub fn root_dir(&self) -> &'a Path {
        &self.config.root_dir
    }

    pub fn compile_commands_json(&self) -> &'a Path {
        &self.config.compile_commands_json
    }

    /// Extra include paths, in application order.
    pub fn include_paths(&self) -> &'a [String] {
        &self.config.include_paths
    }

    /// Path patterns excluded from indexing.
    pub fn ignore_paths(&self) -> &'a [String] {
        &self.config.ignore_paths
    }

    /// Name substrings excluded from the output.
    pub fn ignore_names(&self) -> &'a [String] {
        &self.config.ignore_names
    }

    pub fn use_system_includes(&self) -> bool {
        self.config.use_system_includes
    }

    pub fn ignore_private_members(&self) -> bool {
        self.config.ignore_private_members
    }

    pub fn debug_dump_payload(&self) -> bool {
        self.config.debug_dump_payload
    }

    /// See [`Config::worker_threads`].
    pub fn worker_threads(&self, available: NonZeroUsize) -> NonZeroUsize {
        self.config.worker_threads(available)
    }

    /// See [`Config::indexed_file_limit`].
    pub fn indexed_file_limit(&self) -> Option<NonZeroU32> {
        self.config.indexed_file_limit()
    }
}

/// Settings read by the HTML and JSON serializers.
#[derive(Debug, Clone, Copy)]
pub struct RenderingSettings<'a> {
    config: &'a Config,
}

impl<'a> RenderingSettings<'a> {
    /// See [`Config::page_title_suffix`].
    pub fn page_title_suffix(&self) -> String {
        self.config.page_title_suffix()
    }

    pub fn project_name(&self) -> &'a str {
        &self.config.project_name
    }

    pub fn project_version(&self) -> Option<&'a str> {
        self.config.project_version.as_deref()
    }

    /// Only meaningful when [`RenderingSettings::binary_type`] can save locally.
    pub fn output_dir(&self) -> &'a Path {
        &self.config.output_dir
    }

    /// URL prefix for "view source" links.
    pub fn git_repo_url(&self) -> &'a str {
        &self.config.git_repo_url
    }

    pub fn git_default_branch(&self) -> &'a str {
        &self.config.git_default_branch
    }

    /// `true` when both the repo URL and the default branch are known, i.e.
    /// "view source" links can be built.
    pub fn has_source_links(&self) -> bool {
        !self.config.git_repo_url.is_empty() && !self.config.git_default_branch.is_empty()
    }

    pub fn homepage(&self) -> Option<&'a Path> {
        self.config.homepage.as_deref()
    }

    /// Standalone markdown pages, in output order.
    pub fn md_paths(&self) -> &'a [PathBuf] {
        &self.config.md_paths
    }

    pub fn hide_tool_menu(&self) -> bool {
        self.config.hide_tool_menu
    }

    pub fn binary_type(&self) -> BinaryType {
        self.config.binary_type
    }

    pub fn timestamp(&self) -> &'a str {
        &self.config.timestamp
    }

    pub fn tool_version(&self) -> &'a str {
        &self.config.tool_version
    }
}

impl Config {
    /// Projection consumed by the indexer.
    pub fn indexing(&self) -> IndexingSettings<'_> {
        IndexingSettings { config: self }
    }

    /// Projection consumed by the serializers.
    pub fn rendering(&self) -> RenderingSettings<'_> {
        RenderingSettings { config: self }
    }
}
