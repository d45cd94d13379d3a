//! The run-configuration record shared by every hdoc stage.
//!
//! A [`Config`] is constructed with defaults, populated once by a loader
//! (see [`crate::application::load_config`]), marked initialized, and then
//! only read. The indexer and the serializers receive it by reference (or in an
//! `Arc`) and never through a global accessor.
//!
//! # Sentinel values
//!
//! Two numeric fields reserve `0` for "unbounded":
//!
//! | Field                           | `0` means                       |
//! |---------------------------------|---------------------------------|
//! | `num_threads`                   | use every available hardware thread |
//! | `debug_limit_num_indexed_files` | index every file                |
//!
//! Consumers should go through [`Config::worker_threads`] and
//! [`Config::indexed_file_limit`] instead of reading the raw numbers, so the
//! sentinel can never be mistaken for a literal zero.

use std::num::{NonZeroU32, NonZeroUsize};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::warn;

use super::binary_type::BinaryType;

/// Configuration data that hdoc uses for indexing and serialization.
///
/// Fields are private: the record is read-only once it leaves the loader.
/// Use [`crate::application::load_config::ConfigBuilder`] to populate one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    /// Set by the loader after a successful population; nothing else implies it.
    #[serde(skip)]
    pub(crate) initialized: bool,
    /// Add the compiler's default system include paths to the indexing set.
    pub(crate) use_system_includes: bool,
    /// Indexing worker threads (`0` = all available).
    pub(crate) num_threads: u32,
    pub(crate) binary_type: BinaryType,
    /// Root of the documented repository (where `.hdoc.toml` lives).
    pub(crate) root_dir: PathBuf,
    /// Path to `compile_commands.json`.
    pub(crate) compile_commands_json: PathBuf,
    /// Where generated documentation is saved.
    pub(crate) output_dir: PathBuf,
    pub(crate) project_name: String,
    /// `None` for unversioned projects.
    pub(crate) project_version: Option<String>,
    /// Timestamp of this run, stamped by the runner.
    pub(crate) timestamp: String,
    /// Build/version string of hdoc itself.
    pub(crate) tool_version: String,
    /// URL prefix of a GitHub or GitLab repo, used for source links.
    pub(crate) git_repo_url: String,
    pub(crate) git_default_branch: String,
    /// Extra include paths, in the order they are passed to the indexer.
    pub(crate) include_paths: Vec<String>,
    /// Source paths matching any of these are not indexed.
    pub(crate) ignore_paths: Vec<String>,
    /// Symbols whose names contain any of these (substring match) are dropped.
    pub(crate) ignore_names: Vec<String>,
    pub(crate) ignore_private_members: bool,
    /// Markdown file used as the landing page.
    pub(crate) homepage: Option<PathBuf>,
    /// Additional markdown pages, in output order.
    pub(crate) md_paths: Vec<PathBuf>,
    /// Hide the "made with hdoc" link in the menu.
    pub(crate) hide_tool_menu: bool,
    /// Debug cap on the number of indexed files (`0` = no cap).
    pub(crate) debug_limit_num_indexed_files: u32,
    /// Dump the intermediate payload for inspection.
    pub(crate) debug_dump_payload: bool,
}

impl Default for Config {
    /// Returns the freshly constructed, never-populated record.
    ///
    /// It is *not* initialized; see [`Config::is_initialized`].
    fn default() -> Self {
        Self {
            initialized: false,
            use_system_includes: true,
            num_threads: 0,
            binary_type: BinaryType::Full,
            root_dir: PathBuf::new(),
            compile_commands_json: PathBuf::new(),
            output_dir: PathBuf::new(),
            project_name: String::new(),
            project_version: None,
            timestamp: String::new(),
            tool_version: String::new(),
            git_repo_url: String::new(),
            git_default_branch: String::new(),
            include_paths: Vec::new(),
            ignore_paths: Vec::new(),
            ignore_names: Vec::new(),
            ignore_private_members: false,
            homepage: None,
            md_paths: Vec::new(),
            hide_tool_menu: false,
            debug_limit_num_indexed_files: 0,
            debug_dump_payload: false,
        }
    }
}

impl Config {
    /// Returns `"PROJECT_NAME PROJECT_VERSION documentation"`, or
    /// `"PROJECT_NAME documentation"` when the project is unversioned.
    ///
    /// Does not check [`Config::is_initialized`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use hdoc_config::ConfigBuilder;
    ///
    /// let cfg = ConfigBuilder::new()
    ///     .project_name("hdoc")
    ///     .project_version("1.4.0")
    ///     .draft();
    /// assert_eq!(cfg.page_title_suffix(), "hdoc 1.4.0 documentation");
    /// ```
    pub fn page_title_suffix(&self) -> String {
        match &self.project_version {
            Some(version) => format!("{} {} documentation", self.project_name, version),
            None => format!("{} documentation", self.project_name),
        }
    }

    /// `true` once the loader has populated this record successfully.
    ///
    /// An uninitialized record must be treated as unusable.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Resolves the `num_threads` sentinel against `available` hardware threads.
    pub fn worker_threads(&self, available: NonZeroUsize) -> NonZeroUsize {
        usize::try_from(self.num_threads)
            .ok()
            .and_then(NonZeroUsize::new)
            .unwrap_or(available)
    }

    /// Like [`Config::worker_threads`], querying the platform for the
    /// available parallelism.
    ///
    /// Falls back to a single thread if the platform cannot report it.
    pub fn available_worker_threads(&self) -> NonZeroUsize {
        let available = std::thread::available_parallelism().unwrap_or_else(|e| {
            warn!("could not determine available parallelism, using 1 thread: {e}");
            NonZeroUsize::MIN
        });
        self.worker_threads(available)
    }

    /// Maximum number of files to index, or `None` when unbounded.
    pub fn indexed_file_limit(&self) -> Option<NonZeroU32> {
        NonZeroU32::new(self.debug_limit_num_indexed_files)
    }

    /// Whether the recorded tier permits saving output to local disk.
    pub fn can_save_locally(&self) -> bool {
        self.binary_type.can_save_locally()
    }

    // ── Field accessors ──────────────────────────────────────────────────────

    /// Whether the compiler's default system include paths join the indexing set.
    pub fn use_system_includes(&self) -> bool {
        self.use_system_includes
    }

    /// Raw thread count; `0` is the "all available" sentinel.
    pub fn num_threads(&self) -> u32 {
        self.num_threads
    }

    /// Capability tier recorded by the loader.
    pub fn binary_type(&self) -> BinaryType {
        self.binary_type
    }

    /// Repository root; other relative paths are anchored here by the loader.
    pub fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Compilation database providing per-file compiler flags.
    pub fn compile_commands_json(&self) -> &Path {
        &self.compile_commands_json
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// `None` for unversioned projects.
    pub fn project_version(&self) -> Option<&str> {
        self.project_version.as_deref()
    }

    /// Generation time stamped by the runner, never user supplied.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Build/version string of hdoc itself.
    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    /// URL prefix for "view source" links, e.g. `https://github.com/org/repo/blob/`.
    pub fn git_repo_url(&self) -> &str {
        &self.git_repo_url
    }

    /// Branch name inserted into source links.
    pub fn git_default_branch(&self) -> &str {
        &self.git_default_branch
    }

    /// Extra include paths, in the order the indexer must apply them.
    pub fn include_paths(&self) -> &[String] {
        &self.include_paths
    }

    /// Source files whose path matches any entry are not indexed.
    pub fn ignore_paths(&self) -> &[String] {
        &self.ignore_paths
    }

    /// Symbols whose name contains any entry are dropped from the output.
    pub fn ignore_names(&self) -> &[String] {
        &self.ignore_names
    }

    /// Suppress non-public members of records.
    pub fn ignore_private_members(&self) -> bool {
        self.ignore_private_members
    }

    /// Markdown landing page, if any.
    pub fn homepage(&self) -> Option<&Path> {
        self.homepage.as_deref()
    }

    /// Standalone markdown pages, in output order.
    pub fn md_paths(&self) -> &[PathBuf] {
        &self.md_paths
    }

    /// Hide the "made with hdoc" menu link.
    pub fn hide_tool_menu(&self) -> bool {
        self.hide_tool_menu
    }

    /// Raw file cap; `0` is the "no cap" sentinel.
    pub fn debug_limit_num_indexed_files(&self) -> u32 {
        self.debug_limit_num_indexed_files
    }

    /// Dump the intermediate indexed payload for inspection.
    pub fn debug_dump_payload(&self) -> bool {
        self.debug_dump_payload
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, version: Option<&str>) -> Config {
        Config {
            project_name: name.to_string(),
            project_version: version.map(str::to_string),
            ..Config::default()
        }
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_config_is_not_initialized() {
        let cfg = Config::default();
        assert!(!cfg.is_initialized());
    }

    #[test]
    fn test_default_config_has_expected_scalars() {
        // Arrange / Act
        let cfg = Config::default();

        // Assert
        assert!(cfg.use_system_includes());
        assert_eq!(cfg.num_threads(), 0);
        assert_eq!(cfg.binary_type(), BinaryType::Full);
        assert!(!cfg.ignore_private_members());
        assert!(!cfg.hide_tool_menu());
        assert_eq!(cfg.debug_limit_num_indexed_files(), 0);
        assert!(!cfg.debug_dump_payload());
    }

    #[test]
    fn test_default_config_has_empty_sequences_and_paths() {
        let cfg = Config::default();
        assert!(cfg.include_paths().is_empty());
        assert!(cfg.ignore_paths().is_empty());
        assert!(cfg.ignore_names().is_empty());
        assert!(cfg.md_paths().is_empty());
        assert_eq!(cfg.root_dir(), Path::new(""));
        assert_eq!(cfg.output_dir(), Path::new(""));
        assert!(cfg.homepage().is_none());
        assert!(cfg.project_version().is_none());
    }

    #[test]
    fn test_default_config_has_empty_text_fields() {
        // Arrange / Act
        let cfg = Config::default();

        // Assert
        assert_eq!(cfg.compile_commands_json(), Path::new(""));
        assert!(cfg.project_name().is_empty());
        assert!(cfg.timestamp().is_empty());
        assert!(cfg.tool_version().is_empty());
        assert!(cfg.git_repo_url().is_empty());
        assert!(cfg.git_default_branch().is_empty());
    }

    // ── page_title_suffix ─────────────────────────────────────────────────────

    #[test]
    fn test_page_title_suffix_without_version() {
        assert_eq!(
            named("hdoc", None).page_title_suffix(),
            "hdoc documentation"
        );
    }

    #[test]
    fn test_page_title_suffix_with_version() {
        assert_eq!(
            named("hdoc", Some("1.4.0")).page_title_suffix(),
            "hdoc 1.4.0 documentation"
        );
    }

    #[test]
    fn test_page_title_suffix_with_empty_name_is_accepted() {
        assert_eq!(named("", None).page_title_suffix(), " documentation");
    }

    #[test]
    fn test_page_title_suffix_ignores_initialized_flag() {
        let mut cfg = named("llvm", Some("17"));
        let before = cfg.page_title_suffix();
        cfg.initialized = true;
        assert_eq!(cfg.page_title_suffix(), before);
    }

    #[test]
    fn test_page_title_suffix_is_repeatable() {
        let cfg = named("fmt", Some("10.1.1"));
        let first = cfg.page_title_suffix();
        assert_eq!(cfg.page_title_suffix(), first);
        assert_eq!(
            cfg,
            named("fmt", Some("10.1.1")),
            "must not mutate the record"
        );
    }

    #[test]
    fn test_page_title_suffix_over_many_names() {
        for name in ["a", "my project", "C++ lib", "ünïcødé"] {
            assert_eq!(
                named(name, None).page_title_suffix(),
                format!("{name} documentation")
            );
            assert_eq!(
                named(name, Some("0.1")).page_title_suffix(),
                format!("{name} 0.1 documentation")
            );
        }
    }

    // ── Sentinels ─────────────────────────────────────────────────────────────

    #[test]
    fn test_zero_threads_means_all_available() {
        // Arrange
        let cfg = Config::default();
        let available = NonZeroUsize::new(12).unwrap();

        // Act / Assert
        assert_eq!(cfg.worker_threads(available), available);
    }

    #[test]
    fn test_explicit_thread_count_is_used_verbatim() {
        let cfg = Config {
            num_threads: 3,
            ..Config::default()
        };
        let available = NonZeroUsize::new(12).unwrap();
        assert_eq!(cfg.worker_threads(available).get(), 3);
    }

    #[test]
    fn test_explicit_thread_count_may_exceed_hardware_threads() {
        let cfg = Config {
            num_threads: 64,
            ..Config::default()
        };
        assert_eq!(cfg.worker_threads(NonZeroUsize::MIN).get(), 64);
    }

    #[test]
    fn test_available_worker_threads_is_never_zero() {
        assert!(Config::default().available_worker_threads().get() >= 1);
    }

    #[test]
    fn test_zero_file_limit_means_unbounded() {
        assert_eq!(Config::default().indexed_file_limit(), None);
    }

    #[test]
    fn test_nonzero_file_limit_is_reported() {
        let cfg = Config {
            debug_limit_num_indexed_files: 25,
            ..Config::default()
        };
        assert_eq!(cfg.indexed_file_limit().map(NonZeroU32::get), Some(25));
    }

    // ── Tier ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_can_save_locally_follows_tier() {
        for (tier, expected) in [
            (BinaryType::Full, true),
            (BinaryType::Online, false),
            (BinaryType::Server, false),
        ] {
            let cfg = Config {
                binary_type: tier,
                ..Config::default()
            };
            assert_eq!(cfg.can_save_locally(), expected, "tier {tier}");
        }
    }

    // ── Serialization ─────────────────────────────────────────────────────────

    #[test]
    fn test_serialized_payload_omits_initialized_flag() {
        let json = serde_json::to_value(Config::default()).expect("serialize");
        assert!(json.get("initialized").is_none());
        assert_eq!(json["binary_type"], "full");
        assert_eq!(json["use_system_includes"], true);
    }

    #[test]
    fn test_serialized_payload_uses_null_for_absent_optionals() {
        let json = serde_json::to_value(Config::default()).expect("serialize");
        assert!(json["project_version"].is_null());
        assert!(json["homepage"].is_null());
    }

    #[test]
    fn test_config_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Config>();
    }
}
