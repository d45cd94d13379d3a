//! # hdoc-config
//!
//! Run-configuration model for the hdoc documentation generator.
//!
//! A [`Config`] records every setting that controls how a codebase is scanned,
//! filtered and rendered. It is built once per run, before any concurrent work
//! starts, and afterwards only read: the indexer and the serializers receive it
//! by reference (or `Arc<Config>`).
//!
//! - **`domain`** – The record, the [`BinaryType`] tier and the per-stage views.
//! - **`application`** – [`ConfigBuilder`], the [`ConfigSource`] seam and
//!   [`load_config`], the only path to an initialized record.
//!
//! ```rust
//! use hdoc_config::{BinaryType, ConfigBuilder};
//!
//! let cfg = ConfigBuilder::new()
//!     .root_dir("/src/hdoc")
//!     .compile_commands_json("/src/hdoc/build/compile_commands.json")
//!     .output_dir("/src/hdoc/hdoc-output")
//!     .project_name("hdoc")
//!     .build()
//!     .expect("valid configuration");
//!
//! assert!(cfg.is_initialized());
//! assert_eq!(cfg.binary_type(), BinaryType::Full);
//! assert_eq!(cfg.page_title_suffix(), "hdoc documentation");
//! ```

pub mod application;
pub mod domain;

pub use application::load_config::{load_config, ConfigBuilder, ConfigError, ConfigSource};
pub use domain::binary_type::BinaryType;
pub use domain::config::Config;
pub use domain::views::{IndexingSettings, RenderingSettings};
