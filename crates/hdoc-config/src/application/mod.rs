//! Application layer: populating and initializing a [`crate::Config`].
//!
//! # Sub-modules
//!
//! - **`load_config`** – The builder used by loaders, the [`load_config::ConfigSource`]
//!   seam for file parsers and command-line overrides, and the single
//!   transition that marks a record initialized.

pub mod load_config;
