//! Domain entities for the hdoc run configuration.
//!
//! This module contains pure data with no I/O: the configuration record, the
//! binary capability tier, and the per-stage read-only views. Loading and
//! validation live in [`crate::application`].

/// Capability tier of the running binary.
pub mod binary_type;

/// The configuration record itself.
///
/// See [`config::Config`] for the main type.
pub mod config;

/// Read-only projections handed to the indexer and the serializers.
pub mod views;
