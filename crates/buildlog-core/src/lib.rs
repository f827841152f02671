#![warn(missing_docs)]
//! `buildlog-core` - Data model for build-output line classification.
//!
//! # Overview
//!
//! This crate holds the host-independent pieces of a build-log colorizer:
//! semantic [`Category`] tags, per-line [`TaggedRange`] spans grouped into a
//! [`ClassificationResult`], a rope-backed [`LineIndex`] over the document
//! snapshot, per-category display [`styles`], and the [`processing`] seam a
//! host drives to get derived display state.
//!
//! The classification rules themselves live in `buildlog-classify`; hosts
//! (editor integrations, TUI viewers) live outside this workspace entirely.
//! The contract with a host is deliberately thin:
//!
//! - the host hands over the full current text of a qualifying surface
//!   (see [`SurfaceInfo::is_build_output`]);
//! - a processor returns, per category, the complete ordered set of tagged
//!   ranges, recomputed from scratch (no incremental diffing);
//! - the host maps each category to a persistent visual style chosen once at
//!   startup (see [`StyleMap`]) and fully replaces the applied ranges on
//!   every pass.
//!
//! All column offsets are 0-based character offsets within a line, end
//! exclusive.

pub mod category;
pub mod line_index;
pub mod processing;
pub mod ranges;
pub mod styles;
pub mod surface;

pub use category::Category;
pub use line_index::LineIndex;
pub use processing::{OutputProcessor, ProcessingEdit, SUGGESTED_DEBOUNCE_MS};
pub use ranges::{ClassificationResult, TaggedRange};
pub use styles::{CategoryStyle, FontWeight, StyleMap};
pub use surface::SurfaceInfo;
