//! # pman-core - Core Domain Types
//!
//! Foundation crate for promptman. Provides the template catalog domain
//! types, the pipeline configuration model, error handling, and logging
//! setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Category`] - A template namespace; one is protected, two are selection targets
//! - [`SelectionSlot`] - The pipeline config slot a selection-target category binds into
//! - [`BindingRecord`] - Snapshot of an applied template (id + verbatim content)
//! - [`PipelineConfig`] - The external configuration object, unknown keys preserved
//! - [`Notice`], [`NoticeLevel`] - Non-fatal operator notifications
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use pman_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all promptman crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    normalize_template_name, template_stem, BindingRecord, Category, Notice, NoticeLevel,
    PipelineConfig, SelectionSlot, DEFAULT_EXTENSION, POLISHING_CATEGORY, PROTECTED_CATEGORY,
    TRANSLATE_CATEGORY,
};
