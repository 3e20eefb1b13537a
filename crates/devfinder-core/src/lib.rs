//! # devfinder-core - Core Domain Types
//!
//! Foundation crate for devfinder. Provides the profile and lookup-state
//! types, the theme preference, display formatting, error handling and
//! logging setup.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`ProfileRecord`] - Normalized developer profile
//! - [`LookupOutcome`] - Idle / Loading / Success / NotFound / TransientError
//! - [`ThemePreference`] - Light or Dark, default Dark
//!
//! ### Display Formatting (`format`)
//! - [`ProfileView`] - Ready-to-paint text for a profile
//! - [`format_joined()`], [`normalize_blog_url()`], [`format_count()`]
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use devfinder_core::prelude::*;
//! ```

pub mod error;
pub mod format;
pub mod logging;
pub mod outcome;
pub mod prelude;
pub mod profile;
pub mod theme;

pub use error::{Error, Result, ResultExt};
pub use format::{
    format_count, format_joined, normalize_blog_url, social_url, DisplayField, ProfileView,
    NOT_AVAILABLE, NO_BIO,
};
pub use outcome::{LookupOutcome, NO_RESULTS};
pub use profile::{non_blank, ProfileRecord};
pub use theme::{ParseThemeError, ThemePreference};
