//! Redaction policies: what counts as sensitive and how it is masked.
//!
//! This module provides:
//!
//! - **Text policies** (`text`): The [`TextRedactionPolicy`] enum and
//!   [`KeepConfig`] for transforming strings.
//!
//! - **Policies** (`policies`): Zero-sized markers ([`StrongSecret`],
//!   [`PartialSecret`]) bound to concrete text policies through the
//!   [`RedactionPolicy`] trait.
//!
//! - **Configuration** (`config`): [`RedactionConfig`], the sensitive-key sets
//!   and the depth ceiling used by the redaction walk.
//!
//! # Example
//!
//! ```rust
//! use stylog::{PartialSecret, RedactionPolicy, StrongSecret};
//!
//! assert_eq!(StrongSecret::policy().apply_to("hunter2"), "********");
//! assert_eq!(PartialSecret::policy().apply_to("abc123xyz"), "*****3xyz");
//! assert_eq!(PartialSecret::policy().apply_to("abcd"), "****");
//! ```

pub mod config;
pub mod policies;
pub mod text;

pub use config::{DEFAULT_MAX_DEPTH, KeyClass, RedactionConfig};
pub use policies::{PartialSecret, RedactionPolicy, StrongSecret};
pub use text::{
    KeepConfig, MASK_CHAR, REDACTED_PLACEHOLDER, SHORT_MASK, STRONG_MASK, TextRedactionPolicy,
};
