//! Standard redaction policies: marker types and their implementations.
//!
//! # Custom Policies
//!
//! ```rust
//! use stylog::{RedactionPolicy, TextRedactionPolicy};
//!
//! #[derive(Clone, Copy)]
//! struct KeepTwo;
//!
//! impl RedactionPolicy for KeepTwo {
//!     fn policy() -> TextRedactionPolicy {
//!         TextRedactionPolicy::keep_last(2)
//!     }
//! }
//!
//! assert_eq!(KeepTwo::policy().apply_to("secret"), "****et");
//! ```

use super::text::{KeepConfig, SHORT_MASK, STRONG_MASK, TextRedactionPolicy};

/// Associates a policy marker type with a concrete string redaction policy.
pub trait RedactionPolicy {
    /// Returns the policy for this marker type.
    fn policy() -> TextRedactionPolicy;
}

/// Policy for values under strong-sensitive keys (passwords, tokens, keys).
///
/// Every value becomes `"********"`, whatever its type or length.
#[derive(Clone, Copy, Debug)]
pub struct StrongSecret;

impl RedactionPolicy for StrongSecret {
    fn policy() -> TextRedactionPolicy {
        TextRedactionPolicy::full_with(STRONG_MASK)
    }
}

/// Policy for values under sensitive, but not strong, keys.
///
/// Strings longer than 4 characters keep their last 4 characters
/// (`"5551234567"` → `"******4567"`); shorter strings become `"****"`.
#[derive(Clone, Copy, Debug)]
pub struct PartialSecret;

impl RedactionPolicy for PartialSecret {
    fn policy() -> TextRedactionPolicy {
        TextRedactionPolicy::keep_with(KeepConfig::last(4).with_short_placeholder(SHORT_MASK))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_policies_use_expected_masks() {
        assert_eq!(StrongSecret::policy().apply_to("x"), "********");
        assert_eq!(StrongSecret::policy().placeholder(), "********");

        let policy = PartialSecret::policy();
        assert_eq!(policy.apply_to("5551234567"), "******4567");
        assert_eq!(policy.apply_to("123"), "****");
        assert_eq!(policy.placeholder(), "****");
    }
}
