//! String masking.
//!
//! A [`TextRedactionPolicy`] either replaces a string outright or masks all
//! but its last few characters. It knows nothing about keys or structure;
//! the redaction walk decides when a policy applies.

use std::borrow::Cow;

/// Placeholder for sensitive values that are neither strings nor numbers.
pub const REDACTED_PLACEHOLDER: &str = "[REDACTED]";

/// Placeholder for values under strong-sensitive keys.
pub const STRONG_MASK: &str = "********";

/// Placeholder for short strings and numbers under sensitive keys.
pub const SHORT_MASK: &str = "****";

/// Character that replaces each hidden character.
pub const MASK_CHAR: char = '*';

/// Suffix-preserving mask.
///
/// Counts Unicode scalar values, so the masked string has as many characters
/// as the input. A value no longer than the visible suffix cannot be masked
/// without revealing it: it becomes the short placeholder, or is kept as is
/// when none is set.
#[derive(Clone, Debug)]
pub struct KeepConfig {
    visible_suffix: usize,
    mask_char: char,
    short_placeholder: Option<Cow<'static, str>>,
}

impl KeepConfig {
    /// Keeps the last `visible_suffix` characters.
    #[must_use]
    pub fn last(visible_suffix: usize) -> Self {
        Self {
            visible_suffix,
            mask_char: MASK_CHAR,
            short_placeholder: None,
        }
    }

    #[must_use]
    pub fn with_mask_char(mut self, mask_char: char) -> Self {
        self.mask_char = mask_char;
        self
    }

    /// Replaces values too short to mask with `placeholder`.
    #[must_use]
    pub fn with_short_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.short_placeholder = Some(placeholder.into());
        self
    }

    fn mask(&self, value: &str) -> String {
        let total = value.chars().count();
        if total <= self.visible_suffix {
            return match &self.short_placeholder {
                Some(placeholder) => placeholder.to_string(),
                None => value.to_string(),
            };
        }

        let hidden = total - self.visible_suffix;
        value
            .chars()
            .enumerate()
            .map(|(index, ch)| if index < hidden { self.mask_char } else { ch })
            .collect()
    }
}

/// How a sensitive string is rewritten.
#[derive(Clone, Debug)]
pub enum TextRedactionPolicy {
    /// The whole value becomes `placeholder`.
    Full { placeholder: Cow<'static, str> },
    /// Everything but a visible suffix is masked.
    Keep(KeepConfig),
}

impl TextRedactionPolicy {
    #[must_use]
    pub fn full_with(placeholder: impl Into<Cow<'static, str>>) -> Self {
        Self::Full {
            placeholder: placeholder.into(),
        }
    }

    #[must_use]
    pub fn keep_with(config: KeepConfig) -> Self {
        Self::Keep(config)
    }

    /// Shorthand for `keep_with(KeepConfig::last(visible_suffix))`.
    #[must_use]
    pub fn keep_last(visible_suffix: usize) -> Self {
        Self::keep_with(KeepConfig::last(visible_suffix))
    }

    /// What a value that has no characters to mask (a number, say) becomes.
    ///
    /// `Full` yields its placeholder, `Keep` its short placeholder or
    /// [`REDACTED_PLACEHOLDER`].
    #[must_use]
    pub fn placeholder(&self) -> String {
        match self {
            TextRedactionPolicy::Full { placeholder } => placeholder.to_string(),
            TextRedactionPolicy::Keep(config) => config
                .short_placeholder
                .as_deref()
                .unwrap_or(REDACTED_PLACEHOLDER)
                .to_string(),
        }
    }

    #[must_use]
    pub fn apply_to(&self, value: &str) -> String {
        match self {
            TextRedactionPolicy::Full { placeholder } => placeholder.to_string(),
            TextRedactionPolicy::Keep(config) => config.mask(value),
        }
    }
}

impl std::default::Default for TextRedactionPolicy {
    fn default() -> Self {
        Self::full_with(REDACTED_PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::{KeepConfig, REDACTED_PLACEHOLDER, SHORT_MASK, TextRedactionPolicy};

    #[test]
    fn keep_last_masks_with_equal_length() {
        let policy = TextRedactionPolicy::keep_last(4);
        assert_eq!(policy.apply_to("abc123xyz"), "*****3xyz");
        assert_eq!(policy.apply_to("4111111111111111"), "************1111");
    }

    #[test]
    fn short_values_use_the_placeholder() {
        let policy =
            TextRedactionPolicy::keep_with(KeepConfig::last(4).with_short_placeholder(SHORT_MASK));
        assert_eq!(policy.apply_to("abcd"), "****");
        assert_eq!(policy.apply_to(""), "****");
        assert_eq!(policy.apply_to("abcde"), "*bcde");
        assert_eq!(policy.placeholder(), SHORT_MASK);
    }

    #[test]
    fn short_values_without_placeholder_are_kept() {
        let policy = TextRedactionPolicy::keep_last(4);
        assert_eq!(policy.apply_to("ab"), "ab");
        assert_eq!(policy.placeholder(), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn mask_char_is_configurable() {
        let policy = TextRedactionPolicy::keep_with(KeepConfig::last(2).with_mask_char('#'));
        assert_eq!(policy.apply_to("abcdef"), "####ef");
    }

    #[test]
    fn full_replaces_everything() {
        let policy = TextRedactionPolicy::full_with("<hidden>");
        assert_eq!(policy.apply_to("secret"), "<hidden>");
        assert_eq!(policy.placeholder(), "<hidden>");
        assert_eq!(TextRedactionPolicy::default().apply_to("x"), REDACTED_PLACEHOLDER);
    }

    #[test]
    fn masking_counts_scalar_values() {
        let policy = TextRedactionPolicy::keep_last(4);
        assert_eq!(policy.apply_to("pässwörd"), "****wörd");
    }
}
