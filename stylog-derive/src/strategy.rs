//! Parsing of `#[loggable(...)]` field and variant attributes.
//!
//! Supported forms:
//!
//! | Attribute                      | Applies to       | Effect                              |
//! |--------------------------------|------------------|-------------------------------------|
//! | `#[loggable(skip)]`            | fields           | field is left out of the value      |
//! | `#[loggable(rename = "name")]` | fields, variants | key (or variant tag) is `name`      |

use proc_macro2::Span;
use syn::{Attribute, LitStr, Result, spanned::Spanned};

/// How a field appears in the generated value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Strategy {
    /// Included under `key`.
    Include { key: String },
    /// `#[loggable(skip)]`: not included.
    Skip,
}

#[derive(Default)]
struct Parsed {
    skip: bool,
    rename: Option<String>,
}

fn parse(attrs: &[Attribute], allow_skip: bool) -> Result<Parsed> {
    let mut parsed = Parsed::default();
    for attr in attrs {
        if !attr.path().is_ident("loggable") {
            continue;
        }

        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                if !allow_skip {
                    return Err(meta.error("`skip` is only supported on fields"));
                }
                if parsed.skip {
                    return Err(meta.error("duplicate `skip`"));
                }
                parsed.skip = true;
                Ok(())
            } else if meta.path.is_ident("rename") {
                if parsed.rename.is_some() {
                    return Err(meta.error("duplicate `rename`"));
                }
                let name: LitStr = meta.value()?.parse()?;
                parsed.rename = Some(name.value());
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        })?;
    }
    Ok(parsed)
}

/// Reads the field attributes. `default_key` is the field name (or index).
pub(crate) fn parse_field_strategy(attrs: &[Attribute], default_key: String) -> Result<Strategy> {
    let parsed = parse(attrs, true)?;
    match (parsed.skip, parsed.rename) {
        (true, Some(_)) => Err(syn::Error::new(
            attrs.first().map_or_else(Span::call_site, Spanned::span),
            "`skip` and `rename` cannot be combined",
        )),
        (true, None) => Ok(Strategy::Skip),
        (false, rename) => Ok(Strategy::Include {
            key: rename.unwrap_or(default_key),
        }),
    }
}

/// Reads the variant attributes and returns the variant tag.
pub(crate) fn parse_variant_tag(attrs: &[Attribute], default_tag: String) -> Result<String> {
    Ok(parse(attrs, false)?.rename.unwrap_or(default_tag))
}
