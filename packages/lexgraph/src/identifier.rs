//! Identifier scheme for graph nodes.
//!
//! A node's local name is its path key (dot-separated chain of document keys)
//! followed by a realization suffix such as `_eu_en` or `_abstract_pt_pt`.
//! Locale-neutral nodes carry no suffix.

/// Separator between the components of a path key.
pub const PATH_SEPARATOR: char = '.';

/// Segment of an IRI after the last namespace separator (`#` or `/`).
///
/// # Examples
/// ```
/// use lexgraph::identifier::path_key;
///
/// assert_eq!(path_key("http://example.org/gdpr#cpt_I.art_1"), "cpt_I.art_1");
/// assert_eq!(path_key("cpt_I"), "cpt_I");
/// ```
#[must_use]
pub fn path_key(iri: &str) -> &str {
    iri.rfind(['#', '/']).map_or(iri, |pos| &iri[pos + 1..])
}

/// Remove a trailing `_<token>` (or `-<token>`) suffix.
///
/// Only an exact suffix match is removed; anything else is returned unchanged.
///
/// # Examples
/// ```
/// use lexgraph::identifier::strip_locale;
///
/// assert_eq!(strip_locale("cpt_I.art_1_eu_en", "eu_en"), "cpt_I.art_1");
/// assert_eq!(strip_locale("cpt_I.art_1-eu_en", "eu_en"), "cpt_I.art_1");
/// assert_eq!(strip_locale("cpt_I.art_1_eu_de", "eu_en"), "cpt_I.art_1_eu_de");
/// ```
#[must_use]
pub fn strip_locale<'a>(identifier: &'a str, token: &str) -> &'a str {
    if token.is_empty() {
        return identifier;
    }
    identifier
        .strip_suffix(token)
        .and_then(|rest| {
            rest.strip_suffix('_')
                .or_else(|| rest.strip_suffix('-'))
        })
        .unwrap_or(identifier)
}

/// Replace the `_<from>` suffix of an identifier by `_<to>`.
#[must_use]
pub fn swap_locale(identifier: &str, from: &str, to: &str) -> String {
    format!("{}_{to}", strip_locale(identifier, from))
}

/// Trailing designator of an identifier (`3` in `cpt_I.art_1.pt_3_eu_en`).
///
/// # Examples
/// ```
/// use lexgraph::identifier::designator_from_id;
///
/// assert_eq!(designator_from_id("cpt_I.art_1.pt_3_eu_en", "eu_en"), "3");
/// assert_eq!(designator_from_id("cpt_I.art_1.spt_b", ""), "b");
/// ```
#[must_use]
pub fn designator_from_id<'a>(identifier: &'a str, token: &str) -> &'a str {
    let key = strip_locale(identifier, token);
    let component = last_component(key);
    component.rsplit('_').next().unwrap_or(component)
}

/// Last `.`-separated component of a path key.
#[must_use]
pub fn last_component(key: &str) -> &str {
    key.rsplit(PATH_SEPARATOR).next().unwrap_or(key)
}

/// Path key of a child given its parent's path key and its document key.
///
/// Document keys are usually full paths already (`cpt_I.art_1.pt_1` inside
/// `cpt_I.art_1`) and are kept verbatim. Relative keys are joined to the parent.
/// A key equal to the parent's own path repeats its last component, which the
/// self-loop guard then recognises.
///
/// # Examples
/// ```
/// use lexgraph::identifier::child_path;
///
/// assert_eq!(child_path(None, "cpt_I"), "cpt_I");
/// assert_eq!(child_path(Some("cpt_I"), "cpt_I.art_1"), "cpt_I.art_1");
/// assert_eq!(child_path(Some("cpt_I"), "art_1"), "cpt_I.art_1");
/// assert_eq!(child_path(Some("cpt_I.art_1"), "cpt_I.art_1"), "cpt_I.art_1.art_1");
/// ```
#[must_use]
pub fn child_path(parent: Option<&str>, key: &str) -> String {
    let Some(parent) = parent else {
        return key.to_string();
    };
    if key == parent {
        return format!("{parent}{PATH_SEPARATOR}{}", last_component(key));
    }
    match key.strip_prefix(parent) {
        Some(rest) if rest.starts_with(PATH_SEPARATOR) => key.to_string(),
        _ => format!("{parent}{PATH_SEPARATOR}{key}"),
    }
}

/// Whether a local name is a degenerate `X.X<suffix>` self-loop.
///
/// True when appending `suffix` to the second-to-last path component yields
/// the last one. Nodes matching this pattern are skipped entirely.
///
/// # Examples
/// ```
/// use lexgraph::identifier::is_self_loop;
///
/// assert!(is_self_loop("cpt_I.art_5.pt_1.pt_1_eu_en", "_eu_en"));
/// assert!(is_self_loop("cpt_I.art_5.pt_1.pt_1", ""));
/// assert!(!is_self_loop("cpt_I.art_5.pt_1_eu_en", "_eu_en"));
/// ```
#[must_use]
pub fn is_self_loop(local: &str, suffix: &str) -> bool {
    let mut components = local.rsplit(PATH_SEPARATOR);
    match (components.next(), components.next()) {
        (Some(last), Some(previous)) => {
            last.len() == previous.len() + suffix.len()
                && last.starts_with(previous)
                && last.ends_with(suffix)
        }
        _ => false,
    }
}
