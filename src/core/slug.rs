//! Deterministic identifiers derived from titles.
//!
//! Every synthetic id in the tree goes through these helpers; two spellings of
//! the same rule would silently fork node identities between runs.

/// Lowercase the title and turn underscores into hyphens. Nothing else is touched.
pub fn slugify(title: &str) -> String {
    title.to_lowercase().replace('_', "-")
}

/// `{parent}-{slug(title)}`, used by curated branches.
pub fn child_id(parent_id: &str, title: &str) -> String {
    format!("{}-{}", parent_id, slugify(title))
}

/// `{parent}-{slug(title)}-{level}`, used by the Pareto generator.
pub fn pareto_child_id(parent_id: &str, title: &str, level: u32) -> String {
    format!("{}-{}-{}", parent_id, slugify(title), level)
}
