//! Fixed exclusion set applied at every directory level.

/// Entry names skipped during traversal, matched exactly against the base
/// name. Covers version-control and editor metadata, virtual environments,
/// the program itself, and the generated index file.
pub const EXCLUDED_NAMES: &[&str] = &[
    ".gitignore",
    ".trash",
    "venv",
    ".obsidian",
    "mdoutline",
    ".git",
    "README.MD",
];

/// Check whether an entry name is in the exclusion set.
///
/// Matching is exact and case-sensitive: `README.MD` is excluded while
/// `README.md` is not. Excluded directories are skipped entirely, so
/// nothing beneath them is visited.
pub fn is_excluded(name: &str) -> bool {
    EXCLUDED_NAMES.contains(&name)
}
