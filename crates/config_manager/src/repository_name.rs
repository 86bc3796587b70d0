//! Qualified repository name handling.

#[cfg(test)]
#[path = "repository_name_tests.rs"]
mod tests;

/// Splits a qualified repository name into its owner and name parts.
///
/// Only the first `/` separates the two parts, so the name part may itself
/// contain slashes. A string without a `/` has an empty owner.
///
/// # Examples
///
/// ```
/// use config_manager::split_owner_and_repo_name;
///
/// assert_eq!(split_owner_and_repo_name("acme/widget"), ("acme", "widget"));
/// assert_eq!(split_owner_and_repo_name("widget"), ("", "widget"));
/// ```
pub fn split_owner_and_repo_name(full_name: &str) -> (&str, &str) {
    full_name.split_once('/').unwrap_or(("", full_name))
}
