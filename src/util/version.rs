pub const APP_NAME: &str = "Stageline";
pub const APP_TAGLINE: &str = "Book amazing performing artists";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const GIT_TAG: Option<&str> = option_env!("GIT_TAG");

/// Version string for the footer: the git tag when the build had one,
/// otherwise the crate version.
pub fn version_label() -> String {
    match GIT_TAG {
        Some(tag) => tag.to_string(),
        None => format!("v{APP_VERSION}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_is_never_empty() {
        assert!(version_label().starts_with('v') || GIT_TAG.is_some());
    }
}
