//! Version string logged on startup and shown by the demos.

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
const GIT_SHA: Option<&str> = option_env!("VERGEN_GIT_SHA");

/// Returns `version (short hash)`.
///
/// The hash is `unknown` when the crate was built outside a git checkout.
#[must_use]
pub fn build_version() -> String {
    let hash = GIT_SHA.map_or("unknown", |sha| sha.get(..8).unwrap_or(sha));
    format!("{PKG_VERSION} ({hash})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_version_starts_with_package_version() {
        let version = build_version();
        assert!(version.starts_with(PKG_VERSION));
        assert!(version.ends_with(')'));
    }
}
