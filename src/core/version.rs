//! Build metadata from the generated version.rs, shared by the CLI and logs.

include!(concat!(env!("OUT_DIR"), "/version.rs"));

/// Build time string from the build script (UTC)
pub fn build_time() -> &'static str {
    BUILD_TIME
}

/// Short git hash captured by the build script
pub fn git_hash() -> &'static str {
    GIT_HASH
}

/// Version line used for `--version` and the startup banner
pub fn long_version() -> String {
    format!(
        "{} ({}, built {})",
        env!("CARGO_PKG_VERSION"),
        git_hash(),
        build_time()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_version_mentions_package_and_hash() {
        let version = long_version();
        assert!(version.starts_with(env!("CARGO_PKG_VERSION")));
        assert!(version.contains(git_hash()));
        assert!(!build_time().is_empty());
    }
}
