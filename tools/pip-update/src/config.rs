//! Run configuration, built once from the parsed command line

/// Immutable settings for one upgrade run
#[derive(Debug, Clone, Default)]
pub struct UpdateConfig {
    /// Python launcher version selector (e.g. "-3.12"). Honored through the
    /// Windows `py` launcher; a no-op elsewhere.
    pub version: Option<String>,
    /// Only upgrade packages that no other installed package depends on
    pub not_required: bool,
    /// Use pip's eager upgrade strategy (dependencies are upgraded too)
    pub eager: bool,
    /// Skip the interactive confirmation prompt
    pub assume_yes: bool,
}

impl UpdateConfig {
    /// Whether this run should list installed runtimes instead of upgrading
    ///
    /// `-0` is the launcher's own "list versions" selector.
    pub fn lists_runtimes(&self) -> bool {
        self.version.as_deref() == Some("-0")
    }

    /// Whether the eager warning should be shown before confirming
    ///
    /// Eager upgrading only widens the set when the candidate list was
    /// narrowed to not-required packages; otherwise everything outdated is
    /// already in the list.
    pub fn eager_warning(&self) -> bool {
        self.eager && self.not_required
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_zero_selects_runtime_listing() {
        let config = UpdateConfig {
            version: Some("-0".to_string()),
            ..Default::default()
        };
        assert!(config.lists_runtimes());
        assert!(!UpdateConfig::default().lists_runtimes());
    }

    #[test]
    fn eager_warning_requires_both_flags() {
        let both = UpdateConfig {
            eager: true,
            not_required: true,
            ..Default::default()
        };
        let eager_only = UpdateConfig {
            eager: true,
            ..Default::default()
        };
        assert!(both.eager_warning());
        assert!(!eager_only.eager_warning());
    }
}
