//! Verification run configuration.

/// Tunables for one verification run.
///
/// Compatibility problems are always collected - they are the engine's reason
/// to exist. The switches here govern the informational side-channel only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationConfig {
    /// Record usages of deprecated classes, methods, and fields.
    pub collect_deprecated_usages: bool,
    /// Record usages of classes, methods, and fields marked experimental.
    pub collect_experimental_usages: bool,
}

impl VerificationConfig {
    /// Collect problems and every kind of API usage.
    ///
    /// This is also the [`Default`].
    #[must_use]
    pub fn full() -> Self {
        VerificationConfig {
            collect_deprecated_usages: true,
            collect_experimental_usages: true,
        }
    }

    /// Collect compatibility problems only, skipping the usage side-channel.
    #[must_use]
    pub fn problems_only() -> Self {
        VerificationConfig {
            collect_deprecated_usages: false,
            collect_experimental_usages: false,
        }
    }
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self::full()
    }
}
