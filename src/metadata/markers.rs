//! API status markers and class origin tags.
//!
//! Deprecation and experimental-API information rides along with the metadata so
//! the verification engine can record usages of marked APIs without treating them
//! as linkage problems. Resolvers populate these from whatever source they parse
//! (the `Deprecated` attribute, `@Deprecated(forRemoval = ...)`, `@ApiStatus.*`
//! annotations); the engine only reads them.

/// Deprecation details for a class or member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Deprecation {
    /// The API is scheduled for removal (`@Deprecated(forRemoval = true)`)
    pub for_removal: bool,
}

/// API status markers attached to classes, methods, and fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ApiMarkers {
    /// Deprecation status, `None` when the API is not deprecated
    pub deprecation: Option<Deprecation>,
    /// Marked as experimental and subject to incompatible change
    pub experimental: bool,
}

impl ApiMarkers {
    /// Markers for an undecorated API.
    #[must_use]
    pub fn none() -> Self {
        ApiMarkers::default()
    }

    /// Markers for a deprecated API, optionally scheduled for removal.
    #[must_use]
    pub fn deprecated(for_removal: bool) -> Self {
        ApiMarkers {
            deprecation: Some(Deprecation { for_removal }),
            experimental: false,
        }
    }

    /// Markers for an experimental API.
    #[must_use]
    pub fn experimental() -> Self {
        ApiMarkers {
            deprecation: None,
            experimental: true,
        }
    }

    /// True if any marker is set.
    #[must_use]
    pub fn any(&self) -> bool {
        self.deprecation.is_some() || self.experimental
    }
}

/// Which logical source a class was resolved from.
///
/// Purely informational; the engine treats all origins alike, but problem
/// consumers routinely filter on it (problems inside the verified subject
/// matter more than problems inside the runtime).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
pub enum ClassOrigin {
    /// Part of the set under verification
    #[strum(to_string = "subject")]
    Subject,
    /// Supplied by the verification classpath
    #[strum(to_string = "classpath")]
    Classpath,
    /// Part of the platform or runtime image
    #[strum(to_string = "runtime")]
    Runtime,
    /// The resolver did not say
    #[strum(to_string = "unknown")]
    Unknown,
}
