/// Whether the current platform can host the offline simulator bundle.
///
/// Offline installs need direct filesystem access, so this is a single
/// capability probe rather than target checks scattered through callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    Supported,
    Unsupported { reason: &'static str },
}

impl Capability {
    /// Detects filesystem capability for the current build target.
    pub fn detect() -> Self {
        #[cfg(target_family = "wasm")]
        {
            Self::Unsupported {
                reason: "no direct filesystem access on this platform",
            }
        }
        #[cfg(not(target_family = "wasm"))]
        {
            Self::Supported
        }
    }

    pub fn is_supported(self) -> bool {
        matches!(self, Self::Supported)
    }
}
