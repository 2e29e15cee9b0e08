//! Facade crate for the Podium conference scheduler.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it composes other crates, it does not implement scheduling rules.
//!
//! ## Usage
//! - Add `podium` with the desired feature flags (`scheduling`/`registry`, both on by default).
//! - Call [`init`] once at startup to build every enabled slice.

pub use podium_domain as domain;
pub use podium_kernel as kernel;

use podium_domain::config::PodiumConfig;
use podium_domain::registry::{FeatureSlice, InitializedSlice};

/// Feature registry for runtime introspection.
pub mod features {
    #[cfg(feature = "registry")]
    pub use podium_registry as registry;
    #[cfg(feature = "scheduling")]
    pub use podium_scheduling as scheduling;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "scheduling")]
        "scheduling",
        #[cfg(feature = "registry")]
        "registry",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &PodiumConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    #[cfg(feature = "scheduling")]
    slices.push(features::scheduling::init(config)?);

    #[cfg(feature = "registry")]
    slices.push(features::registry::init(config)?);

    #[cfg(not(any(feature = "scheduling", feature = "registry")))]
    let _ = config;

    tracing::debug!(slices = slices.len(), "Feature slices initialized");
    Ok(slices)
}

/// Finds the initialized slice of type `T`.
#[must_use]
pub fn slice<T: FeatureSlice>(slices: &[InitializedSlice]) -> Option<&T> {
    slices.iter().find_map(InitializedSlice::downcast_ref::<T>)
}
