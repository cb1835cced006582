//! Facade crate for `SunlightHub` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Call [`init`] to register feature slices; extend as new slices appear.
//! - Merge [`server::pages_router`] and [`server::router::system_router`]
//!   into the application router.

use shub_domain::config::AppConfig;
pub use shub_domain as domain;
pub use shub_kernel as kernel;

pub mod server {
    use axum::Router;
    use shub_kernel::server::AppState;

    pub mod router {
        pub use shub_kernel::server::router::system_router;
    }

    /// Routes contributed by the page slices.
    #[must_use]
    pub fn pages_router() -> Router<AppState> {
        Router::new().merge(shub_contact::router()).merge(shub_foia::router())
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use shub_contact as contact;
    pub use shub_foia as foia;

    /// Build-time enabled features.
    pub const ENABLED: &[&str] =
        &[shub_domain::constants::CONTACT, shub_domain::constants::FOIA];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(
    config: &AppConfig,
) -> Result<Vec<domain::registry::InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Contact
    slices.push(features::contact::init(config)?);

    // FOIA Toolkit
    slices.push(features::foia::init()?);

    Ok(slices)
}
