//! Entity and tag strings shared across slices.

/// OpenAPI tag for system endpoints.
pub const SYSTEM_TAG: &str = "System";

/// Slice name for the contact feature.
pub const CONTACT: &str = "contact";
/// Slice name for the FOIA toolkit feature.
pub const FOIA: &str = "foia";

/// Route paths served by the page slices.
pub const CONTACT_PATH: &str = "/contact";
pub const FOIA_PATH: &str = "/foia";

/// Statutory response window for Virginia FOIA requests, in business days.
pub const FOIA_RESPONSE_DAYS: u8 = 5;
