/// Path prefix for every location lookup endpoint
pub const API_PREFIX: &str = "/api/location";

// =============================================================================
// CORS
// =============================================================================

pub const CORS_ALLOW_ORIGIN: &str = "*";

pub const CORS_ALLOW_METHODS: &str = "*";

/// Request headers browsers may send on cross-origin calls
pub const CORS_ALLOW_HEADERS: &str = "Content-Type, Content-Length, Accept-Encoding, X-CSRF-Token, Authorization, accept, origin, Cache-Control, X-Requested-With";
