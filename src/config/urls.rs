//! Registration server URLs

/// Canonical registration server
pub const CANONICAL_REGISTRATION_SERVER: &str = "https://scc.suse.com";

/// Secondary (mirror) registration server
pub const SECONDARY_REGISTRATION_SERVER: &str = "https://smt.suse.de";

/// Legacy registration server
pub const LEGACY_REGISTRATION_SERVER: &str = "https://legacy.suse.de";
