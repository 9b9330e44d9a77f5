//! System-wide constants for the Sigmarket settlement engine.

/// Structured-data signing domain name. Part of the wire format: changing
/// it invalidates every previously issued order signature.
pub const SIGNING_DOMAIN_NAME: &str = "Sigmarket Exchange";

/// Structured-data signing domain version. Bumped only with a coordinated
/// redeployment; signatures do not survive a bump.
pub const SIGNING_DOMAIN_VERSION: &str = "4";

/// Canonical prefix of the sell-order signing payload. Encodes the domain
/// name and version above; byte-for-byte stable within a deployed version.
pub const SELL_ORDER_PAYLOAD_PREFIX: &[u8] = b"sigmarket:sell-order:v4:";

/// Denominator for maker-fee basis points (10_000 bps = 100%).
pub const FEE_DENOMINATOR: u128 = 10_000;

/// Maximum configurable maker fee, in basis points.
pub const MAX_FEE_BPS: u16 = 10_000;

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "Sigmarket";
