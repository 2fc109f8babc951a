//! Network URL constants for the Zora Pulse SDK.

/// Default GraphQL API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.zora.co/graphql";
