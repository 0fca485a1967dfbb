//! Token secrets and the access token minted by the refresh grant.

pub mod record;
pub mod secret;
