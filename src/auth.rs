//! Caller-supplied credentials, purchase identifiers, and the short-lived access token.

pub mod credentials;
pub mod id;
pub mod purchase;
pub mod token;

pub use credentials::*;
pub use id::*;
pub use purchase::*;
pub use token::{record::*, secret::*};
