//! `stockroom-auth` — role-gated capabilities.
//!
//! Authentication itself (tokens, login) is handled by the backend. This crate
//! only answers "what may this role do in the dashboard", as pure functions the
//! view layer consumes instead of scattering role checks.

pub mod authorize;
pub mod capabilities;
pub mod roles;

pub use authorize::{authorize, explain, AuthorizationExplanation, AuthzError};
pub use capabilities::{capabilities, Capabilities, Capability};
pub use roles::Role;
