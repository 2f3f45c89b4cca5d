//! Top-level facade crate for TagWarden.
//!
//! Re-exports core types and the service library so users can depend on a single crate.

pub mod core {
    pub use tagwarden_core::*;
}

pub mod service {
    pub use tagwarden_service::*;
}
