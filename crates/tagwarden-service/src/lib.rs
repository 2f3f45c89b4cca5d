//! TagWarden service library entry.
//!
//! This crate wires the policy store, collaborator clients, apply engine, and
//! HTTP glue into a cohesive governance service. It is intended to be
//! consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod collab;
pub mod config;
pub mod engine;
pub mod obs;
pub mod ops;
pub mod router;
pub mod store;
