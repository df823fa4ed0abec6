//! Adapter implementations
//!
//! Adapters implement the port traits with concrete lookups:
//! - Name-keyed extension registry for the ExtensionResolver port

pub mod registry;

pub use registry::ExtensionRegistry;
