//! Focular UI State Layer
//!
//! Reactive state synchronization for the Focular media catalog. Holds the
//! catalog, filter/ordering, alert, and preferences stores, and a request
//! gateway that forwards every command to the external backend through the
//! `ContentBridge` trait, mirroring results back into the stores.

pub mod bridge;
pub mod error;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod store;
pub mod views;
