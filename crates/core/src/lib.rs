//! Domain logic for the MTA hosting optimizer.
//!
//! Holds the host inventory, the efficiency classifier and threshold
//! resolution. Nothing here knows about HTTP; the `api` crate wires these
//! pieces to the wire contract.

pub mod classifier;
pub mod error;
pub mod inventory;
pub mod threshold;
