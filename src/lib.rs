//! Impactor - Asteroid Impact Estimates
//!
//! A library crate providing first-order impact consequence estimates,
//! deflection delta-v figures and access to a near-Earth-object catalog.

pub mod catalog;
pub mod config;
pub mod deflection;
pub mod demo;
pub mod impact;
pub mod logging;
pub mod request;
pub mod types;
