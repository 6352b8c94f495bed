//! Entities and table operations for the autoscaler's relational store.
//!
//! Each module owns exactly one table. Operations take the pool explicitly
//! and never read a clock: every timestamp is supplied by the caller.

pub mod errors;
pub mod db;
pub mod enums;
pub mod range;
pub mod schedule;
pub mod scaling_policy;
pub mod instance_metric;
pub mod app_metric;
pub mod policy;
pub mod cooldown;
pub mod scaling_history;
pub mod active_schedule;
pub mod scheduler_active_schedule;

pub use errors::StoreError;
pub use sea_orm::{DatabaseConnection, Order};

#[cfg(test)]
mod tests;
