//! Proptest strategies for rangeq property-based testing
//!
//! Reusable strategies that generate valid sequences, operation streams and
//! constraint sets for the property tests across the workspace.

pub mod strategies;

pub use strategies::{
    strategy_base, strategy_min_constraints, strategy_operations, strategy_range,
    strategy_updates, strategy_value, strategy_workload,
};
