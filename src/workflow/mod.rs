//! Workflow module
//!
//! This module contains components for orchestrating the workflow steps.

mod context;
mod engine;

pub use context::{PlannedOperation, WorkflowContext, WorkflowStats};
pub use engine::{ProcessingOptions, process_files, run};
