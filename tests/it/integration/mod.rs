//! Integration tests for multi-step workflows.

mod app_state_tests;
mod drag_workflow_tests;
mod resize_workflow_tests;
