//! Shared helpers for the contacts backend test suites: one-time logging
//! setup and assertions for the problem+json error contract.

pub mod logging;
pub mod problem_details;
