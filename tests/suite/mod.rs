//! Integration test suite modules.

mod card_flow;
mod options;
