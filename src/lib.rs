//! Tool Dispatch - tool selection and dispatch for a conversational assistant
//!
//! A language model classifies the conversation into candidate tool
//! identifiers; deterministic policy (confirmation gating and deduplication)
//! turns them into the tool set offered on the next turn. Server-side tools
//! are then dispatched to notification and bundle-analytics collaborators.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
