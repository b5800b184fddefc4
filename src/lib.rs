//! Scopelens - contract scope evaluation for freelancers
//!
//! This library classifies a feature request against an existing project's
//! contractual scope (in scope, out of scope, or partial) and, when extra
//! unbilled work is detected, produces an itemized hour/price estimate using
//! a local LLM over an OpenAI-compatible chat-completion API.

pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
