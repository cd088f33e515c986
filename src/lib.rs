//! questions - Question bank HTTP service
//!
//! Serves a bank of multiple-choice exam questions over HTTP. The whole bank
//! is stored as one JSON document that is re-read on every request and
//! rewritten on every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod http;
pub mod infrastructure;

pub use error::QuestionsError;
