//! Core library for the `thor` CLI.
//!
//! `thor` points a number of parallel hammers at one URL. Each hammer throws a
//! fixed number of sequential HTTP GETs, prints the elapsed time of every
//! throw, and reports its average; the run closes with the mean of all hammer
//! averages. The primary interface is the `thor` binary; library APIs follow
//! its needs.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod hammer;
pub mod http;
pub mod metrics;
pub mod report;
pub mod shutdown;

mod logger;
mod shutdown_handlers;

#[cfg(feature = "fuzzing")]
pub mod fuzzing;
