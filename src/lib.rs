//! Walaoe: a terminal client that asks a remote generation service for an
//! HTML article about a keyword, then lets the user read, copy, or hand the
//! result to an external editor.
//!
//! The request lifecycle lives in [`article`], auxiliary reactions in
//! [`effects`], and every external boundary (network, clipboard, persisted
//! preferences) sits behind a trait so the core can run without a terminal.

pub mod article;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod effects;
pub mod generate;
pub mod logging;
pub mod mvi;
pub mod preferences;
pub mod ui;
