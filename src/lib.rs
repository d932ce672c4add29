//! Clipboard Monitor - live view of a host's clipboard history
//!
//! This crate polls a host runtime for clipboard history, renders it as a
//! list, and lets the user copy an entry back or clear the history.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Entries, status phrases, refresh state, config and errors
//! - **Application**: Bridge resolver, history store, renderer, use cases and port traits
//! - **Infrastructure**: Adapter implementations (host bridges, clipboard, config, surfaces)
//! - **CLI**: Command-line interface, argument parsing, and the monitor loop

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
