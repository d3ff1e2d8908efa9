//! Venn - multi-currency business banking client
//!
//! This library provides the core of the Venn banking client: a read-only
//! catalog of accounts, cards, beneficiaries and invoices, the persisted
//! session and theme stores, a single-slot notice dispatcher, and the wizard
//! state machine behind every money-movement flow.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `models`: Core data models (accounts, transactions, cards, money, etc.)
//! - `catalog`: The static dataset and views derived from it
//! - `display`: Terminal formatting
//! - `storage`: The key-value store behind session and theme persistence
//! - `session`, `theme`, `notice`: Application state stores
//! - `nav`: Routes and the auth gate
//! - `wizard`: The generic flow state machine and the concrete flows
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use venn_cli::config::{Settings, VennPaths};
//!
//! let paths = VennPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod nav;
pub mod notice;
pub mod session;
pub mod storage;
pub mod theme;
pub mod wizard;

pub use error::{VennError, VennResult};
