//! # itemql - a small GraphQL CRUD service
//!
//! itemql exposes a single `Item` entity (`id`, `name`, `description`) through a
//! GraphQL API backed by one SQLite table.
//!
//! ## Quick Start
//!
//! ```bash
//! # Start the server on http://127.0.0.1:8000/graphql
//! itemql serve
//!
//! # Create an item
//! itemql mutate 'createItem(name: "Widget", description: "A gadget") { id name }'
//!
//! # List items
//! itemql query '{ items { id name description } }'
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema, resolvers and HTTP server
//! - [`model`]: Data models (`Item`, `NewItem`)
//! - [`storage`]: SQLite storage layer

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.itemql.yml` configuration files.
pub mod config;

/// Error types and result aliases.
///
/// Defines `ItemError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema and the axum server that hosts it.
pub mod graphql;

pub mod logging;

/// Data models for items.
pub mod model;

/// SQLite storage layer.
///
/// One connection is checked out of the pool per operation.
pub mod storage;
