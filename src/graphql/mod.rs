//! GraphQL schema, resolvers and HTTP server for items.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! itemql serve --port 8000
//!
//! # Execute a query from CLI
//! itemql query '{ items { id name description } }'
//!
//! # Execute a mutation from CLI
//! itemql mutate 'createItem(name: "Widget", description: "A gadget") { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `items`, `item`
//! - **Mutations**: `createItem`, `updateItem`, `deleteItem`

mod schema;
mod server;
mod types;

pub use schema::{DELETED_MESSAGE, ItemSchema, MutationRoot, QueryRoot, build_schema, schema_sdl};
pub use server::{router, run_server};
pub use types::*;
