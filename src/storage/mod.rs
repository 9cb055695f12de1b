//! SQLite storage layer for items.
//!
//! Items live in a single `items` table:
//!
//! ```sql
//! CREATE TABLE items (
//!     id          INTEGER PRIMARY KEY,
//!     name        TEXT NOT NULL,
//!     description TEXT NOT NULL
//! );
//! ```
//!
//! ## Components
//!
//! - [`connect`]: open a connection pool and create the table if missing
//! - [`ensure_schema`]: idempotent table and index creation
//! - [`ItemRepository`]: CRUD operations for items

mod db;
mod repository;

pub use db::{connect, ensure_schema};
pub use repository::ItemRepository;
