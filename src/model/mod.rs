//! Data models for itemql.
//!
//! - [`Item`]: a persisted row of the `items` table
//! - [`NewItem`]: the fields supplied when inserting an item

mod item;

pub use item::{Item, NewItem};
