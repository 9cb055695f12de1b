use sqlx::SqlitePool;

use crate::{
    error::{ItemError, Result},
    model::{Item, NewItem},
};

/// CRUD access to the `items` table.
///
/// Cloning is cheap: clones share the same connection pool. Every method
/// checks out its own connection and returns it to the pool when the guard
/// drops, whether the statement succeeded or not.
#[derive(Clone, Debug)]
pub struct ItemRepository {
    pool: SqlitePool,
}

impl ItemRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// All items in storage order.
    pub async fn list(&self) -> Result<Vec<Item>> {
        let mut conn = self.pool.acquire().await?;
        let items = sqlx::query_as::<_, Item>("SELECT id, name, description FROM items")
            .fetch_all(&mut *conn)
            .await?;
        tracing::debug!(count = items.len(), "Listed items");
        Ok(items)
    }

    /// Point lookup by id. A missing row is `Ok(None)`, not an error.
    pub async fn get(&self, id: i32) -> Result<Option<Item>> {
        let mut conn = self.pool.acquire().await?;
        let item =
            sqlx::query_as::<_, Item>("SELECT id, name, description FROM items WHERE id = ?")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        tracing::debug!(id, found = item.is_some(), "Fetched item");
        Ok(item)
    }

    pub async fn create(&self, new_item: &NewItem) -> Result<Item> {
        let mut conn = self.pool.acquire().await?;
        let item = sqlx::query_as::<_, Item>(
            "INSERT INTO items (name, description) VALUES (?, ?) RETURNING id, name, description",
        )
        .bind(&new_item.name)
        .bind(&new_item.description)
        .fetch_one(&mut *conn)
        .await?;
        tracing::info!(id = item.id, name = %item.name, "Created item");
        Ok(item)
    }

    /// Overwrite name and description of an existing row.
    ///
    /// Fails with [`ItemError::NotFound`] when no row has `item.id`.
    pub async fn update(&self, item: &Item) -> Result<Item> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("UPDATE items SET name = ?, description = ? WHERE id = ?")
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(item.id));
        }

        tracing::info!(id = item.id, name = %item.name, "Updated item");
        Ok(item.clone())
    }

    /// Hard-delete a row. Fails with [`ItemError::NotFound`] when it does not exist.
    pub async fn delete(&self, id: i32) -> Result<()> {
        let mut conn = self.pool.acquire().await?;
        let result = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ItemError::NotFound(id));
        }

        tracing::info!(id, "Deleted item");
        Ok(())
    }
}
