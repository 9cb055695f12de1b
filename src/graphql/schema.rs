use async_graphql::extensions::Tracing;
use async_graphql::{Context, EmptySubscription, Object, ResultExt, Schema};

use crate::error::ItemError;
use crate::model::NewItem;
use crate::storage::ItemRepository;

use super::types::Item;

pub type ItemSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Message returned by a successful `deleteItem`.
pub const DELETED_MESSAGE: &str = "Item deleted";

/// Build the executable schema around an already-connected repository.
pub fn build_schema(repo: ItemRepository) -> ItemSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .extension(Tracing)
        .data(repo)
        .finish()
}

/// Render the schema SDL. Needs no database.
pub fn schema_sdl() -> String {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .finish()
        .sdl()
}

fn get_repo<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a ItemRepository> {
    ctx.data::<ItemRepository>()
}

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List every item
    async fn items(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Item>> {
        let repo = get_repo(ctx)?;
        let items = repo.list().await.extend()?;
        Ok(items.into_iter().map(Item::from).collect())
    }

    /// Get a single item by ID, or null if it does not exist
    async fn item(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<Option<Item>> {
        let repo = get_repo(ctx)?;
        let item = repo.get(id).await.extend()?;
        Ok(item.map(Item::from))
    }
}

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Create a new item
    async fn create_item(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> async_graphql::Result<Item> {
        let repo = get_repo(ctx)?;
        let new_item = NewItem { name, description };
        let item = repo.create(&new_item).await.extend()?;
        Ok(item.into())
    }

    /// Replace the name and description of an existing item
    async fn update_item(
        &self,
        ctx: &Context<'_>,
        id: i32,
        name: String,
        description: String,
    ) -> async_graphql::Result<Item> {
        let repo = get_repo(ctx)?;
        let mut item = repo
            .get(id)
            .await
            .and_then(|found| found.ok_or(ItemError::NotFound(id)))
            .extend()?;

        item.apply(name, description);
        let item = repo.update(&item).await.extend()?;
        Ok(item.into())
    }

    /// Delete an item permanently
    async fn delete_item(&self, ctx: &Context<'_>, id: i32) -> async_graphql::Result<String> {
        let repo = get_repo(ctx)?;
        repo.get(id)
            .await
            .and_then(|found| found.ok_or(ItemError::NotFound(id)))
            .extend()?;

        repo.delete(id).await.extend()?;
        Ok(DELETED_MESSAGE.to_string())
    }
}
