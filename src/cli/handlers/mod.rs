mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::{ServeParams, handle_serve};

use crate::config::ItemqlConfig;
use crate::error::Result;
use crate::graphql::{ItemSchema, build_schema};
use crate::storage::{self, ItemRepository};

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: ItemqlConfig,
}

impl CommandContext {
    pub fn new(config: ItemqlConfig) -> Self {
        Self { config }
    }

    /// Connect to the configured database, creating the table if needed.
    pub async fn repository(&self) -> Result<ItemRepository> {
        let pool = storage::connect(&self.config.database).await?;
        Ok(ItemRepository::new(pool))
    }

    pub async fn schema(&self) -> Result<ItemSchema> {
        Ok(build_schema(self.repository().await?))
    }
}

/// Parse `--variables` JSON, defaulting to no variables.
fn parse_variables(variables: Option<String>) -> anyhow::Result<async_graphql::Variables> {
    let vars = match variables {
        Some(v) => serde_json::from_str(&v)?,
        None => async_graphql::Variables::default(),
    };
    Ok(vars)
}

/// Execute a document against the configured database and print the JSON response.
fn execute_and_print(
    ctx: &CommandContext,
    document: &str,
    variables: Option<String>,
) -> anyhow::Result<()> {
    let vars = parse_variables(variables)?;
    let request = async_graphql::Request::new(document).variables(vars);

    let response = tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema().await?;
        anyhow::Ok(schema.execute(request).await)
    })?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
