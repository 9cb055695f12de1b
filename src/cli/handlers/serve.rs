use crate::graphql::run_server;
use anyhow::Result;

use super::CommandContext;

/// Command-line overrides for the server settings
pub struct ServeParams {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub path: Option<String>,
}

pub fn handle_serve(mut ctx: CommandContext, params: ServeParams) -> Result<()> {
    if let Some(host) = params.host {
        ctx.config.server.host = host;
    }
    if let Some(port) = params.port {
        ctx.config.server.port = port;
    }
    if let Some(path) = params.path {
        ctx.config.server.path = path;
    }

    let settings = ctx.config.server.clone();
    settings.validate()?;

    println!(
        "Starting GraphQL server on http://{}:{}{}",
        settings.host, settings.port, settings.path
    );
    println!(
        "GraphiQL: http://{}:{}{}",
        settings.host, settings.port, settings.path
    );

    tokio::runtime::Runtime::new()?.block_on(async {
        let schema = ctx.schema().await?;
        run_server(schema, &settings).await
    })?;
    Ok(())
}
