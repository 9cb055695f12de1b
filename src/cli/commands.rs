use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "itemql")]
#[command(author, version, about = "A small GraphQL CRUD service for items")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .itemql.yml by default)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Database URL (overrides config), e.g. sqlite://items.db
    #[arg(long, global = true, env = "ITEMQL_DATABASE_URL")]
    pub database_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true)]
    pub log_file: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .itemql.yml in the current directory
    Init,

    /// Start GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Endpoint path for the GraphQL API
        #[arg(long)]
        path: Option<String>,
    },

    /// Execute a GraphQL query
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,
    },

    /// Print the GraphQL schema (SDL)
    Schema,
}
