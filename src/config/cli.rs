use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "skilled-helpers")]
#[command(about = "Browse and extend the local skilled-helpers directory")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override storage.data_dir from the config
    #[arg(long)]
    pub data_dir: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List the category taxonomy
    Categories,
    /// List workers, optionally filtered
    Workers {
        #[arg(long, default_value = "All")]
        category: String,
        #[arg(long, default_value = "")]
        query: String,
    },
    /// List marketplace products
    Products,
    /// Add a worker profile
    AddWorker(WorkerArgs),
    /// Add a marketplace product
    AddProduct(ProductArgs),
    /// Ask the helper which category fits a problem description
    Suggest { symptoms: String },
    /// Drop everything added and restore the built-in listings
    Reset,
}

#[derive(Debug, Clone, Args)]
pub struct WorkerArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    /// Comma separated list of services
    #[arg(long, default_value = "")]
    pub services: String,
    #[arg(long, default_value = "")]
    pub description: String,
    #[arg(long, default_value = "")]
    pub rate: String,
    #[arg(long, default_value = "")]
    pub location: String,
    #[arg(long, default_value = "")]
    pub phone: String,
    #[arg(long, default_value = "")]
    pub image: String,
}

#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, default_value = "")]
    pub category: String,
    #[arg(long, default_value = "")]
    pub price: String,
    #[arg(long, default_value = "")]
    pub image: String,
}
