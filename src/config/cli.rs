use crate::config::{ApiConfig, DEFAULT_BASE_URL};
use crate::domain::model::ProductId;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "product-client")]
#[command(about = "Query the product catalog API from the command line")]
pub struct CliConfig {
    #[arg(long, env = "PRODUCT_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[arg(long, help = "TOML config file; overrides --base-url")]
    pub config: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// List products page by page
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        size: u32,
    },
    /// Fetch a single product
    Get { id: ProductId },
    /// Search by brand and/or category
    Search {
        #[arg(long)]
        brand: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        size: Option<u32>,
    },
    /// Products related to the given one
    Related {
        id: ProductId,
        #[arg(long)]
        brand_id: Option<ProductId>,
        #[arg(long, value_delimiter = ',')]
        category_ids: Vec<ProductId>,
        #[arg(long, default_value_t = 4)]
        limit: u32,
    },
    /// All product images
    Images,
}

impl CliConfig {
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig::new(self.base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PageRequest;

    #[test]
    fn test_parse_related_command() {
        let cli = CliConfig::parse_from([
            "product-client",
            "--base-url",
            "http://localhost:9000",
            "related",
            "42",
            "--brand-id",
            "3",
            "--category-ids",
            "1,2",
        ]);

        assert_eq!(cli.api_config().base_url, "http://localhost:9000");
        match cli.command {
            Command::Related {
                id,
                brand_id,
                category_ids,
                limit,
            } => {
                assert_eq!(id, ProductId::from(42u64));
                assert_eq!(brand_id, Some(ProductId::from(3u64)));
                assert_eq!(category_ids, vec![ProductId::from(1u64), ProductId::from(2u64)]);
                assert_eq!(limit, 4);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = CliConfig::parse_from(["product-client", "list"]);

        match cli.command {
            Command::List { page, size } => {
                assert_eq!(PageRequest::new(page, size), PageRequest::default());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
