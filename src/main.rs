use clap::Parser;
use product_client::config::cli::Command;
use product_client::utils::{logger, validation::Validate};
use product_client::{
    ApiConfig, CliConfig, PageRequest, ProductApi, ProductService, RelatedQuery, SearchFilter,
    TomlConfig,
};
use serde_json::Value;

fn load_api_config(cli: &CliConfig) -> product_client::Result<(ApiConfig, Option<TomlConfig>)> {
    match &cli.config {
        Some(path) => {
            let toml_config = TomlConfig::from_file(path)?;
            toml_config.validate()?;
            Ok((toml_config.api_config(), Some(toml_config)))
        }
        None => {
            let api_config = cli.api_config();
            api_config.validate()?;
            Ok((api_config, None))
        }
    }
}

async fn run<A: ProductApi>(api: &A, command: Command) -> product_client::Result<Value> {
    let output = match command {
        Command::List { page, size } => {
            let response = api.list_products(PageRequest::new(page, size)).await?;
            tracing::debug!("List responded with {}", response.status);
            response.into_data()
        }
        Command::Get { id } => api.get_product_by_id(&id).await?,
        Command::Search {
            brand,
            category,
            page,
            size,
        } => {
            let filter = SearchFilter {
                brand,
                category,
                page,
                size,
            };
            api.search_products(&filter).await?
        }
        Command::Related {
            id,
            brand_id,
            category_ids,
            limit,
        } => {
            let query = RelatedQuery {
                brand_id,
                category_ids,
                limit,
            };
            Value::Array(api.get_related_products(&id, &query).await)
        }
        Command::Images => api.get_all_product_images().await?.into_data(),
    };

    Ok(output)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let (api_config, toml_config) = match load_api_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            logger::init_cli_logger(cli.verbose);
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    let verbose = cli.verbose || toml_config.as_ref().is_some_and(|c| c.verbose_logging());
    let json_logs = cli.json_logs || toml_config.as_ref().is_some_and(|c| c.json_logging());
    if json_logs {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::debug!("Using catalog at {}", api_config.base_url);
    let service = ProductService::new(api_config);

    match run(&service, cli.command).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            if let Some(status) = e.status() {
                eprintln!("Request failed with status {}: {}", status, e);
            } else {
                eprintln!("Request failed: {}", e);
            }
            std::process::exit(1);
        }
    }
}
