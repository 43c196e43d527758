//! Culture administration tool.
//!
//! Usage:
//!   site-culture list
//!   site-culture add <name>
//!   site-culture delete <name>
//!   site-culture get <id>
//!   site-culture resolve [--query v] [--cookie v] [--accept-language v]
//!
//! Environment variables (all optional):
//! - DATABASE_PATH (defaults to data/cultures.db)
//! - SITE_CULTURE
//! - SEED_CULTURES (comma-separated, added when the store is empty)
//! - CULTURE_COOKIE_NAME / CULTURE_QUERY_PARAM (default to "culture")

use anyhow::{bail, Context, Result};
use std::path::Path;
use tracing::{debug, info};

use site_culture::config::Config;
use site_culture::selectors::{
    AcceptLanguageSelector, CookieCultureSelector, QueryCultureSelector, SiteCultureSelector,
};
use site_culture::{CultureRegistry, CultureResolver, RequestContext, SqliteStore};

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("site_culture=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    let args: Vec<String> = std::env::args().skip(1).collect();

    let registry = open_registry(&config)?;

    match args.first().map(String::as_str) {
        Some("list") => {
            for culture in registry.list_cultures()? {
                println!("{}", culture);
            }
        }
        Some("add") => {
            let name = required_arg(&args, 1, "culture name")?;
            let record = registry
                .add_culture(name)
                .with_context(|| format!("Failed to add culture {}", name))?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Some("delete") => {
            let name = required_arg(&args, 1, "culture name")?;
            registry
                .delete_culture(name)
                .with_context(|| format!("Failed to delete culture {}", name))?;
        }
        Some("get") => {
            let id: i64 = required_arg(&args, 1, "culture id")?
                .parse()
                .context("Culture id must be an integer")?;
            match registry.get_culture_by_id(id)? {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => bail!("No culture with id {}", id),
            }
        }
        Some("resolve") => {
            let request = request_from_args(&config, &args[1..])?;
            let resolver = build_resolver(&config);
            debug!("Resolving with {} selectors", resolver.selector_count());
            match resolver.resolve_or_default(&request) {
                Some(culture) => println!("{}", culture),
                None => info!("No culture resolved and no site culture configured"),
            }
        }
        Some(other) => bail!("Unknown command: {}", other),
        None => bail!("Usage: site-culture <list|add|delete|get|resolve> [args]"),
    }

    Ok(())
}

fn open_registry(config: &Config) -> Result<CultureRegistry<SqliteStore>> {
    if let Some(parent) = Path::new(&config.database_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
    }

    let store = SqliteStore::new(&config.database_path)
        .with_context(|| format!("Failed to open database at {}", config.database_path))?;
    let registry = CultureRegistry::new(store);

    if !config.seed_cultures.is_empty() && registry.list_cultures()?.is_empty() {
        for culture in &config.seed_cultures {
            registry
                .add_culture(culture)
                .with_context(|| format!("Invalid seed culture {}", culture))?;
        }
        info!("Seeded {} cultures", config.seed_cultures.len());
    }

    Ok(registry)
}

fn build_resolver(config: &Config) -> CultureResolver<RequestContext> {
    let mut resolver = CultureResolver::new()
        .with_selector(QueryCultureSelector::new(config.query_param.as_str()))
        .with_selector(CookieCultureSelector::new(config.cookie_name.as_str()))
        .with_selector(AcceptLanguageSelector::new());

    if let Some(site) = config.site() {
        resolver.register(SiteCultureSelector::new(site.clone()));
        resolver = resolver.with_site(site);
    }

    resolver
}

fn request_from_args(config: &Config, args: &[String]) -> Result<RequestContext> {
    let mut request = RequestContext::new();
    let mut iter = args.iter();

    while let Some(flag) = iter.next() {
        let value = iter
            .next()
            .with_context(|| format!("Missing value for {}", flag))?;
        request = match flag.as_str() {
            "--query" => request.with_query(config.query_param.as_str(), value.as_str()),
            "--cookie" => request.with_cookie(config.cookie_name.as_str(), value.as_str()),
            "--accept-language" => request.with_header("Accept-Language", value.as_str()),
            other => bail!("Unknown option: {}", other),
        };
    }

    Ok(request)
}

fn required_arg<'a>(args: &'a [String], index: usize, what: &str) -> Result<&'a str> {
    args.get(index)
        .map(String::as_str)
        .with_context(|| format!("Missing {}", what))
}
