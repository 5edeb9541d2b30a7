use anyhow::Context;
use clap::{Parser, Subcommand};

use packsite_core::{
    classify_host, content_for, nav_items, BrandId, BrandRegistry, ContentKey, HostContext,
    UrlResolver,
};

#[derive(Debug, Parser)]
#[command(name = "packsite-cli")]
#[command(about = "Packsite brand-resolution command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Classify a hostname and print the brand it resolves to.
    Resolve {
        hostname: String,
        /// Emit machine-readable JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Validate the brand registry and content tables.
    Validate,
    /// Print a brand's full configuration as JSON.
    Show { brand: String },
    /// Print a brand's navigation menu.
    Nav { brand: String },
    /// Print one content slot for a brand.
    Content { brand: String, key: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let registry = BrandRegistry::builtin();

    let output = match cli.command {
        Commands::Resolve { hostname, json } => resolve_output(&registry, &hostname, json)?,
        Commands::Validate => validate_output(&registry)?,
        Commands::Show { brand } => {
            let brand = parse_brand(&brand)?;
            serde_json::to_string_pretty(registry.get(brand))?
        }
        Commands::Nav { brand } => {
            let brand = parse_brand(&brand)?;
            serde_json::to_string_pretty(nav_items(brand))?
        }
        Commands::Content { brand, key } => {
            let brand = parse_brand(&brand)?;
            let key: ContentKey = key.parse()?;
            serde_json::to_string_pretty(content_for(key, brand))?
        }
    };

    println!("{output}");
    Ok(())
}

fn parse_brand(slug: &str) -> anyhow::Result<BrandId> {
    BrandId::parse_slug(slug).with_context(|| {
        let known: Vec<&str> = BrandId::ALL.iter().map(|b| b.slug()).collect();
        format!("unknown brand '{slug}'; expected one of: {}", known.join(", "))
    })
}

fn resolve_output(
    registry: &BrandRegistry,
    hostname: &str,
    json: bool,
) -> anyhow::Result<String> {
    let host = Some(hostname).filter(|h| !h.is_empty());
    let brand = classify_host(host);
    let resolver = UrlResolver::new();
    let base_url = resolver.base_url(brand, &HostContext::new(host.map(ToOwned::to_owned), None));

    if json {
        let value = serde_json::json!({
            "hostname": hostname,
            "brand": brand,
            "name": registry.get(brand).name,
            "base_url": base_url,
        });
        Ok(serde_json::to_string_pretty(&value)?)
    } else {
        Ok(format!(
            "{hostname} -> {} ({}) [{base_url}]",
            brand,
            registry.get(brand).name
        ))
    }
}

fn validate_output(registry: &BrandRegistry) -> anyhow::Result<String> {
    registry.validate().context("brand registry invalid")?;
    packsite_core::content::validate_content().context("content tables invalid")?;
    Ok(format!(
        "ok: {} brands, {} content slots",
        BrandId::ALL.len(),
        ContentKey::ALL.len()
    ))
}
