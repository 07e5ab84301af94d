//! Operator CLI for brand-boffin.
//!
//! Runs the same services as the HTTP API directly from a terminal, which is
//! the quickest way to confirm that AWS credentials and model access work.
//!
//! # Usage
//!
//! ```bash
//! # Check one domain
//! cargo run --bin boffin -- check example.com
//!
//! # Check several domains, one second apart
//! cargo run --bin boffin -- batch a.com b.io c.dev --delay-ms 1000
//!
//! # Registry suggestions, including taken names
//! cargo run --bin boffin -- suggest coffee.com --all --count 20
//!
//! # Price of one TLD
//! cargo run --bin boffin -- prices --tld com
//!
//! # Brand names, then check the derived .com domains
//! cargo run --bin boffin -- brands "eco travel gear" --style playful --check-domains
//! ```
//!
//! # Environment Variables
//!
//! Same as the server, see [`brand_boffin::config`]. AWS credentials come
//! from the default credential chain.

use brand_boffin::application::services::{BrandService, DomainService};
use brand_boffin::config;
use brand_boffin::domain::entities::{BrandNameRequest, DomainCheckResult};
use brand_boffin::server::build_services;
use brand_boffin::utils::brand_domain::domain_from_brand;
use brand_boffin::utils::domain_name::sanitize_domain;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::time::Duration;

/// CLI tool for brand-boffin.
#[derive(Parser)]
#[command(name = "boffin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check availability of one domain
    Check {
        domain: String,
    },

    /// Check several domains sequentially
    Batch {
        #[arg(required = true)]
        domains: Vec<String>,

        /// Pause between registry calls (defaults to BATCH_DELAY_MS)
        #[arg(long)]
        delay_ms: Option<u64>,
    },

    /// Show registry suggestions for a name
    Suggest {
        query: String,

        /// Include names that are already taken
        #[arg(long)]
        all: bool,

        #[arg(short, long, default_value_t = 10, value_parser = clap::value_parser!(u32).range(1..=50))]
        count: u32,
    },

    /// List TLD prices
    Prices {
        /// Only show this TLD
        #[arg(short, long)]
        tld: Option<String>,
    },

    /// Generate brand names
    Brands {
        /// Brand description (prompted for when omitted)
        prompt: Option<String>,

        #[arg(long)]
        industry: Option<String>,

        #[arg(long)]
        style: Option<String>,

        /// Keyword to include; may be repeated
        #[arg(short, long = "keyword")]
        keywords: Vec<String>,

        /// Approximate name length in characters
        #[arg(long)]
        length: Option<u32>,

        #[arg(short, long)]
        count: Option<usize>,

        /// Check the .com domain derived from each name
        #[arg(long)]
        check_domains: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let (domain_service, brand_service) = build_services(&config).await;

    match cli.command {
        Commands::Check { domain } => check(&domain_service, &domain).await?,
        Commands::Batch { domains, delay_ms } => {
            let delay = delay_ms
                .map(Duration::from_millis)
                .unwrap_or(domain_service.default_delay());
            batch(&domain_service, &domains, delay).await
        }
        Commands::Suggest { query, all, count } => {
            suggest(&domain_service, &query, !all, count).await
        }
        Commands::Prices { tld } => prices(&domain_service, tld.as_deref()).await?,
        Commands::Brands {
            prompt,
            industry,
            style,
            keywords,
            length,
            count,
            check_domains,
        } => {
            let prompt = match prompt {
                Some(p) => p,
                None => Input::new()
                    .with_prompt("Describe the brand")
                    .interact_text()?,
            };
            let request = BrandNameRequest {
                prompt,
                industry,
                style,
                keywords,
                length,
                count,
            };
            brands(&brand_service, &domain_service, &request, check_domains).await?
        }
    }

    Ok(())
}

async fn check(service: &DomainService, raw: &str) -> Result<()> {
    let domain = sanitize_domain(raw).context("Domain is empty after sanitizing")?;

    let result = service
        .check_domain(&domain)
        .await
        .map_err(|e| anyhow::anyhow!("Check failed: {}", e))?;

    print_results(&[result]);
    Ok(())
}

async fn batch(service: &DomainService, domains: &[String], delay: Duration) {
    println!(
        "{} {} domains, {}ms apart",
        "Checking".bright_blue().bold(),
        domains.len(),
        delay.as_millis()
    );
    println!();

    let results = service.check_domains(domains, delay).await;
    print_results(&results);
}

/// Prints one line per domain.
///
/// ```text
///   AVAILABLE  brandboffin.com
///   TAKEN      example.com
///   ERROR      bad.zzz  Invalid domain name or TLD: ...
/// ```
fn print_results(results: &[DomainCheckResult]) {
    for result in results {
        let label = match (&result.error, result.available) {
            (Some(_), _) => format!("{:<10}", "ERROR").red(),
            (None, true) => format!("{:<10}", "AVAILABLE").green().bold(),
            (None, false) => format!("{:<10}", "TAKEN").yellow(),
        };

        match &result.error {
            Some(error) => println!("  {} {}  {}", label, result.domain, error.bright_black()),
            None => println!("  {} {}", label, result.domain.cyan()),
        }
    }
    println!();
}

async fn suggest(service: &DomainService, query: &str, only_available: bool, count: u32) {
    let suggestions = service
        .get_domain_suggestions(query, only_available, count)
        .await;

    if suggestions.is_empty() {
        println!("{}", "  No suggestions".yellow());
        return;
    }

    for suggestion in &suggestions {
        let marker = if suggestion.available {
            "available".green()
        } else {
            "taken".bright_black()
        };
        println!("  {:<40} {}", suggestion.domain_name.cyan(), marker);
    }
    println!();
}

async fn prices(service: &DomainService, tld: Option<&str>) -> Result<()> {
    let prices = service
        .get_tld_prices(tld)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to fetch prices: {}", e))?;

    println!(
        "  {:<16} {:>12} {:>12} {:>12} {}",
        "TLD".bright_white().bold(),
        "Register".bright_white().bold(),
        "Renew".bright_white().bold(),
        "Transfer".bright_white().bold(),
        "Currency".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    let amount = |p: Option<f64>| p.map(|v| format!("{v:.2}")).unwrap_or_else(|| "-".to_string());
    for price in &prices {
        println!(
            "  {:<16} {:>12} {:>12} {:>12} {}",
            price.tld.cyan(),
            amount(price.registration_price),
            amount(price.renewal_price),
            amount(price.transfer_price),
            price.currency.as_deref().unwrap_or("-")
        );
    }

    println!();
    println!("  Total: {}", prices.len().to_string().bright_white().bold());
    Ok(())
}

async fn brands(
    brand_service: &BrandService,
    domain_service: &DomainService,
    request: &BrandNameRequest,
    check_domains: bool,
) -> Result<()> {
    let suggestions = brand_service
        .generate(request)
        .await
        .map_err(|e| anyhow::anyhow!("Brand generation failed: {}", e))?;

    if suggestions.is_empty() {
        println!("{}", "  The model returned no usable suggestions".yellow());
        return Ok(());
    }

    for suggestion in &suggestions {
        println!("  {}", suggestion.name.bright_white().bold());
        println!("    {}", suggestion.tagline.italic());
        if let Some(domains) = &suggestion.suggested_domains {
            println!("    {}", domains.join(", ").bright_black());
        }
    }
    println!();

    if check_domains {
        let domains: Vec<String> = suggestions
            .iter()
            .map(|s| domain_from_brand(&s.name))
            .collect();
        batch(domain_service, &domains, domain_service.default_delay()).await;
    }

    Ok(())
}
