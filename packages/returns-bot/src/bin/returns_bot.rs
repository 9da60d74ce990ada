// Terminal front end: scrape a store homepage, then write its returns policy

use anyhow::{Context, Result};
use clap::Parser;
use console::style;
use dialoguer::Input;
use returns_bot_core::domains::policy::generate_policy;
use returns_bot_core::domains::scraping::scrape_site_context;
use returns_bot_core::kernel::BotKernel;
use returns_bot_core::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "returns-bot",
    version,
    about = "Generate a returns policy from a store's homepage"
)]
struct Cli {
    /// Store URL (e.g. https://vuoriclothing.com); prompted for when omitted
    url: Option<String>,

    /// What the store sells (e.g. 'books', 'activewear', 'skincare')
    #[arg(long, short)]
    category: Option<String>,

    /// More log output
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the summary and the policy
    let default_filter = if cli.verbose {
        "info,returns_bot_core=debug,openai_client=debug"
    } else {
        "warn"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let kernel = BotKernel::from_config(&config)?;

    let (url, category) = match cli.url {
        Some(url) => (url, cli.category),
        None => prompt_for_inputs(cli.category)?,
    };
    let category = category
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty());

    eprintln!("{}", style("Scraping website...").dim());
    let scraped_text = scrape_site_context(kernel.web_scraper.as_ref(), &url).await;

    println!("{}", style("Scraped Website Summary").bold().underlined());
    println!("{}\n", scraped_text);

    eprintln!("{}", style("Writing returns policy...").dim());
    match generate_policy(kernel.ai.as_ref(), &scraped_text, category.as_deref()).await {
        Ok(policy) => {
            println!("---");
            println!("{}", policy);
            Ok(())
        }
        Err(e) => {
            eprintln!("{} {:#}", style("Could not generate policy:").red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn prompt_for_inputs(category: Option<String>) -> Result<(String, Option<String>)> {
    let url: String = Input::<String>::new()
        .with_prompt("Enter Shopify Store URL (e.g. https://vuoriclothing.com)")
        .interact_text()
        .context("Failed to read store URL")?;

    let category = match category {
        Some(category) => Some(category),
        None => {
            let answer: String = Input::<String>::new()
                .with_prompt("Optional: what do they sell (e.g. 'books', 'activewear', 'skincare')")
                .allow_empty(true)
                .interact_text()
                .context("Failed to read category")?;
            Some(answer)
        }
    };

    Ok((url, category))
}
