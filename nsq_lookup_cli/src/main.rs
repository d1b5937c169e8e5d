#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(forgetting_copy_types)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use nsq_lookup::connection_settings::LookupdConnectionSettings;
use nsq_lookup::queries::lookup_topic::{lookup_topic, LookupTopicQuery};
use std::time::Duration;
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Parser, Debug)]
#[command(about = "One-shot topic lookup against nsqlookupd instances", long_about = None)]
struct Args {
    #[arg(short, long)]
    topic: String,

    #[arg(short, long = "lookupd-http-address", required = true)]
    lookupd_http_address: Vec<String>,

    #[arg(long, default_value_t = 5)]
    timeout_secs: u64,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());

    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_filter(filter))
        .init();

    let args = Args::parse();

    let query = LookupTopicQuery {
        lookupd_addresses: args.lookupd_http_address,
        topic: args.topic,
        connection_settings: LookupdConnectionSettings {
            request_timeout: Some(Duration::from_secs(args.timeout_secs)),
        },
    };

    info!(
        "Looking up topic '{}' on {} lookupd instances",
        query.topic,
        query.lookupd_addresses.len()
    );

    let response = lookup_topic(query).await.context("While looking up topic")?;

    let rendered = serde_json::to_string_pretty(&response.producers)
        .context("While rendering producer list")?;
    println!("{rendered}");

    Ok(())
}
