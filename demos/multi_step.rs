//! Multi-step validation with early-return propagation

use anyhow::Result;
use outcome_core::{propagate, IntoFailure, IntoSuccess, Outcome};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Debug)]
struct Endpoint {
    host: String,
    port: u16,
    retries: u8,
}

fn field<'a>(line: &'a str, key: &str) -> Outcome<&'a str, String> {
    line.split_whitespace()
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.into_success())
        .unwrap_or_else(|| format!("missing `{key}`").into_failure())
}

fn number<N: std::str::FromStr>(line: &str, key: &str) -> Outcome<N, String> {
    let raw = propagate!(field(line, key));
    raw.parse::<N>()
        .map_err(|_| format!("`{key}` is not a valid number: {raw}"))
        .into()
}

fn parse_endpoint(line: &str) -> Outcome<Endpoint, String> {
    let host = propagate!(field(line, "host")).to_string();
    let port = propagate!(number::<u16>(line, "port"));
    let retries = propagate!(number::<u8>(line, "retries"));

    if host.is_empty() {
        return Outcome::failure("`host` is empty".to_string());
    }

    Outcome::success(Endpoint {
        host,
        port,
        retries,
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::new("info"))
        .init();

    println!("Outcome multi-step example\n");

    let lines = [
        "host=example.org port=443 retries=3",
        "host=example.org port=http retries=3",
        "port=80 retries=1",
        "host=localhost port=8080 retries=999",
    ];

    for line in lines {
        let outcome = parse_endpoint(line)
            .on_success(|e| info!("parsed {}:{} ({} retries)", e.host, e.port, e.retries))
            .on_failure(|reason| info!("rejected {:?}: {}", line, reason));

        let summary = outcome.fold(|e| format!("{e:?}"), |reason| format!("error: {reason}"));
        println!("{line:<40} -> {summary}");
    }

    // Bridge back into `?` for the first line
    let endpoint = parse_endpoint(lines[0])
        .into_result()
        .map_err(anyhow::Error::msg)?;
    println!("\nfirst endpoint: {}:{}", endpoint.host, endpoint.port);

    Ok(())
}
