// SPDX-License-Identifier: MPL-2.0
use gallery_lens::app::GalleryApp;
use gallery_lens::config::{self, Config, LoadStrategy};
use gallery_lens::viewer::TerminalSurface;
use std::io::BufRead;

fn parse_flags() -> Result<Config, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();
    let mut config = config::load().unwrap_or_default();

    if let Some(api_base) = args.opt_value_from_str("--api-base")? {
        config.api_base = api_base;
    }
    if let Some(image_base) = args.opt_value_from_str("--image-base")? {
        config.image_base = image_base;
    }
    if let Some(page) = args.opt_value_from_str("--page")? {
        config.page = page;
    }
    if let Some(limit) = args.opt_value_from_str("--limit")? {
        config.limit = limit;
    }
    if let Some(strategy) = args.opt_value_from_str::<_, LoadStrategy>("--strategy")? {
        config.strategy = strategy;
    }

    Ok(config)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = match parse_flags() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid arguments: {e}");
            std::process::exit(2);
        }
    };

    let mut app = match GalleryApp::new(config, TerminalSurface::new()) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to start: {e}");
            std::process::exit(1);
        }
    };

    app.start().await;

    println!("Commands: n(ext), p(revious), v(isible), q(uit)");
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match line.trim() {
            "n" | "next" => app.next().await,
            "p" | "prev" | "previous" => app.previous().await,
            "v" | "visible" => app.notify_visible(),
            "q" | "quit" => break,
            "" => {}
            other => println!("Unknown command: {other}"),
        }
    }
}
