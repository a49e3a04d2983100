use std::io::BufRead;

use clap::Parser;
use plant_cart::utils::{logger, validation::Validate};
use plant_cart::{
    seed_cart, Cart, CartSession, CliConfig, Command, ConfigProvider, TerminalNavigator,
    TerminalView,
};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting plant-cart");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let cart = match config.seed_file() {
        Some(path) => seed_cart(path)?,
        None => Cart::new(),
    };

    let view = TerminalView::new();
    let navigator = TerminalNavigator::new();
    let mut session = CartSession::new(cart, view, navigator, config.listing_url().to_string());

    session.render_current()?;
    println!("Commands: inc <name>, dec <name>, rm <name>, checkout, continue, quit");

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input == "quit" || input == "exit" {
            break;
        }

        match Command::parse(input) {
            Some(command) => {
                if let Err(e) = session.handle(command) {
                    tracing::error!("Command failed: {}", e);
                }
            }
            None => {
                eprintln!("Unknown command: {}", input);
                eprintln!("Try: inc <name>, dec <name>, rm <name>, checkout, continue, quit");
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}
