use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "plant-cart")]
#[command(about = "Interactive shopping cart for the plant store")]
pub struct CliConfig {
    /// JSON or TOML file of line items to seed the cart with
    #[arg(long)]
    pub seed_file: Option<String>,

    /// Where "continue shopping" sends the user
    #[arg(long, default_value = "/plants")]
    pub listing_url: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn listing_url(&self) -> &str {
        &self.listing_url
    }

    fn seed_file(&self) -> Option<&str> {
        self.seed_file.as_deref()
    }

    fn verbose(&self) -> bool {
        self.verbose
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_listing_url("listing_url", &self.listing_url)?;

        if let Some(seed_file) = &self.seed_file {
            validation::validate_path("seed_file", seed_file)?;
            validation::validate_seed_extension("seed_file", seed_file)?;
        }

        Ok(())
    }
}
