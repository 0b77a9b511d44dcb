use clap::Parser;
use std::path::PathBuf;

use crate::catalog::ProductId;
use crate::ui::navigation::Route;

/// Browse a remote product catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "product-catalog", version, about)]
pub struct Cli {
    /// Path to the config file (default: <config dir>/product-catalog/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Open the detail view for this product instead of the list
    #[arg(long, value_name = "ID")]
    pub product: Option<ProductId>,

    /// Print the view once to stdout instead of starting the terminal UI
    #[arg(long)]
    pub plain: bool,
}

impl Cli {
    /// The route to mount first.
    pub fn route(&self) -> Route {
        match self.product {
            Some(id) => Route::Product { id },
            None => Route::Products,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_product_list() {
        let cli = Cli::try_parse_from(["product-catalog"]).unwrap();
        assert_eq!(cli.route(), Route::Products);
        assert!(!cli.plain);
        assert!(cli.base_url.is_none());
    }

    #[test]
    fn product_flag_opens_detail() {
        let cli = Cli::try_parse_from(["product-catalog", "--product", "5", "--plain"]).unwrap();
        assert_eq!(cli.route(), Route::Product { id: 5 });
        assert!(cli.plain);
    }

    #[test]
    fn non_numeric_product_is_rejected() {
        assert!(Cli::try_parse_from(["product-catalog", "--product", "five"]).is_err());
    }
}
