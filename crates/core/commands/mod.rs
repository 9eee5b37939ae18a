use std::path::PathBuf;

use ean_search::{EanSearch, Language, Product, ProductPage};

use clap::{AppSettings, Args, Subcommand};
use eyre::{eyre, WrapErr};
use log::{info, trace};

use crate::{file, interact::user_confirm};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Look up a product by its EAN, GTIN or ISBN
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Lookup {
        /// The code to look up
        ean: String,
    },
    /// List products whose code starts with a prefix
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Prefix {
        /// Leading digits of the codes
        prefix: String,
        #[clap(flatten)]
        paging: Paging,
    },
    /// Search products by name, optionally within a category
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Search {
        /// Words the product name contains
        name: String,
        /// Category id from the ean-search.org taxonomy
        #[clap(short, long)]
        category: Option<u32>,
        #[clap(flatten)]
        paging: Paging,
    },
    /// Show the country a code was issued in
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Country {
        /// The code to look up
        ean: String,
    },
    /// Check whether the check digit of a code is correct
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Checksum {
        /// The code to verify
        ean: String,
    },
    /// Save a barcode image of a code as PNG
    #[clap(setting(AppSettings::ArgRequiredElseHelp))]
    Image {
        /// The code to draw
        ean: String,
        /// Where to write the image, defaults to <EAN>.png
        #[clap(short, long, parse(from_os_str))]
        output: Option<PathBuf>,
        /// Replace the output file if it exists
        #[clap(long)]
        force: bool,
    },
}

#[derive(Debug, Args)]
pub struct Paging {
    /// Zero-based page of results to start from
    #[clap(short, long, default_value_t = 0)]
    page: u32,
}

impl Commands {
    pub fn execute(self, client: &EanSearch, lang: Language, interact: bool) -> eyre::Result<String> {
        match self {
            Commands::Lookup { ean } => {
                let product = client
                    .barcode_lookup(&ean, lang)
                    .wrap_err_with(|| eyre!("Lookup of '{}' failed", ean))?;
                Ok(display_product(&product))
            }
            Commands::Prefix { prefix, paging } => {
                trace!("Prefix search for '{prefix}' from page {}", paging.page);
                list_pages(paging.page, interact, |page| {
                    client.barcode_prefix_search(&prefix, page, lang)
                })
            }
            Commands::Search {
                name,
                category: Some(category),
                paging,
            } => {
                trace!("Search for '{name}' in category {category}");
                list_pages(paging.page, interact, |page| {
                    client.category_search(category, &name, page, lang)
                })
            }
            Commands::Search {
                name,
                category: None,
                paging,
            } => {
                trace!("Search for '{name}'");
                list_pages(paging.page, interact, |page| {
                    client.product_search(&name, page, lang)
                })
            }
            Commands::Country { ean } => client
                .issuing_country(&ean)
                .wrap_err_with(|| eyre!("Country lookup of '{}' failed", ean)),
            Commands::Checksum { ean } => {
                let valid = client
                    .verify_checksum(&ean)
                    .wrap_err_with(|| eyre!("Checksum verification of '{}' failed", ean))?;
                Ok(if valid { "valid" } else { "invalid" }.to_owned())
            }
            Commands::Image { ean, output, force } => {
                let png = client
                    .barcode_image(&ean)
                    .wrap_err_with(|| eyre!("Barcode image of '{}' could not be fetched", ean))?;
                let path = output.unwrap_or_else(|| file::default_image_path(&ean));
                file::write_image(&path, &png, force)?;
                Ok(format!("Barcode image written to '{}'", path.display()))
            }
        }
    }
}

/// Prints every page returned by `fetch`, starting at `page`.
///
/// Without `interact` only the first page is fetched; otherwise the user is asked before each
/// further page.
fn list_pages<F>(mut page: u32, interact: bool, mut fetch: F) -> eyre::Result<String>
where
    F: FnMut(u32) -> Result<ProductPage, ean_search::Error>,
{
    let mut listed = 0;
    loop {
        let result = fetch(page).wrap_err_with(|| eyre!("Search failed on page {}", page))?;
        for product in &result.products {
            println!("{}", display_product(product));
        }
        listed += result.products.len();

        let next = match result.next_page() {
            Some(next) if interact => next,
            Some(next) => {
                return Ok(format!(
                    "{listed} product(s) listed, more are available with --page {next}"
                ))
            }
            None => return Ok(format!("{listed} product(s) listed")),
        };

        if !user_confirm(&format!("Fetch page {next}?"))? {
            return Ok(format!("{listed} product(s) listed"));
        }
        info!("Fetching page {next}");
        page = next;
    }
}

fn display_product(product: &Product) -> String {
    format!(
        "EAN:\t{}\n\tName: {}\n\tCategory: {} ({})\n\tIssuing country: {}",
        product.ean,
        product.name,
        product.category_name,
        product.category_id,
        product.issuing_country
    )
}
