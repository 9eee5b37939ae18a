#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::perf,
    clippy::style,
    clippy::missing_safety_doc,
    clippy::missing_const_for_fn
)]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(clippy::module_name_repetitions)]

//! # ean-search
//!
//! A blocking client for the [ean-search.org](https://www.ean-search.org) barcode database.
//! It looks up products by EAN, GTIN or ISBN, searches products by name, category or code
//! prefix, verifies check digits, finds the issuing country of a code and fetches barcode
//! images.
//!
//! ```no_run
//! use ean_search::{Config, EanSearch, Language, Token};
//!
//! # fn main() -> Result<(), ean_search::Error> {
//! let client = EanSearch::new(Config::new(Token::new("my-token")?));
//! let product = client.barcode_lookup("5000112637922", Language::English)?;
//! println!("{}", product.name);
//! # Ok(())
//! # }
//! ```
//!
//! The client holds no state besides its [`Config`], which cannot change once the client is
//! built, so a single client can be shared between threads.

mod api;
mod config;
pub mod decode;
mod error;
mod lang;
mod model;

use std::time::Duration;

pub use api::{Client, Reply};
pub use config::{
    Config, Token, DEFAULT_BASE_URL, DEFAULT_LOOKUP_TIMEOUT, DEFAULT_SEARCH_TIMEOUT,
};
pub use error::{Error, ErrorKind};
pub use lang::Language;
pub use model::{Product, ProductPage};

use api::operation::{Operation, Shape};
use log::{info, trace};

/// Client for the ean-search.org API.
///
/// `C` is the transport, [`reqwest::blocking::Client`] unless another [`Client`] is provided.
#[derive(Debug)]
pub struct EanSearch<C = reqwest::blocking::Client> {
    config: Config,
    client: C,
}

impl EanSearch {
    /// Creates a client using `config` and the default HTTP transport.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_client(config, reqwest::blocking::Client::default())
    }
}

impl<C: Client> EanSearch<C> {
    /// Creates a client using `config` and a custom transport.
    #[must_use]
    pub const fn with_client(config: Config, client: C) -> Self {
        Self { config, client }
    }

    /// The configuration every request is built from.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Looks up a single product by its code.
    ///
    /// # Errors
    ///
    /// An [`Err`] of kind [`ErrorKind::Transport`] is returned when the request fails or the
    /// service answers with a non-success status.
    /// An [`Err`] of kind [`ErrorKind::Service`] is returned with the service's own message, for
    /// example when the code is unknown.
    /// An [`Err`] of kind [`ErrorKind::EmptyResponse`] is returned when the service answers with
    /// neither a product nor an error.
    /// An [`Err`] of kind [`ErrorKind::Decode`] is returned when the answer cannot be parsed.
    pub fn barcode_lookup(&self, ean: &str, lang: Language) -> Result<Product, Error> {
        let body = self.call(&Operation::BarcodeLookup { ean, lang })?;
        decode::product(&body)
    }

    /// Finds the country in which `ean` was issued.
    ///
    /// # Errors
    ///
    /// Same as [`EanSearch::barcode_lookup`].
    pub fn issuing_country(&self, ean: &str) -> Result<String, Error> {
        let body = self.call(&Operation::IssuingCountry { ean })?;
        decode::country(&body)
    }

    /// Asks the service whether the check digit of `ean` is correct.
    ///
    /// An invalid code is `Ok(false)`, not an error.
    ///
    /// # Errors
    ///
    /// Same as [`EanSearch::barcode_lookup`].
    pub fn verify_checksum(&self, ean: &str) -> Result<bool, Error> {
        let body = self.call(&Operation::VerifyChecksum { ean })?;
        decode::checksum(&body)
    }

    /// Fetches a barcode image for `ean` as PNG bytes.
    ///
    /// # Errors
    ///
    /// Same as [`EanSearch::barcode_lookup`], and an [`Err`] of kind [`ErrorKind::Encoding`] when
    /// the image payload is not valid base64.
    pub fn barcode_image(&self, ean: &str) -> Result<Vec<u8>, Error> {
        let body = self.call(&Operation::BarcodeImage { ean })?;
        decode::image(&body)
    }

    /// Lists products whose code starts with `prefix`.
    ///
    /// `page` is zero-based; request the next page while [`ProductPage::more_products`] is set.
    ///
    /// # Errors
    ///
    /// Same as [`EanSearch::barcode_lookup`]. An empty page is an
    /// [`ErrorKind::EmptyResponse`] error.
    pub fn barcode_prefix_search(
        &self,
        prefix: &str,
        page: u32,
        lang: Language,
    ) -> Result<ProductPage, Error> {
        let body = self.call(&Operation::BarcodePrefixSearch { prefix, page, lang })?;
        decode::product_page(&body)
    }

    /// Searches products by name.
    ///
    /// # Errors
    ///
    /// Same as [`EanSearch::barcode_prefix_search`].
    pub fn product_search(
        &self,
        name: &str,
        page: u32,
        lang: Language,
    ) -> Result<ProductPage, Error> {
        let body = self.call(&Operation::ProductSearch { name, page, lang })?;
        decode::product_page(&body)
    }

    /// Searches products by name within a category of the service's taxonomy.
    ///
    /// # Errors
    ///
    /// Same as [`EanSearch::barcode_prefix_search`].
    pub fn category_search(
        &self,
        category: u32,
        name: &str,
        page: u32,
        lang: Language,
    ) -> Result<ProductPage, Error> {
        let body = self.call(&Operation::CategorySearch {
            category,
            name,
            page,
            lang,
        })?;
        decode::product_page(&body)
    }

    fn timeout(&self, shape: Shape) -> Duration {
        match shape {
            Shape::Single => self.config.lookup_timeout(),
            Shape::Paged => self.config.search_timeout(),
        }
    }

    /// Sends `op` and returns the body of a successful response.
    fn call(&self, op: &Operation<'_>) -> Result<String, Error> {
        let spec = op.spec();
        info!("Requesting '{}' for '{}'", spec.name, op.subject());

        let url = op.url(&self.config);
        let body = self
            .client
            .fetch(&url, self.timeout(spec.shape))?
            .into_body()?;

        trace!("Request was successful");
        Ok(body)
    }
}
