//! Pure decoding of response bodies.
//!
//! None of these functions touch the network, they take the body text of a successful HTTP
//! response and turn it into a record or an [`Error`].

use base64::Engine;
use log::trace;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::{
    model::{Checksum, Country, Image},
    Error, ErrorKind, Product, ProductPage,
};

/// A single JSON object from the service, holding either the requested data or the service's
/// error message.
#[cfg_attr(test, derive(Debug))]
pub(crate) enum Envelope<T> {
    Data(T),
    Error(String),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// A non-empty `error` member wins over anything else in the object.
    fn from_object(mut object: Map<String, Value>) -> Result<Self, Error> {
        match object.remove("error") {
            Some(Value::String(message)) if !message.is_empty() => Ok(Self::Error(message)),
            _ => serde_json::from_value(Value::Object(object))
                .map(Self::Data)
                .map_err(|e| Error::wrap(ErrorKind::Decode, e)),
        }
    }
}

impl<T> Envelope<T> {
    fn into_result(self) -> Result<T, Error> {
        match self {
            Self::Data(data) => Ok(data),
            Self::Error(message) => Err(Error::new(ErrorKind::Service, message)),
        }
    }
}

fn parse<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    serde_json::from_str(body).map_err(|e| Error::wrap(ErrorKind::Decode, e))
}

/// Decodes the one-element array the single record operations answer with.
pub(crate) fn single<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let items: Vec<Map<String, Value>> = parse(body)?;
    trace!("Decoded array of {} item(s)", items.len());

    let item = items.into_iter().next().ok_or_else(Error::empty_response)?;
    Envelope::from_object(item)?.into_result()
}

/// Decodes the answer to a `barcode-lookup` request.
///
/// # Errors
///
/// An [`Err`] of kind [`ErrorKind::Service`] is returned when the service answered with an error.
/// An [`Err`] of kind [`ErrorKind::EmptyResponse`] is returned for an empty array.
/// An [`Err`] of kind [`ErrorKind::Decode`] is returned when `body` is not the expected JSON.
pub fn product(body: &str) -> Result<Product, Error> {
    single(body)
}

/// Decodes the answer to an `issuing-country` request into the country.
///
/// # Errors
///
/// See [`product`].
pub fn country(body: &str) -> Result<String, Error> {
    single::<Country>(body).map(|c| c.issuing_country)
}

/// Decodes the answer to a `verify-checksum` request into the validity flag.
///
/// # Errors
///
/// See [`product`].
pub fn checksum(body: &str) -> Result<bool, Error> {
    single::<Checksum>(body).map(|c| c.valid)
}

/// Decodes the answer to a `barcode-image` request into the raw image bytes.
///
/// # Errors
///
/// As [`product`], and additionally an [`Err`] of kind [`ErrorKind::Encoding`] when the image is
/// not valid base64.
pub fn image(body: &str) -> Result<Vec<u8>, Error> {
    single::<Image>(body).and_then(|image| base64_image(&image.barcode))
}

/// Decodes a base64 image payload.
///
/// # Errors
///
/// An [`Err`] of kind [`ErrorKind::Encoding`] is returned when `text` is not valid base64.
pub fn base64_image(text: &str) -> Result<Vec<u8>, Error> {
    base64::engine::general_purpose::STANDARD
        .decode(text.trim())
        .map_err(|e| Error::wrap(ErrorKind::Encoding, e))
}

/// Decodes the paged list object the search operations answer with.
///
/// # Errors
///
/// An [`Err`] of kind [`ErrorKind::Service`] is returned when the service answered with an error.
/// An [`Err`] of kind [`ErrorKind::EmptyResponse`] is returned when the product list is empty.
/// An [`Err`] of kind [`ErrorKind::Decode`] is returned when `body` is not the expected JSON.
pub fn product_page(body: &str) -> Result<ProductPage, Error> {
    let object: Map<String, Value> = parse(body)?;
    let page: ProductPage = Envelope::from_object(object)?.into_result()?;
    trace!(
        "Decoded page {} with {} product(s)",
        page.page,
        page.products.len()
    );

    if page.products.is_empty() {
        Err(Error::empty_response())
    } else {
        Ok(page)
    }
}
