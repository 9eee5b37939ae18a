//! Records returned by the service.
//!
//! The service encodes every numeric field as a JSON string, so the numeric fields here go
//! through the lenient deserializers in [`de`].

use serde::Deserialize;

/// A product as known by the service.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// The EAN, GTIN or ISBN of the product.
    pub ean: String,
    /// Product name, in the requested language when the service has it.
    pub name: String,
    /// Category in the service's taxonomy.
    #[serde(deserialize_with = "de::unsigned")]
    pub category_id: u32,
    /// Name of the category.
    pub category_name: String,
    /// Country the code was issued in, derived from its prefix range.
    pub issuing_country: String,
}

/// One page of a paged search.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPage {
    /// Zero-based page number as reported by the service.
    #[serde(default, deserialize_with = "de::unsigned")]
    pub page: u32,
    /// Whether a further page can be requested.
    #[serde(default)]
    pub more_products: bool,
    /// Number of products matching the search over all pages.
    #[serde(default, deserialize_with = "de::unsigned")]
    pub total_products: u32,
    /// Products of this page, a missing or `null` list is read as empty.
    #[serde(rename = "productlist", default, deserialize_with = "de::list")]
    pub products: Vec<Product>,
}

impl ProductPage {
    /// The page to request next, if the service reported more products.
    #[must_use]
    pub const fn next_page(&self) -> Option<u32> {
        if self.more_products {
            self.page.checked_add(1)
        } else {
            None
        }
    }
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Checksum {
    #[serde(deserialize_with = "de::flag")]
    pub(crate) valid: bool,
}

#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
pub(crate) struct Image {
    /// Base64 encoded image.
    pub(crate) barcode: String,
}

/// issuing-country answers with a partial product, only the country is used.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Debug))]
#[serde(rename_all = "camelCase")]
pub(crate) struct Country {
    pub(crate) issuing_country: String,
}

pub(crate) mod de {
    use std::fmt;

    use serde::{
        de::{self, Deserializer, Unexpected, Visitor},
        Deserialize,
    };

    /// Reads `null` as an empty list.
    pub(crate) fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
    }

    /// Accepts `"73"` as well as `73`.
    pub(crate) fn unsigned<'de, D>(deserializer: D) -> Result<u32, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct UnsignedVisitor;

        impl<'de> Visitor<'de> for UnsignedVisitor {
            type Value = u32;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an unsigned integer or a string of digits")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u32, E> {
                u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u32, E> {
                u32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u32, E> {
                v.trim()
                    .parse()
                    .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
            }
        }

        deserializer.deserialize_any(UnsignedVisitor)
    }

    /// Accepts `"1"`/`"0"` as well as JSON booleans.
    pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FlagVisitor;

        impl<'de> Visitor<'de> for FlagVisitor {
            type Value = bool;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("\"1\", \"0\" or a boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
                Ok(v)
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
                match v {
                    "1" => Ok(true),
                    "0" => Ok(false),
                    _ => Err(E::invalid_value(Unexpected::Str(v), &self)),
                }
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::{Checksum, Product, ProductPage};

    #[test]
    fn category_id_string_decodes_to_integer() {
        let json = r#"{"ean":"1","name":"n","categoryId":"73","categoryName":"c","issuingCountry":"GB"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(73, product.category_id);
    }

    #[test]
    fn category_id_number_also_decodes() {
        let json = r#"{"ean":"1","name":"n","categoryId":4294967295,"categoryName":"c","issuingCountry":"GB"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(u32::MAX, product.category_id);
    }

    #[test]
    fn category_id_that_is_not_a_number_fails() {
        let json = r#"{"ean":"1","name":"n","categoryId":"seventy","categoryName":"c","issuingCountry":"GB"}"#;
        assert!(serde_json::from_str::<Product>(json).is_err());
    }

    #[test]
    fn checksum_flag_only_accepts_one_or_zero() {
        let valid: Checksum = serde_json::from_str(r#"{"ean":"1","valid":"1"}"#).unwrap();
        let invalid: Checksum = serde_json::from_str(r#"{"ean":"1","valid":"0"}"#).unwrap();
        assert!(valid.valid);
        assert!(!invalid.valid);
        assert!(serde_json::from_str::<Checksum>(r#"{"ean":"1","valid":"yes"}"#).is_err());
    }

    #[test]
    fn next_page_only_when_more_products() {
        let mut page = ProductPage {
            page: 2,
            more_products: true,
            total_products: 0,
            products: vec![],
        };
        assert_eq!(Some(3), page.next_page());

        page.more_products = false;
        assert_eq!(None, page.next_page());
    }

    #[test]
    fn last_representable_page_has_no_next_page() {
        let page = ProductPage {
            page: u32::MAX,
            more_products: true,
            total_products: 0,
            products: vec![],
        };
        assert_eq!(None, page.next_page());
    }
}
