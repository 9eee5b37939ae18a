use std::borrow::Cow;

use url::Url;

use crate::{Config, Language};

/// How the service wraps the answer to an operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    /// A one-element array holding the record or an error.
    Single,
    /// An object with the page metadata, a product list and an error.
    Paged,
}

/// Name, parameters and answer shape of an operation.
#[derive(Debug)]
pub(crate) struct OpSpec {
    pub(crate) name: &'static str,
    pub(crate) params: &'static [&'static str],
    pub(crate) shape: Shape,
}

const BARCODE_LOOKUP: usize = 0;
const BARCODE_PREFIX_SEARCH: usize = 1;
const PRODUCT_SEARCH: usize = 2;
const CATEGORY_SEARCH: usize = 3;
const ISSUING_COUNTRY: usize = 4;
const VERIFY_CHECKSUM: usize = 5;
const BARCODE_IMAGE: usize = 6;

pub(crate) static OPERATIONS: [OpSpec; 7] = [
    OpSpec {
        name: "barcode-lookup",
        params: &["ean", "lang"],
        shape: Shape::Single,
    },
    OpSpec {
        name: "barcode-prefix-search",
        params: &["prefix", "page", "lang"],
        shape: Shape::Paged,
    },
    OpSpec {
        name: "product-search",
        params: &["name", "page", "lang"],
        shape: Shape::Paged,
    },
    OpSpec {
        name: "category-search",
        params: &["category", "name", "page", "lang"],
        shape: Shape::Paged,
    },
    OpSpec {
        name: "issuing-country",
        params: &["ean"],
        shape: Shape::Single,
    },
    OpSpec {
        name: "verify-checksum",
        params: &["ean"],
        shape: Shape::Single,
    },
    OpSpec {
        name: "barcode-image",
        params: &["ean"],
        shape: Shape::Single,
    },
];

/// A request to the service together with its arguments.
#[derive(Clone, Debug)]
pub(crate) enum Operation<'a> {
    BarcodeLookup {
        ean: &'a str,
        lang: Language,
    },
    BarcodePrefixSearch {
        prefix: &'a str,
        page: u32,
        lang: Language,
    },
    ProductSearch {
        name: &'a str,
        page: u32,
        lang: Language,
    },
    CategorySearch {
        category: u32,
        name: &'a str,
        page: u32,
        lang: Language,
    },
    IssuingCountry {
        ean: &'a str,
    },
    VerifyChecksum {
        ean: &'a str,
    },
    BarcodeImage {
        ean: &'a str,
    },
}

impl<'a> Operation<'a> {
    pub(crate) fn spec(&self) -> &'static OpSpec {
        let index = match self {
            Self::BarcodeLookup { .. } => BARCODE_LOOKUP,
            Self::BarcodePrefixSearch { .. } => BARCODE_PREFIX_SEARCH,
            Self::ProductSearch { .. } => PRODUCT_SEARCH,
            Self::CategorySearch { .. } => CATEGORY_SEARCH,
            Self::IssuingCountry { .. } => ISSUING_COUNTRY,
            Self::VerifyChecksum { .. } => VERIFY_CHECKSUM,
            Self::BarcodeImage { .. } => BARCODE_IMAGE,
        };
        &OPERATIONS[index]
    }

    /// The subject of the request, used for logging.
    pub(crate) const fn subject(&self) -> &'a str {
        match *self {
            Self::BarcodeLookup { ean, .. }
            | Self::IssuingCountry { ean }
            | Self::VerifyChecksum { ean }
            | Self::BarcodeImage { ean } => ean,
            Self::BarcodePrefixSearch { prefix, .. } => prefix,
            Self::ProductSearch { name, .. } | Self::CategorySearch { name, .. } => name,
        }
    }

    /// Parameter values in the order of [`OpSpec::params`].
    fn values(&self) -> Vec<Cow<'a, str>> {
        let lang_code = |lang: &Language| Cow::Owned(lang.code().to_string());
        match self {
            Self::BarcodeLookup { ean, lang } => vec![Cow::Borrowed(*ean), lang_code(lang)],
            Self::BarcodePrefixSearch { prefix, page, lang } => vec![
                Cow::Borrowed(*prefix),
                Cow::Owned(page.to_string()),
                lang_code(lang),
            ],
            Self::ProductSearch { name, page, lang } => vec![
                Cow::Borrowed(*name),
                Cow::Owned(page.to_string()),
                lang_code(lang),
            ],
            Self::CategorySearch {
                category,
                name,
                page,
                lang,
            } => vec![
                Cow::Owned(category.to_string()),
                Cow::Borrowed(*name),
                Cow::Owned(page.to_string()),
                lang_code(lang),
            ],
            Self::IssuingCountry { ean }
            | Self::VerifyChecksum { ean }
            | Self::BarcodeImage { ean } => vec![Cow::Borrowed(*ean)],
        }
    }

    /// Builds the request URL. Every value is form encoded, so free text such as a product name
    /// may contain spaces and reserved characters.
    pub(crate) fn url(&self, config: &Config) -> Url {
        let spec = self.spec();
        let values = self.values();
        debug_assert_eq!(spec.params.len(), values.len(), "{}", spec.name);

        let mut url = config.base_url().clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("token", config.token().as_str())
            .append_pair("op", spec.name)
            .extend_pairs(spec.params.iter().zip(values));
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Token;

    fn config() -> Config {
        Config::new(Token::new("abc").unwrap())
    }

    fn every_operation() -> Vec<Operation<'static>> {
        let lang = Language::Any;
        vec![
            Operation::BarcodeLookup { ean: "1", lang },
            Operation::BarcodePrefixSearch {
                prefix: "1",
                page: 0,
                lang,
            },
            Operation::ProductSearch {
                name: "n",
                page: 0,
                lang,
            },
            Operation::CategorySearch {
                category: 1,
                name: "n",
                page: 0,
                lang,
            },
            Operation::IssuingCountry { ean: "1" },
            Operation::VerifyChecksum { ean: "1" },
            Operation::BarcodeImage { ean: "1" },
        ]
    }

    #[test]
    fn every_operation_supplies_its_table_parameters() {
        let ops = every_operation();
        assert_eq!(OPERATIONS.len(), ops.len());
        for op in ops {
            assert_eq!(op.spec().params.len(), op.values().len(), "{}", op.spec().name);
        }
    }

    #[test]
    fn lookup_url_format_is_correct() {
        let op = Operation::BarcodeLookup {
            ean: "5000112637922",
            lang: Language::Any,
        };
        assert_eq!(
            "https://api.ean-search.org/api?format=json&token=abc&op=barcode-lookup&ean=5000112637922&lang=99",
            op.url(&config()).as_str()
        );
    }

    #[test]
    fn category_search_url_format_is_correct() {
        let op = Operation::CategorySearch {
            category: 45,
            name: "bio milk",
            page: 2,
            lang: Language::German,
        };
        assert_eq!(
            "https://api.ean-search.org/api?format=json&token=abc&op=category-search&category=45&name=bio+milk&page=2&lang=3",
            op.url(&config()).as_str()
        );
    }

    #[test]
    fn free_text_round_trips_through_the_url() {
        let name = "Käse & Brot: 100% bio? #1 / a+b=c";
        let op = Operation::ProductSearch {
            name,
            page: 0,
            lang: Language::English,
        };
        let url = op.url(&config());

        let (_, decoded) = url
            .query_pairs()
            .find(|(key, _)| key == "name")
            .expect("name parameter present");
        assert_eq!(name, decoded);
        assert!(!url.as_str().contains(' '));
        assert!(!url.as_str().contains('#'));
    }

    #[test]
    fn shapes_follow_the_table() {
        for op in every_operation() {
            let paged = matches!(
                op,
                Operation::BarcodePrefixSearch { .. }
                    | Operation::ProductSearch { .. }
                    | Operation::CategorySearch { .. }
            );
            assert_eq!(paged, op.spec().shape == Shape::Paged);
        }
    }
}
