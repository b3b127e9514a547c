// web_app/model/form.rs - Raw form input for adding and editing products
//
// Inputs arrive as strings from the browser; these drafts turn them into
// request bodies with the same leniency the UI has always had: a price that
// does not parse is sent as zero.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{NewProduct, Product, ProductUpdate, PLACEHOLDER_THUMBNAIL};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    #[error("Title and Category are required")]
    MissingFields,
}

/// Parse user-entered price text, falling back to zero
pub fn parse_price(input: &str) -> Decimal {
    Decimal::from_str(input.trim()).unwrap_or(Decimal::ZERO)
}

/// State of the "Add New Product" form
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub title: String,
    pub price: String,
    pub category: String,
    pub thumbnail: String,
}

impl ProductDraft {
    pub fn validate(&self) -> Result<NewProduct, DraftError> {
        if self.title.trim().is_empty() || self.category.trim().is_empty() {
            return Err(DraftError::MissingFields);
        }

        let thumbnail = if self.thumbnail.trim().is_empty() {
            PLACEHOLDER_THUMBNAIL.to_string()
        } else {
            self.thumbnail.clone()
        };

        Ok(NewProduct {
            title: self.title.clone(),
            price: parse_price(&self.price),
            category: self.category.clone(),
            thumbnail: Some(thumbnail),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Edit buffer of a single list item
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditDraft {
    pub title: String,
    pub price: Decimal,
    pub thumbnail: String,
}

impl EditDraft {
    pub fn from_product(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            price: product.price,
            thumbnail: product.thumbnail.clone(),
        }
    }

    pub fn set_price_text(&mut self, input: &str) {
        self.price = parse_price(input);
    }

    pub fn to_update(&self) -> ProductUpdate {
        ProductUpdate {
            title: self.title.clone(),
            price: self.price,
            thumbnail: (!self.thumbnail.is_empty()).then(|| self.thumbnail.clone()),
        }
    }

    /// Overlay the locally chosen thumbnail on the server's response.
    ///
    /// The remote API does not store images, so its echo cannot be trusted
    /// to carry the new one back.
    pub fn merge_into(&self, mut updated: Product) -> Product {
        if !self.thumbnail.is_empty() {
            updated.thumbnail = self.thumbnail.clone();
        }
        updated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            title: "Desk Lamp".to_string(),
            price: "24.50".to_string(),
            category: "home-decoration".to_string(),
            thumbnail: String::new(),
        }
    }

    #[test]
    fn test_validate_requires_title_and_category() {
        let mut draft = filled_draft();
        draft.title = "  ".to_string();
        assert_eq!(draft.validate(), Err(DraftError::MissingFields));

        let mut draft = filled_draft();
        draft.category.clear();
        assert_eq!(draft.validate(), Err(DraftError::MissingFields));
    }

    #[test]
    fn test_validate_defaults() {
        let mut draft = filled_draft();
        draft.price = "abc".to_string();
        let product = draft.validate().unwrap();
        assert_eq!(product.price, Decimal::ZERO);
        assert_eq!(product.thumbnail.as_deref(), Some(PLACEHOLDER_THUMBNAIL));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(DraftError::MissingFields.to_string(), "Title and Category are required");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), Decimal::new(125, 1));
        assert_eq!(parse_price(" 3 "), Decimal::new(3, 0));
        assert_eq!(parse_price(""), Decimal::ZERO);
    }

    #[test]
    fn test_clear() {
        let mut draft = filled_draft();
        draft.clear();
        assert_eq!(draft, ProductDraft::default());
    }
}
