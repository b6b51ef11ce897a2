use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{
    NewProduct, ProductUpdate, RATINGS_FIELD_PREFIX, RatingScore, Reviewer,
};

/// Maximum allowed length for a product name.
const NAME_MAX_LEN: usize = 128;
const NAME_MAX_LEN_VALIDATOR: u64 = NAME_MAX_LEN as u64;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided name is empty after sanitization.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The update document carries neither a comment nor a rating.
    #[error("update must include a rating or a comment")]
    MissingRatingOrComment,
    /// A `ratings.`-prefixed field addresses a reviewer outside the fixed set.
    #[error("unknown reviewer `{key}`")]
    UnknownReviewer { key: String },
    /// A reviewer score is not a JSON number.
    #[error("rating `{key}` must be a number")]
    InvalidScore { key: String },
    /// The comment field is not a JSON string.
    #[error("comment must be a string")]
    InvalidComment,
}

/// JSON payload accepted when creating a product.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddProductForm {
    /// Name entered by the caller.
    #[validate(length(min = 1, max = NAME_MAX_LEN_VALIDATOR))]
    pub name: String,
    /// Image URLs attached to the product; may be empty.
    pub image_urls: Vec<String>,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let sanitized_name = sanitize_inline_text(&self.name);
        if sanitized_name.is_empty() {
            return Err(ProductFormError::EmptyName);
        }

        let image_urls: Vec<String> = self
            .image_urls
            .iter()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .collect();

        Ok(NewProduct::new(sanitized_name).with_image_urls(image_urls))
    }
}

/// JSON body of a product update: a partial document addressing `comment`
/// and/or `ratings.<reviewer>` fields. Unrelated keys are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct UpdateProductForm(pub Map<String, Value>);

impl UpdateProductForm {
    /// Classify the document into a typed [`ProductUpdate`].
    ///
    /// Ratings fields take precedence: if any `ratings.`-prefixed key is
    /// present the update is a ratings update and a `comment` key supplied
    /// alongside is dropped. A document with no ratings field and no comment
    /// is rejected with [`ProductFormError::MissingRatingOrComment`].
    pub fn into_product_update(self) -> ProductFormResult<ProductUpdate> {
        let mut scores = Vec::new();

        for (key, value) in &self.0 {
            let Some(reviewer_key) = key.strip_prefix(RATINGS_FIELD_PREFIX) else {
                continue;
            };

            let reviewer =
                Reviewer::from_key(reviewer_key).ok_or_else(|| ProductFormError::UnknownReviewer {
                    key: reviewer_key.to_string(),
                })?;

            let score = match value {
                Value::Number(number) if number.as_f64().is_some() => number.clone(),
                _ => {
                    return Err(ProductFormError::InvalidScore { key: key.clone() });
                }
            };

            scores.push(RatingScore::new(reviewer, score));
        }

        if !scores.is_empty() {
            return Ok(ProductUpdate::Ratings { scores });
        }

        match self.0.get("comment") {
            Some(Value::String(comment)) => Ok(ProductUpdate::CommentOnly {
                comment: comment.clone(),
            }),
            Some(_) => Err(ProductFormError::InvalidComment),
            None => Err(ProductFormError::MissingRatingOrComment),
        }
    }
}

/// Collapse inner whitespace and trim the ends of a single-line field.
fn sanitize_inline_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn form(body: Value) -> UpdateProductForm {
        serde_json::from_value(body).expect("update form should deserialize")
    }

    #[test]
    fn classifies_comment_only_update() {
        let update = form(json!({"comment": "great"})).into_product_update();

        assert_eq!(
            update.expect("comment update"),
            ProductUpdate::CommentOnly {
                comment: "great".to_string()
            }
        );
    }

    #[test]
    fn classifies_ratings_update() {
        let update = form(json!({"ratings.nifar": 5, "ratings.afia": 3.5}))
            .into_product_update()
            .expect("ratings update");

        match update {
            ProductUpdate::Ratings { scores } => {
                assert_eq!(scores.len(), 2);
                assert!(
                    scores
                        .iter()
                        .any(|s| s.reviewer == Reviewer::Nifar && s.value() == 5.0)
                );
                assert!(
                    scores
                        .iter()
                        .any(|s| s.reviewer == Reviewer::Afia && s.value() == 3.5)
                );
            }
            other => panic!("expected ratings update, got {other:?}"),
        }
    }

    #[test]
    fn ratings_take_precedence_over_comment() {
        let update = form(json!({"comment": "dropped", "ratings.rumi": 4}))
            .into_product_update()
            .expect("ratings update");

        match update {
            ProductUpdate::Ratings { scores } => {
                assert_eq!(scores.len(), 1);
                assert_eq!(scores[0].reviewer, Reviewer::Rumi);
            }
            other => panic!("expected ratings update, got {other:?}"),
        }
    }

    #[test]
    fn rejects_empty_update() {
        let result = form(json!({})).into_product_update();
        assert!(matches!(
            result,
            Err(ProductFormError::MissingRatingOrComment)
        ));
    }

    #[test]
    fn rejects_update_with_unrelated_fields_only() {
        let result = form(json!({"name": "renamed"})).into_product_update();
        assert!(matches!(
            result,
            Err(ProductFormError::MissingRatingOrComment)
        ));
    }

    #[test]
    fn bare_ratings_key_is_not_a_ratings_field() {
        let result = form(json!({"ratings": {"nifar": 5}})).into_product_update();
        assert!(matches!(
            result,
            Err(ProductFormError::MissingRatingOrComment)
        ));
    }

    #[test]
    fn rejects_unknown_reviewer() {
        let result = form(json!({"ratings.karim": 5})).into_product_update();
        assert!(matches!(
            result,
            Err(ProductFormError::UnknownReviewer { key }) if key == "karim"
        ));
    }

    #[test]
    fn rejects_non_numeric_score() {
        let result = form(json!({"ratings.nifar": "five"})).into_product_update();
        assert!(matches!(
            result,
            Err(ProductFormError::InvalidScore { key }) if key == "ratings.nifar"
        ));
    }

    #[test]
    fn rejects_non_string_comment() {
        let result = form(json!({"comment": 5})).into_product_update();
        assert!(matches!(result, Err(ProductFormError::InvalidComment)));
    }

    #[test]
    fn empty_comment_is_still_a_comment_update() {
        let update = form(json!({"comment": ""})).into_product_update();
        assert_eq!(
            update.expect("comment update"),
            ProductUpdate::CommentOnly {
                comment: String::new()
            }
        );
    }

    #[test]
    fn add_product_form_sanitizes_name_and_urls() {
        let form = AddProductForm {
            name: "  Mango   Pickle ".to_string(),
            image_urls: vec![
                " https://example.com/a.jpg ".to_string(),
                "   ".to_string(),
            ],
        };

        let new_product = form.into_new_product().expect("valid product");
        assert_eq!(new_product.name, "Mango Pickle");
        assert_eq!(new_product.image_urls, vec!["https://example.com/a.jpg"]);
    }

    #[test]
    fn add_product_form_rejects_blank_name() {
        let form = AddProductForm {
            name: "   ".to_string(),
            image_urls: Vec::new(),
        };

        assert!(matches!(
            form.into_new_product(),
            Err(ProductFormError::EmptyName)
        ));
    }
}
