use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::object_id::ObjectId;
use crate::domain::product::{Product, ProductListQuery, ProductUpdate, RATINGS_FIELD_PREFIX};
use crate::forms::products::{AddProductForm, ProductFormError, UpdateProductForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    /// Optional name search term.
    pub search: Option<String>,
    /// Page requested by the caller (1-based).
    pub page: Option<usize>,
}

/// Response data for the product list endpoint.
#[derive(Debug, Serialize)]
pub struct ProductsPage {
    /// Paginated list of catalog products.
    pub products: Paginated<Product>,
    /// Search query echoed back to the caller when present.
    pub search: Option<String>,
}

/// Loads one page of the product catalog.
pub fn list_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<ProductsPage>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1);
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(term) = query.search.as_ref() {
        list_query = list_query.search(term);
    }

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;

    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);
    let products = Paginated::new(items, page, total_pages);

    Ok(ProductsPage {
        products,
        search: query.search,
    })
}

/// Looks up a single product by its id string.
pub fn get_product<R>(repo: &R, id: &str) -> ServiceResult<Product>
where
    R: ProductReader + ?Sized,
{
    let id = parse_product_id(id)?;

    repo.get_product_by_id(&id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

/// Creates a new catalog product; the store assigns id and timestamps.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<Product>
where
    R: ProductWriter + ?Sized,
{
    let payload = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_product(&payload).map_err(ServiceError::from)
}

/// Outcome of a successful update: the mode's message plus the document of
/// fields actually applied.
#[derive(Debug, Serialize)]
pub struct ProductUpdateOutcome {
    pub message: &'static str,
    pub product: Map<String, Value>,
}

impl ProductUpdateOutcome {
    fn new(update: &ProductUpdate, applied_at: NaiveDateTime) -> Self {
        let mut product = Map::new();

        let message = match update {
            ProductUpdate::CommentOnly { comment } => {
                product.insert("comment".to_string(), Value::String(comment.clone()));
                "Comment updated successfully"
            }
            ProductUpdate::Ratings { scores } => {
                for score in scores {
                    product.insert(
                        format!("{RATINGS_FIELD_PREFIX}{}", score.reviewer.as_key()),
                        Value::Number(score.score.clone()),
                    );
                }
                "Rating updated successfully"
            }
        };

        product.insert("lastModifiedAt".to_string(), timestamp_value(applied_at));

        Self { message, product }
    }
}

/// Applies a partial update to the product with `id`.
///
/// The id is parsed and the document classified before the store is touched;
/// a rejected document never reaches the repository. Exactly one store
/// mutation is issued per successful classification.
pub fn update_product<R>(
    repo: &R,
    id: &str,
    form: UpdateProductForm,
) -> ServiceResult<ProductUpdateOutcome>
where
    R: ProductWriter + ?Sized,
{
    let id = parse_product_id(id)?;

    let update = form.into_product_update().map_err(|err| match err {
        ProductFormError::MissingRatingOrComment => ServiceError::MissingRatingOrComment,
        other => ServiceError::Form(other.to_string()),
    })?;

    let applied_at = chrono::Local::now().naive_utc();
    repo.update_product(&id, &update, applied_at)
        .map_err(ServiceError::from)?;

    Ok(ProductUpdateOutcome::new(&update, applied_at))
}

fn parse_product_id(id: &str) -> ServiceResult<ObjectId> {
    id.parse().map_err(|_| ServiceError::InvalidIdentifier)
}

fn timestamp_value(value: NaiveDateTime) -> Value {
    serde_json::to_value(value).unwrap_or_else(|_| Value::String(value.to_string()))
}
