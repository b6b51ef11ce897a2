use actix_web::{HttpResponse, Responder, get, patch, post, web};
use serde::Serialize;

use crate::domain::product::Product;
use crate::forms::products::{AddProductForm, UpdateProductForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products as products_service;

#[derive(Debug, Serialize)]
struct ProductCreated {
    message: &'static str,
    product: Product,
}

#[get("/v1/products")]
/// Return one page of the product catalog as JSON.
pub async fn list_products(
    params: web::Query<products_service::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::list_products(repo.get_ref(), params.0) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err),
    }
}

#[get("/v1/products/{id}")]
/// Return a single product addressed by its id.
pub async fn get_product(
    path: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::get_product(repo.get_ref(), &path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err),
    }
}

#[post("/v1/products")]
/// Create a new catalog product.
pub async fn add_product(
    form: web::Json<AddProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(ProductCreated {
            message: "Product created successfully",
            product,
        }),
        Err(err) => error_response(err),
    }
}

#[patch("/v1/products/{id}")]
/// Apply a partial update (comment or reviewer scores) to a product.
pub async fn update_product(
    path: web::Path<String>,
    form: web::Json<UpdateProductForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products_service::update_product(repo.get_ref(), &path.into_inner(), form.into_inner()) {
        Ok(outcome) => HttpResponse::Ok().json(outcome),
        Err(err) => error_response(err),
    }
}
