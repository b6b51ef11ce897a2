use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::object_id::ObjectId;
use crate::domain::product::{
    Product as DomainProduct, ProductUpdate as DomainProductUpdate, Ratings, Reviewer,
};
use crate::repository::errors::RepositoryError;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub image_urls: String,
    pub rating_nifar: f64,
    pub rating_afia: f64,
    pub rating_rumi: f64,
    pub rating_sadia: f64,
    pub comment: String,
    pub created_at: NaiveDateTime,
    pub last_modified_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub image_urls: &'a str,
    pub created_at: NaiveDateTime,
    pub last_modified_at: NaiveDateTime,
}

/// Field-level changes applied by a single product update. `None` columns
/// are left untouched; `last_modified_at` is always written.
#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct ProductChangeset<'a> {
    pub comment: Option<&'a str>,
    pub rating_nifar: Option<f64>,
    pub rating_afia: Option<f64>,
    pub rating_rumi: Option<f64>,
    pub rating_sadia: Option<f64>,
    pub last_modified_at: NaiveDateTime,
}

impl<'a> ProductChangeset<'a> {
    pub fn from_update(update: &'a DomainProductUpdate, last_modified_at: NaiveDateTime) -> Self {
        let mut changes = Self {
            comment: None,
            rating_nifar: None,
            rating_afia: None,
            rating_rumi: None,
            rating_sadia: None,
            last_modified_at,
        };

        match update {
            DomainProductUpdate::CommentOnly { comment } => {
                changes.comment = Some(comment.as_str());
            }
            DomainProductUpdate::Ratings { scores } => {
                for score in scores {
                    let value = Some(score.value());
                    match score.reviewer {
                        Reviewer::Nifar => changes.rating_nifar = value,
                        Reviewer::Afia => changes.rating_afia = value,
                        Reviewer::Rumi => changes.rating_rumi = value,
                        Reviewer::Sadia => changes.rating_sadia = value,
                    }
                }
            }
        }

        changes
    }
}

impl TryFrom<Product> for DomainProduct {
    type Error = RepositoryError;

    fn try_from(value: Product) -> Result<Self, Self::Error> {
        let id: ObjectId = value
            .id
            .parse()
            .map_err(|_| RepositoryError::Malformed(format!("invalid product id `{}`", value.id)))?;

        let image_urls: Vec<String> = serde_json::from_str(&value.image_urls)
            .map_err(|err| RepositoryError::Malformed(format!("image urls for {id}: {err}")))?;

        Ok(Self {
            id,
            name: value.name,
            image_urls,
            ratings: Ratings {
                nifar: value.rating_nifar,
                afia: value.rating_afia,
                rumi: value.rating_rumi,
                sadia: value.rating_sadia,
            },
            comment: value.comment,
            created_at: value.created_at,
            last_modified_at: value.last_modified_at,
        })
    }
}
