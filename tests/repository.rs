use chrono::{NaiveDate, NaiveDateTime};
use serde_json::Number;

use review_catalog::domain::object_id::ObjectId;
use review_catalog::domain::product::{
    NewProduct, ProductListQuery, ProductUpdate, RatingScore, Reviewer,
};
use review_catalog::domain::user::NewUser;
use review_catalog::repository::errors::RepositoryError;
use review_catalog::repository::{
    DieselRepository, ProductReader, ProductWriter, UserReader, UserWriter,
};

mod common;

fn patch_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 2, 1)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .unwrap()
}

#[test]
fn test_product_repository_crud() {
    let test_db = common::TestDb::new("test_product_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let new_product = NewProduct::new("Mango Pickle")
        .with_image_urls(vec!["https://example.com/mango.jpg".to_string()]);
    let created = repo.create_product(&new_product).unwrap();

    assert_eq!(created.id.to_hex().len(), 24);
    assert_eq!(created.name, "Mango Pickle");
    assert_eq!(created.image_urls, vec!["https://example.com/mango.jpg"]);
    assert_eq!(created.comment, "");
    for reviewer in Reviewer::ALL {
        assert_eq!(created.ratings.score(reviewer), 0.0);
    }
    assert_eq!(created.created_at, created.last_modified_at);

    let fetched = repo
        .get_product_by_id(&created.id)
        .unwrap()
        .expect("product should exist");
    assert_eq!(fetched.name, created.name);

    assert!(
        repo.get_product_by_id(&ObjectId::generate())
            .unwrap()
            .is_none()
    );

    let comment_update = ProductUpdate::CommentOnly {
        comment: "tasty".to_string(),
    };
    repo.update_product(&created.id, &comment_update, patch_timestamp())
        .unwrap();

    let after_comment = repo
        .get_product_by_id(&created.id)
        .unwrap()
        .expect("product should exist");
    assert_eq!(after_comment.comment, "tasty");
    assert_eq!(after_comment.last_modified_at, patch_timestamp());
    assert_eq!(after_comment.created_at, created.created_at);
    for reviewer in Reviewer::ALL {
        assert_eq!(after_comment.ratings.score(reviewer), 0.0);
    }

    let ratings_update = ProductUpdate::Ratings {
        scores: vec![RatingScore::new(Reviewer::Nifar, Number::from(5))],
    };
    repo.update_product(&created.id, &ratings_update, patch_timestamp())
        .unwrap();

    let after_ratings = repo
        .get_product_by_id(&created.id)
        .unwrap()
        .expect("product should exist");
    assert_eq!(after_ratings.ratings.nifar, 5.0);
    assert_eq!(after_ratings.ratings.afia, 0.0);
    assert_eq!(after_ratings.ratings.rumi, 0.0);
    assert_eq!(after_ratings.ratings.sadia, 0.0);
    assert_eq!(after_ratings.comment, "tasty");

    let err = repo
        .update_product(&ObjectId::generate(), &comment_update, patch_timestamp())
        .expect_err("expected update of a missing product to fail");
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_product_repository_list() {
    let test_db = common::TestDb::new("test_product_repository_list.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&NewProduct::new("Mango Pickle")).unwrap();
    repo.create_product(&NewProduct::new("Lime Pickle")).unwrap();
    repo.create_product(&NewProduct::new("Jasmine Rice")).unwrap();

    let (total, items) = repo.list_products(ProductListQuery::new()).unwrap();
    assert_eq!(total, 3);
    assert_eq!(items.len(), 3);

    let (total, items) = repo
        .list_products(ProductListQuery::new().search("Pickle"))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|product| product.name.contains("Pickle")));

    let (total, items) = repo
        .list_products(ProductListQuery::new().search("Pickle").paginate(1, 1))
        .unwrap();
    assert_eq!(total, 2);
    assert_eq!(items.len(), 1);
}

#[test]
fn test_user_repository_crud() {
    let test_db = common::TestDb::new("test_user_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool());

    let new_user = NewUser::new(
        "Tester".to_string(),
        "Tester@Example.com".to_string(),
        "$argon2id$fake-hash".to_string(),
    );
    let created = repo.create_user(&new_user).unwrap();

    assert_eq!(created.email, "tester@example.com");
    assert_eq!(created.name, "Tester");

    let fetched = repo
        .get_user_by_email("tester@example.com")
        .unwrap()
        .expect("user should exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.password_hash, "$argon2id$fake-hash");

    assert!(
        repo.get_user_by_email("nobody@example.com")
            .unwrap()
            .is_none()
    );

    let err = repo
        .create_user(&new_user)
        .expect_err("expected duplicate email to fail");
    assert!(matches!(err, RepositoryError::Conflict));
}
