use tests::prelude::*;

use pretty_assertions::assert_eq;

use crouton::{Db, Relationship, TableMapping};

#[tokio::test]
async fn unmapped_field() {
    let test = DbTest::shop().await;
    let projection = shop::customer().with_fields(["unmappedField"]);

    let err = assert_err_contains!(
        test.db().find(&projection, 100).await,
        "unmappedField is not mapped"
    );
    assert!(err.is_field_not_mapped());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn unmapped_relationship() {
    let test = DbTest::shop().await;
    let projection = shop::customer().with_relationship("wishList", shop::item());

    let err = assert_err_contains!(
        test.db().find(&projection, 100).await,
        "wishList is not mapped"
    );
    assert!(err.is_relationship_not_mapped());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn relationship_as_field() {
    let test = DbTest::shop().await;
    let projection = shop::customer().with_fields(["shoppingCart"]);

    let err = assert_err_contains!(
        test.db().find(&projection, 100).await,
        "shoppingCart must not be a relationship"
    );
    assert!(err.is_field_is_relationship());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn field_as_relationship() {
    let test = DbTest::shop().await;
    let projection = Projection::new("LineItem").with_relationship("quantity", shop::item());

    let err = assert_err_contains!(
        test.db().find(&projection, 0).await,
        "quantity must not be a relationship"
    );
    assert!(err.is_relationship_is_field());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn recursive_projection() {
    let test = DbTest::shop().await;

    let projection = shop::customer().with_relationship(
        "shoppingCart",
        Projection::new("ShoppingCart")
            .with_fields(["id"])
            .with_relationship("customer", shop::customer()),
    );

    let err = assert_err_contains!(
        test.db().find(&projection, 100).await,
        "Recursive projection for Customer"
    );
    assert!(err.is_recursive_projection());
    assert_eq!(
        err.to_string(),
        "Recursive projection for Customer (path: Customer -> ShoppingCart -> Customer)"
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn unmapped_type() {
    let test = DbTest::shop().await;
    let projection = Projection::new("Supplier").with_fields(["id"]);

    let err = assert_err_contains!(
        test.db().find(&projection, 1).await,
        "constructor for Supplier"
    );
    assert!(err.is_not_mapped());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn unmapped_relationship_target() {
    let mut builder = Db::builder();
    builder.schema(shop::schema()).register(
        "Item",
        TableMapping::new("item")
            .map_fields(["id", "description"])
            .map_relationship(Relationship::many_to_one(
                "supplier",
                "Supplier",
                "supplierid",
            )),
    );
    let test = DbTest::setup(&mut builder).await;

    let projection = shop::item().with_relationship("supplier", Projection::new("Supplier"));

    assert_err_contains!(
        test.db().find(&projection, 10000).await,
        "constructor for Supplier"
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn nested_errors_fail_before_any_read() {
    let test = DbTest::shop().await;

    // The error sits three levels down
    let mut projection = shop::customer_with_cart();
    projection
        .relationship_mut("shoppingCart")
        .and_then(|cart| cart.relationship_mut("lineItems"))
        .and_then(|line_items| line_items.relationship_mut("item"))
        .unwrap()
        .add_field("price");

    assert_err_contains!(
        test.db().find(&projection, 100).await,
        "Item.price is not mapped"
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn wrong_nested_projection_type() {
    let test = DbTest::shop().await;
    let projection = shop::customer().with_relationship("shoppingCart", shop::item());

    let err = assert_err!(test.db().find(&projection, 100).await);
    assert!(err.is_projection_type_mismatch());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn column_missing_from_table_metadata() {
    let mut builder = Db::builder();
    builder.schema(shop::schema()).register(
        "Item",
        TableMapping::new("item").map_fields(["id", "description", "price"]),
    );
    let test = DbTest::setup(&mut builder).await;

    let err = assert_err_contains!(
        test.db().find(&shop::item().with_fields(["price"]), 10000).await,
        "column `price`"
    );
    assert!(err.is_invalid_schema());
    assert!(test.log().is_empty());
}
