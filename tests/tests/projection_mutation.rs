use tests::prelude::*;

use pretty_assertions::assert_eq;

#[tokio::test]
async fn changes_after_a_fetch_apply_to_the_next_fetch() {
    let test = DbTest::shop().await;
    let mut projection = Projection::new("Customer").with_fields(["id"]);

    let before = test.db().find(&projection, 100).await.unwrap().unwrap();
    assert_eq!(before, Value::from(json!({ "id": 100 })));

    projection
        .add_field("lastName")
        .add_relationship("shoppingCart", Projection::new("ShoppingCart"));

    let after = test.db().find(&projection, 100).await.unwrap().unwrap();
    assert_eq!(
        after,
        Value::from(json!({ "id": 100, "lastName": "Walton", "shoppingCart": {} }))
    );

    projection
        .relationship_mut("shoppingCart")
        .unwrap()
        .add_field("id");

    let again = test.db().find(&projection, 100).await.unwrap().unwrap();
    assert_eq!(again["shoppingCart"], Value::from(json!({ "id": 1000 })));
}

#[tokio::test]
async fn a_projection_broken_after_use_is_rejected() {
    let test = DbTest::shop().await;
    let mut projection = shop::customer();

    assert!(test.db().find(&projection, 100).await.unwrap().is_some());
    let reads = test.log().len();

    projection.add_field("unmappedField");

    assert_err_contains!(
        test.db().find(&projection, 100).await,
        "unmappedField is not mapped"
    );
    assert_eq!(test.log().len(), reads);
}

#[tokio::test]
async fn replacing_a_nested_projection() {
    let test = DbTest::shop().await;
    let mut projection = Projection::new("LineItem")
        .with_fields(["line"])
        .with_relationship("item", Projection::new("Item").with_fields(["id"]));

    let first = test.db().find(&projection, 2).await.unwrap().unwrap();
    assert_eq!(first["item"], Value::from(json!({ "id": 10011 })));

    projection.add_relationship("item", Projection::new("Item").with_fields(["description"]));

    let second = test.db().find(&projection, 2).await.unwrap().unwrap();
    assert_eq!(
        second,
        Value::from(json!({ "line": 2, "item": { "description": "half and half" } }))
    );
}

#[tokio::test]
async fn one_projection_shared_across_tasks() {
    let test = DbTest::shop().await;
    let db = test.db().clone();
    let projection = std::sync::Arc::new(shop::customer_with_cart());

    let handles = [100, 101, 102].map(|key| {
        let db = db.clone();
        let projection = projection.clone();
        tokio::spawn(async move { db.find(&projection, key).await })
    });

    let mut names = vec![];
    for handle in handles {
        let customer = handle.await.unwrap().unwrap().unwrap();
        names.push(customer["firstName"].clone());
    }

    assert_eq!(
        names,
        [Value::from("Craig"), Value::from("Sam"), Value::from("Ruth")]
    );
}
