use tests::prelude::*;

use pretty_assertions::assert_eq;

use crouton::{verify, Verifier};

fn expected_craig() -> Value {
    // Line items deliberately out of order
    json!({
        "id": "100",
        "firstName": "Craig",
        "lastName": "Walton",
        "shoppingCart": {
            "id": 1000,
            "lineItems": [
                { "line": 2, "quantity": "2", "itemid": 10011, "item": { "id": 10011, "description": "half and half" } },
                { "line": 0, "quantity": 1, "itemid": 10000, "item": { "id": 10000, "description": "toothpaste" } },
                { "line": 1, "quantity": 5, "itemid": 10014, "item": { "id": 10014, "description": "holy bible" } }
            ]
        }
    })
    .into()
}

#[tokio::test]
async fn fetched_graph_matches_expected() {
    let test = DbTest::shop().await;
    let projection = shop::customer_with_cart();

    let actual = test.db().find(&projection, 100).await.unwrap().unwrap();

    let mismatches = verify::verify(test.db().schema(), &projection, &expected_craig(), &actual);
    assert_eq!(mismatches, vec![]);
}

#[tokio::test]
async fn differences_are_reported_by_path() {
    let test = DbTest::shop().await;
    let projection = shop::customer_with_cart();

    let actual = test.db().find(&projection, 100).await.unwrap().unwrap();

    let mut expected = expected_craig().to_json();
    expected["lastName"] = json!("Walker");
    expected["shoppingCart"]["lineItems"][0]["item"]["description"] = json!("milk");
    let expected = Value::from(expected);

    let mismatches = verify::verify(test.db().schema(), &projection, &expected, &actual)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>();

    assert_eq!(
        mismatches,
        [
            "Customer.lastName: expected \"Walker\", found \"Walton\"",
            "Customer.shoppingCart.lineItems[2].item.description: expected \"milk\", found \"half and half\"",
        ]
    );
}

#[tokio::test]
async fn missing_cart_is_a_mismatch() {
    let test = DbTest::shop().await;
    let projection = shop::customer_with_cart();

    let sam = test.db().find(&projection, 101).await.unwrap().unwrap();
    let craig = test.db().find(&projection, 100).await.unwrap().unwrap();

    let mismatches = Verifier::new(test.db().schema()).verify(&projection, &craig, &sam);

    // Names differ and the cart is missing; nothing below the cart is compared
    assert_eq!(mismatches.len(), 4);
    assert_eq!(mismatches[3].path, "Customer.shoppingCart");
    assert!(mismatches[3].message.ends_with("found null"));
}
