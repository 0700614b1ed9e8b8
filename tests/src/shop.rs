//! The shop schema used across integration tests.
//!
//! ```text
//! Customer 1 -- 0..1 ShoppingCart 1 -- * LineItem * -- 1 Item
//! Customer * -- * Discount            (through customerdiscount)
//! ```

use crouton::{
    schema::db::{Column, ForeignKey, Table},
    JoinTable, Projection, Relationship, Schema, TableMapping, Value,
};
use crouton_driver_memory::Memory;

/// Every shop type mapped to its table.
pub fn schema() -> Schema {
    let mut schema = Schema::new();

    schema.register_mapping(
        "Customer",
        TableMapping::new("customer")
            .map_field("id")
            .map_field_to("firstName", "firstname")
            .map_field_to("lastName", "lastname")
            .map_relationship(Relationship::one_to_one_mapped_by(
                "shoppingCart",
                "ShoppingCart",
                "customer",
            ))
            .map_relationship(Relationship::many_to_many(
                "discounts",
                "Discount",
                JoinTable::new("customerdiscount", "customerid", "discountid"),
            )),
    );

    schema.register_mapping(
        "ShoppingCart",
        TableMapping::new("shoppingcart")
            .map_field("id")
            .map_relationship(
                Relationship::one_to_one("customer", "Customer", "customerid")
                    .with_target_field("shoppingCart"),
            )
            .map_relationship(Relationship::one_to_many(
                "lineItems",
                "LineItem",
                "shoppingCart",
            )),
    );

    schema.register_mapping(
        "LineItem",
        TableMapping::new("lineitem")
            .with_primary_key("line")
            .map_fields(["line", "quantity", "itemid"])
            .map_relationship(
                Relationship::many_to_one("shoppingCart", "ShoppingCart", "shoppingcartid")
                    .with_target_field("lineItems"),
            )
            .map_relationship(Relationship::many_to_one("item", "Item", "itemid")),
    );

    schema.register_mapping(
        "Item",
        TableMapping::new("item").map_fields(["id", "description"]),
    );

    schema.register_mapping(
        "Discount",
        TableMapping::new("discount")
            .map_fields(["id", "description", "percent"])
            .map_relationship(Relationship::many_to_many_mapped_by(
                "customers",
                "Customer",
                "discounts",
            )),
    );

    for table in tables() {
        schema.register_table(table);
    }

    schema
}

/// Table metadata, as a data dictionary would report it.
pub fn tables() -> Vec<Table> {
    vec![
        Table::new("customer")
            .with_column(Column::new("id"))
            .with_column(Column::new("firstname"))
            .with_column(Column::new("lastname"))
            .with_primary_key(["id"]),
        Table::new("shoppingcart")
            .with_column(Column::new("id"))
            .with_column(Column::new("customerid").nullable())
            .with_primary_key(["id"])
            .with_foreign_key(ForeignKey::new(
                "fkcustomerid",
                "customerid",
                "customer",
                "id",
            )),
        Table::new("lineitem")
            .with_column(Column::new("line"))
            .with_column(Column::new("shoppingcartid"))
            .with_column(Column::new("quantity"))
            .with_column(Column::new("itemid"))
            .with_primary_key(["line"]),
        Table::new("item")
            .with_column(Column::new("id"))
            .with_column(Column::new("description"))
            .with_primary_key(["id"]),
        Table::new("discount")
            .with_column(Column::new("id"))
            .with_column(Column::new("description"))
            .with_column(Column::new("percent"))
            .with_primary_key(["id"]),
    ]
}

/// Fills `memory` with the shop data:
///
/// - customer 100 Craig Walton owns cart 1000 holding three line items,
/// - customer 101 Sam Burton has no cart,
/// - customer 102 Ruth Okafor owns cart 1003, which is empty,
/// - customers 100 and 101 share discount 2; customer 100 also references a
///   discount (99) that no longer exists.
pub async fn seed(memory: &Memory) {
    for (id, first, last) in [
        (100, "Craig", "Walton"),
        (101, "Sam", "Burton"),
        (102, "Ruth", "Okafor"),
    ] {
        memory
            .insert(
                "customer",
                [
                    ("id", Value::from(id)),
                    ("firstname", first.into()),
                    ("lastname", last.into()),
                ],
            )
            .await;
    }

    for (id, customer) in [(1000, 100), (1003, 102)] {
        memory
            .insert("shoppingcart", [("id", id), ("customerid", customer)])
            .await;
    }

    for (line, quantity, item) in [(0, 1, 10000), (1, 5, 10014), (2, 2, 10011)] {
        memory
            .insert(
                "lineitem",
                [
                    ("line", line),
                    ("shoppingcartid", 1000),
                    ("quantity", quantity),
                    ("itemid", item),
                ],
            )
            .await;
    }

    for (id, description) in [
        (10000, "toothpaste"),
        (10011, "half and half"),
        (10014, "holy bible"),
        (10020, "dish soap"),
    ] {
        memory
            .insert(
                "item",
                [("id", Value::from(id)), ("description", description.into())],
            )
            .await;
    }

    for (id, description, percent) in [(1, "loyalty", 10), (2, "spring sale", 15)] {
        memory
            .insert(
                "discount",
                [
                    ("id", Value::from(id)),
                    ("description", description.into()),
                    ("percent", percent.into()),
                ],
            )
            .await;
    }

    for (customer, discount) in [(100, 1), (100, 2), (100, 99), (101, 2)] {
        memory
            .insert(
                "customerdiscount",
                [("customerid", customer), ("discountid", discount)],
            )
            .await;
    }
}

pub fn customer() -> Projection {
    Projection::new("Customer").with_fields(["id", "firstName", "lastName"])
}

pub fn item() -> Projection {
    Projection::new("Item").with_fields(["id", "description"])
}

pub fn line_items() -> Projection {
    Projection::new("LineItem")
        .with_fields(["line", "quantity", "itemid"])
        .with_relationship("item", item())
}

pub fn shopping_cart() -> Projection {
    Projection::new("ShoppingCart")
        .with_fields(["id"])
        .with_relationship("lineItems", line_items())
}

/// Customer -> shoppingCart -> lineItems -> item
pub fn customer_with_cart() -> Projection {
    customer().with_relationship("shoppingCart", shopping_cart())
}
