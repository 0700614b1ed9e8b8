pub mod db;
pub use db::Db;

mod engine;

pub mod verify;
pub use verify::{Mismatch, Verifier};

pub use crouton_core::{
    driver,
    schema::{
        self,
        app::{DomainType, JoinTable, Link, RelationKind, Relationship, TableMapping},
    },
    stmt::{self, Value, ValueObject},
    Error, Projection, Result, Schema,
};
