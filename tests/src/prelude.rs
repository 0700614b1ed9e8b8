//! Common imports for test files
//!
//! This module provides a convenient way to import frequently used items
//! in test files with `use tests::prelude::*;`

pub use crate::{shop, DbTest, ExecLog};

pub use crate::{assert_err, assert_err_contains, assert_none, assert_ok};

pub use crouton::{Projection, Value};

pub use serde_json::json;
