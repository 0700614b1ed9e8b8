mod value;
pub use value::Value;

mod value_cmp;

mod value_json;

mod value_object;
pub use value_object::ValueObject;

mod value_record;
pub use value_record::ValueRecord;
