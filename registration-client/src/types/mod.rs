pub mod query;

pub use query::{
    deserialize_lenient_number, deserialize_lenient_string_list, deserialize_null_default,
    SortOrder,
};
