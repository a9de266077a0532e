//! Prebuilt grammars.
//!
//! Templates only use the public tree construction API; they are ordinary
//! grammar authors that happen to ship with the crate.

pub mod sql;

pub use sql::{
    sql_select, sql_tokenizer, Callback, SELECT_CALLBACKS, SQL_EXTRACTION_GROUP,
    SQL_EXTRACTION_PATTERN,
};
