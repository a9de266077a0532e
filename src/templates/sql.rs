//! Prebuilt grammar for SQL `SELECT` statements.
//!
//! ```text
//! select -> <fields> -> from -> <table>
//! <table>     -> where | group by | order by | limit
//! <condition> -> group by | order by | limit
//! <key>       -> order by | limit
//! <field>     -> limit
//! ```
//!
//! Every `<...>` position is a wildcard slot whose value is captured into the
//! shared store. `<table>`, `<condition>`, `<key>`, `<field>` and the limit
//! range are executable, each backed by one callback receiving the captured
//! values in statement order.

use crate::commands::Tokenizer;
use crate::error::{GrammarError, Result};
use crate::grammar::{NodeId, StoreId, SyntaxTree, WILDCARD};
use tracing::debug;

/// Lexes SQL-like statements when used with capture group
/// [`SQL_EXTRACTION_GROUP`]: `distinct <field>`, `<word> by`, number runs, and
/// otherwise any run of characters up to whitespace or `;`.
pub const SQL_EXTRACTION_PATTERN: &str =
    r"((?:distinct|DISTINCT)\s+?\S+|\w+\s+by|\d+\s*?\d+\s*?\d+|[^\s;]+);*";

/// Capture group of [`SQL_EXTRACTION_PATTERN`] holding the token.
pub const SQL_EXTRACTION_GROUP: usize = 1;

/// Number of callbacks [`sql_select`] requires.
pub const SELECT_CALLBACKS: usize = 5;

/// A callback run at one executable position of a template.
pub type Callback<R> = Box<dyn Fn(&[String]) -> R + Send + Sync>;

/// Tokenizer matching the grammar built by [`sql_select`].
pub fn sql_tokenizer() -> Result<Tokenizer> {
    Tokenizer::regex_group(SQL_EXTRACTION_PATTERN, SQL_EXTRACTION_GROUP)
}

/// Builds the `SELECT` grammar, capturing into `store`.
///
/// Callbacks, by index: table, where condition, group by key, order by field,
/// limit range. Extra callbacks are ignored.
pub fn sql_select<R: 'static>(
    tree: &mut SyntaxTree<R>,
    store: StoreId,
    callbacks: Vec<Callback<R>>,
) -> Result<NodeId> {
    let provided = callbacks.len();
    if provided > SELECT_CALLBACKS {
        debug!(provided, "ignoring extra SELECT callbacks");
    }
    let [table_cb, condition_cb, key_cb, field_cb, range_cb]: [Callback<R>; SELECT_CALLBACKS] =
        callbacks
            .into_iter()
            .take(SELECT_CALLBACKS)
            .collect::<Vec<_>>()
            .try_into()
            .map_err(|_| GrammarError::MissingCallback {
                expected: SELECT_CALLBACKS,
                provided,
            })?;

    let range = tree
        .executable_with(WILDCARD, move |c| range_cb(c.get(store)))
        .alias("offset count")
        .help("One or two numbers selecting the range of rows to return.")
        .build()?;
    let limit = tree
        .capturing("limit")
        .capture_into(store)
        .child(range)
        .build()?;

    let field = tree
        .executable_with(WILDCARD, move |c| field_cb(c.get(store)))
        .alias("order by field")
        .help("Name of the field to sort by.")
        .child(limit)
        .build()?;
    let order_by = tree
        .capturing("order by")
        .capture_into(store)
        .child(field)
        .build()?;

    let key = tree
        .executable_with(WILDCARD, move |c| key_cb(c.get(store)))
        .alias("group by field")
        .help("Name of the field to group by.")
        .children([order_by, limit])
        .build()?;
    let group_by = tree
        .capturing("group by")
        .capture_into(store)
        .child(key)
        .build()?;

    let condition = tree
        .executable_with(WILDCARD, move |c| condition_cb(c.get(store)))
        .alias("where condition")
        .help("An equation or inequality rows must satisfy.")
        .children([group_by, order_by, limit])
        .build()?;
    let where_clause = tree
        .capturing("where")
        .capture_into(store)
        .child(condition)
        .build()?;

    let table = tree
        .executable_with(WILDCARD, move |c| table_cb(c.get(store)))
        .alias("table name")
        .help("Name of the table to query.")
        .children([where_clause, group_by, order_by, limit])
        .build()?;
    let from = tree
        .capturing("from")
        .capture_into(store)
        .help("Names the table being queried.")
        .child(table)
        .build()?;

    let fields = tree
        .capturing(WILDCARD)
        .capture_into(store)
        .alias("fields")
        .help("The fields being selected.")
        .child(from)
        .build()?;
    tree.capturing("select")
        .capture_into(store)
        .help("Reads rows from a table.")
        .child(fields)
        .build()
}
