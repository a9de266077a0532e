//! The prebuilt SELECT grammar driven through the regex-group tokenizer.

use cmdtree::templates::{sql_select, sql_tokenizer, Callback};
use cmdtree::{Dispatch, Dispatcher, GrammarError, SyntaxTree};
use pretty_assertions::assert_eq;

fn fields(label: &'static str) -> Callback<(String, Vec<String>)> {
    Box::new(move |values: &[String]| (label.to_string(), values.to_vec()))
}

#[test]
fn test_select_where_captures_fields() {
    let mut dispatcher = Dispatcher::new(sql_tokenizer().expect("sql pattern"));
    let tree = dispatcher.tree_mut();
    let store = tree.new_store();
    let callbacks = ["table", "where", "group by", "order by", "limit"]
        .into_iter()
        .map(fields)
        .collect();
    let select = sql_select(tree, store, callbacks).expect("select grammar");
    dispatcher.register(select).expect("register select");

    let outcome = dispatcher.run("select * from zhao where age=20;");
    assert_eq!(
        outcome,
        Dispatch::Executed((
            "where".to_string(),
            vec!["*".to_string(), "zhao".to_string(), "age=20".to_string()]
        ))
    );
    assert!(dispatcher.tree().captured(store).is_empty());
}

#[test]
fn test_select_help_at_positions() {
    let mut dispatcher = Dispatcher::new(sql_tokenizer().expect("sql pattern"));
    let tree = dispatcher.tree_mut();
    let store = tree.new_store();
    let callbacks = ["a", "b", "c", "d", "e"].into_iter().map(fields).collect();
    let select = sql_select(tree, store, callbacks).expect("select grammar");
    dispatcher.register(select).expect("register select");

    assert_eq!(
        dispatcher.help_at(&["select", "*", "from", "users"]),
        Some("Name of the table to query.")
    );
    assert_eq!(
        dispatcher.help_at(&["select", "*", "from", "users", "where", "x=1"]),
        Some("An equation or inequality rows must satisfy.")
    );
}

#[test]
fn test_select_requires_all_callbacks() {
    let mut tree: SyntaxTree<(String, Vec<String>)> = SyntaxTree::new();
    let store = tree.new_store();
    let callbacks = ["a", "b", "c"].into_iter().map(fields).collect();
    let err = sql_select(&mut tree, store, callbacks).unwrap_err();
    assert_eq!(
        err,
        GrammarError::MissingCallback {
            expected: 5,
            provided: 3
        }
    );
}
