//! Capture ordering and reset.

use super::common::use_dispatcher;
use cmdtree::{Dispatch, Dispatcher, Tokenizer, WILDCARD};
use pretty_assertions::assert_eq;
use std::sync::{Arc, Mutex};

#[test]
fn test_capture_store_resets_after_each_run() {
    let (mut dispatcher, store) = use_dispatcher();
    assert_eq!(
        dispatcher.run("use alice show"),
        Dispatch::Executed("show alice".to_string())
    );
    assert!(dispatcher.tree().captured(store).is_empty());
    assert_eq!(
        dispatcher.run("use bob show"),
        Dispatch::Executed("show bob".to_string())
    );
}

#[test]
fn test_wildcard_spelled_argument_is_captured() {
    let (mut dispatcher, _) = use_dispatcher();
    assert_eq!(
        dispatcher.run("use ^_^ show"),
        Dispatch::Executed("show ^_^".to_string())
    );
}

#[test]
fn test_captures_follow_token_order() {
    let mut dispatcher: Dispatcher<Vec<String>> =
        Dispatcher::new(Tokenizer::regex(r"\s+").expect("valid pattern"));
    let tree = dispatcher.tree_mut();
    let store = tree.new_store();
    let done = tree
        .executable_with("done", move |c| c.get(store).to_vec())
        .build()
        .expect("done");
    let third = tree.capturing(WILDCARD).child(done).build().expect("third");
    let literal = tree.capturing("to").child(third).build().expect("to");
    let second = tree.capturing(WILDCARD).child(literal).build().expect("second");
    let root = tree
        .capturing("copy")
        .capture_into(store)
        .child(second)
        .build()
        .expect("copy");
    dispatcher.register(root).expect("register copy");

    assert_eq!(
        dispatcher.run("copy a.txt to b.txt done"),
        Dispatch::Executed(vec!["a.txt".to_string(), "b.txt".to_string()])
    );
    assert!(dispatcher.tree().captured(store).is_empty());
}

#[test]
fn test_dispatcher_can_be_shared_behind_a_mutex() {
    let (dispatcher, _) = use_dispatcher();
    let shared = Arc::new(Mutex::new(dispatcher));

    let handles: Vec<_> = ["alice", "bob", "carol"]
        .into_iter()
        .map(|name| {
            let shared = Arc::clone(&shared);
            std::thread::spawn(move || {
                shared
                    .lock()
                    .expect("lock")
                    .run(&format!("use {name} show"))
            })
        })
        .collect();

    for (handle, name) in handles.into_iter().zip(["alice", "bob", "carol"]) {
        let outcome = handle.join().expect("thread");
        assert_eq!(outcome, Dispatch::Executed(format!("show {name}")));
    }
}
