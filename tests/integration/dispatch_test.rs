//! Dispatch through literal paths, misses, and executable precedence.

use super::common::{echo_dispatcher, text};
use cmdtree::{Dispatch, Dispatcher, GrammarError, NotFound, Tokenizer, NOT_FOUND, WILDCARD};

#[test]
fn test_echo_paths() {
    let mut dispatcher = echo_dispatcher();
    assert_eq!(
        dispatcher.run("echo zhao"),
        Dispatch::Executed("zhao".to_string())
    );
    assert_eq!(
        dispatcher.run("echo [zhao] name"),
        Dispatch::Executed("zhao的名字是赵凌宇".to_string())
    );
}

#[test]
fn test_unknown_token_returns_diagnostic() {
    let mut dispatcher = echo_dispatcher();
    let outcome = dispatcher.run("echo unknown_token");
    assert_eq!(
        outcome,
        Dispatch::NotFound(NotFound::for_token("unknown_token"))
    );
    assert!(outcome
        .not_found()
        .is_some_and(|diag| diag.to_string().contains("unknown_token")));
}

#[test]
fn test_repeated_misses_are_equal() {
    let mut dispatcher = echo_dispatcher();
    let first = dispatcher.run("echo nobody");
    let second = dispatcher.run("echo nobody");
    assert_eq!(first, second);
}

#[test]
fn test_attach_to_executable_fails_before_dispatch() {
    let mut dispatcher: Dispatcher<String> =
        Dispatcher::new(Tokenizer::literal(" ").expect("valid delimiter"));
    let tree = dispatcher.tree_mut();
    let leaf = tree.executable("leaf", text("leaf")).build().expect("leaf");
    let extra = tree.branch("extra").build().expect("extra");

    let err = tree.attach(leaf, extra).unwrap_err();
    assert!(matches!(err, GrammarError::AttachToExecutable { .. }));
    assert_eq!(err.category(), "Construction Error");
}

#[test]
fn test_precedence_prefers_deeper_executable() {
    let mut dispatcher: Dispatcher<&'static str> =
        Dispatcher::new(Tokenizer::regex(r"\s+").expect("valid pattern"));
    let tree = dispatcher.tree_mut();
    let all = tree.executable("all", || "list all").build().expect("all");
    let list = tree
        .executable("list", || "list some")
        .child(all)
        .build()
        .expect("list");
    let root = tree.branch("db").child(list).build().expect("db");
    dispatcher.register(root).expect("register db");

    assert_eq!(dispatcher.run("db list"), Dispatch::Executed("list some"));
    assert_eq!(dispatcher.run("db list all"), Dispatch::Executed("list all"));
    assert_eq!(dispatcher.run("db list xyz"), Dispatch::Executed("list some"));
}

#[test]
fn test_wildcard_executable_catches_any_token() {
    let mut dispatcher: Dispatcher<String> =
        Dispatcher::new(Tokenizer::regex(r"\s+").expect("valid pattern"));
    let tree = dispatcher.tree_mut();
    let store = tree.new_store();
    let any = tree
        .executable_with(WILDCARD, move |c| format!("opened {}", c.get(store).join("")))
        .build()
        .expect("wildcard");
    let open = tree
        .capturing("open")
        .capture_into(store)
        .child(any)
        .build()
        .expect("open");
    dispatcher.register(open).expect("register open");

    assert_eq!(
        dispatcher.run("open notes.txt"),
        Dispatch::Executed("opened notes.txt".to_string())
    );
    assert_eq!(
        dispatcher.run("open todo.md"),
        Dispatch::Executed("opened todo.md".to_string())
    );
}

#[test]
fn test_introspection_does_not_execute() {
    let dispatcher = echo_dispatcher();
    let echo = dispatcher.get("echo");
    assert_ne!(echo, NOT_FOUND);
    assert!(!dispatcher.resolve(&["echo", "[zhao]", "age"]).is_sentinel());
    assert_eq!(dispatcher.resolve(&["echo", "missing"]), NOT_FOUND);
}
