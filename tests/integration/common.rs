//! Shared grammar fixtures.

use cmdtree::{Dispatcher, StoreId, Tokenizer, WILDCARD};

/// Returns a zero-argument action producing `s`.
pub fn text(s: &'static str) -> impl Fn() -> String + Send + Sync + 'static {
    move || s.to_string()
}

/// `echo zhao`, `echo [zhao] name`, `echo [zhao] age`, split on single spaces.
pub fn echo_dispatcher() -> Dispatcher<String> {
    let mut dispatcher = Dispatcher::new(Tokenizer::literal(" ").expect("valid delimiter"));
    let tree = dispatcher.tree_mut();
    let name = tree
        .executable("name", text("zhao的名字是赵凌宇"))
        .build()
        .expect("name");
    let age = tree
        .executable("age", text("zhao的年龄是20岁"))
        .build()
        .expect("age");
    let bracket = tree
        .branch("[zhao]")
        .children([name, age])
        .build()
        .expect("[zhao]");
    let zhao = tree.executable("zhao", text("zhao")).build().expect("zhao");
    let echo = tree
        .branch("echo")
        .children([bracket, zhao])
        .build()
        .expect("echo");
    dispatcher.register(echo).expect("register echo");
    dispatcher
}

/// `use <name> show`: the name is captured and echoed by `show`.
pub fn use_dispatcher() -> (Dispatcher<String>, StoreId) {
    let mut dispatcher = Dispatcher::new(Tokenizer::regex(r"\s+").expect("valid pattern"));
    let tree = dispatcher.tree_mut();
    let store = tree.new_store();
    let show = tree
        .executable_with("show", move |c| format!("show {}", c.get(store).join(" ")))
        .build()
        .expect("show");
    let slot = tree.capturing(WILDCARD).child(show).build().expect("slot");
    let root = tree
        .capturing("use")
        .capture_into(store)
        .child(slot)
        .build()
        .expect("use");
    dispatcher.register(root).expect("register use");
    (dispatcher, store)
}
