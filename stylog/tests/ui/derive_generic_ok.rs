use std::{collections::HashMap, marker::PhantomData};

use stylog::Loggable;

struct Opaque;

#[derive(Loggable)]
struct Page<T> {
    items: Vec<T>,
    total: usize,
}

#[derive(Loggable)]
struct Typed<T, Tag> {
    value: T,
    tag: PhantomData<Tag>,
}

#[derive(Loggable)]
struct Lookup<'a, V>
where
    V: Clone,
{
    entries: HashMap<&'a str, V>,
}

fn main() {
    let page = Page {
        items: vec!["a", "b"],
        total: 2,
    };
    let _ = page.to_log_value();

    let typed: Typed<i32, Opaque> = Typed {
        value: 1,
        tag: PhantomData,
    };
    let _ = typed.to_log_value();

    let lookup = Lookup {
        entries: HashMap::from([("k", 1)]),
    };
    let _ = lookup.to_log_value();
}
