//! Integration tests for isolation between containers.
//!
//! Containers defined with `define_container!` and containers built with `Container::new`
//! never share registrations, caches, or trace callbacks.

use service_container::{define_container, Container};
use std::sync::Arc;

#[test]
fn test_multiple_isolated_containers() {
    define_container!(database);
    define_container!(cache);
    define_container!(config);

    database::bind("url", |_| Ok("postgresql://localhost".to_string()));
    cache::bind("url", |_| Ok("redis://localhost".to_string()));
    config::bind("url", |_| Ok("file:///etc/app.toml".to_string()));

    let db: Arc<String> = database::resolve_as("url").unwrap();
    let cache_val: Arc<String> = cache::resolve_as("url").unwrap();
    let cfg: Arc<String> = config::resolve_as("url").unwrap();

    assert_eq!(&**db, "postgresql://localhost");
    assert_eq!(&**cache_val, "redis://localhost");
    assert_eq!(&**cfg, "file:///etc/app.toml");
}

#[test]
fn test_container_does_not_leak_between_instances() {
    define_container!(isolated_a);
    define_container!(isolated_b);

    isolated_a::singleton("only_in_a", |_| Ok("A"));

    assert!(isolated_a::has("only_in_a"));
    assert!(!isolated_b::has("only_in_a"));
    assert!(isolated_b::resolve("only_in_a").unwrap_err().is_no_binding());
}

#[test]
fn test_singleton_cache_is_per_container() {
    let first = Container::new();
    let second = Container::new();

    for container in [&first, &second] {
        container.register_singleton("clock", |_| Ok(std::time::Instant::now()));
    }

    let a = first.resolve("clock").unwrap();
    let b = second.resolve("clock").unwrap();
    assert!(!Arc::ptr_eq(&a, &b));

    second.unregister("clock");
    assert!(first.is_cached("clock"));
    assert!(!second.has("clock"));
}

#[test]
fn test_factory_receives_resolving_container() {
    let left = Container::new();
    let right = Container::new();

    for (container, side) in [(&left, "left"), (&right, "right")] {
        container.register_transient("side", move |_| Ok(side));
        container.register_transient("label", |c| {
            let side: Arc<&str> = c.resolve_as("side")?;
            Ok(format!("{} side", *side))
        });
    }

    assert_eq!(left.resolve_cloned::<String>("label").unwrap(), "left side");
    assert_eq!(right.resolve_cloned::<String>("label").unwrap(), "right side");
}

#[test]
fn test_container_scoping() {
    mod module_a {
        use service_container::define_container;
        define_container!(scoped);

        pub fn setup() {
            scoped::bind("owner", |_| Ok("module A".to_string()));
        }

        pub fn owner() -> String {
            scoped::resolve_cloned("owner").unwrap()
        }
    }

    mod module_b {
        use service_container::define_container;
        define_container!(scoped);

        pub fn setup() {
            scoped::bind("owner", |_| Ok("module B".to_string()));
        }

        pub fn owner() -> String {
            scoped::resolve_cloned("owner").unwrap()
        }
    }

    module_a::setup();
    module_b::setup();

    assert_eq!(module_a::owner(), "module A");
    assert_eq!(module_b::owner(), "module B");
}
