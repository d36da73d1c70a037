//! Integration tests for trace callbacks and container events.

use service_container::{Container, ContainerEvent, FactoryError, ResolveOutcome};
use std::sync::{Arc, Mutex};

fn recording(container: &Container) -> Arc<Mutex<Vec<ContainerEvent>>> {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();

    container.set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(event.clone());
    });

    events
}

fn resolve_event(name: &str, outcome: ResolveOutcome) -> ContainerEvent {
    ContainerEvent::Resolve {
        name: name.to_string(),
        outcome,
    }
}

#[test]
fn test_basic_tracing() {
    let container = Container::new();
    let events = recording(&container);

    container.register_transient("foo", |_| Ok("bar"));
    let _ = container.resolve("foo");
    let _ = container.has("foo");

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            ContainerEvent::RegisterTransient {
                name: "foo".to_string()
            },
            resolve_event("foo", ResolveOutcome::Transient),
            ContainerEvent::Contains {
                name: "foo".to_string(),
                found: true
            },
        ]
    );
}

#[test]
fn test_singleton_outcomes() {
    let container = Container::new();
    let events = recording(&container);

    container.register_singleton("baz", |_| Ok("qux"));
    let _ = container.resolve("baz");
    let _ = container.resolve("baz");

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert_eq!(captured[1], resolve_event("baz", ResolveOutcome::Constructed));
    assert_eq!(captured[2], resolve_event("baz", ResolveOutcome::Cached));
}

#[test]
fn test_failure_outcomes() {
    let container = Container::new();
    container.register_transient("broken", |_| -> Result<(), FactoryError> {
        Err("boom".into())
    });
    let events = recording(&container);

    let _ = container.resolve("broken");
    let _ = container.resolve("missing");

    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            resolve_event("broken", ResolveOutcome::Failed),
            resolve_event("missing", ResolveOutcome::NotFound),
        ]
    );
}

#[test]
fn test_nested_resolution_events_in_order() {
    let container = Container::new();
    container.register_singleton("inner", |_| Ok(1u8));
    container.register_transient("outer", |c| Ok(*c.resolve_as::<u8>("inner")? + 1));
    let events = recording(&container);

    let _ = container.resolve("outer");

    // The nested resolution completes before the outer one
    let captured = events.lock().unwrap();
    assert_eq!(
        *captured,
        vec![
            resolve_event("inner", ResolveOutcome::Constructed),
            resolve_event("outer", ResolveOutcome::Transient),
        ]
    );
}

#[test]
fn test_unregister_and_clear_events() {
    let container = Container::new();
    let events = recording(&container);

    container.register_singleton("db", |_| Ok(()));
    container.unregister("db");
    container.clear();

    let captured: Vec<String> = events.lock().unwrap().iter().map(|e| e.to_string()).collect();
    assert_eq!(
        captured,
        vec![
            "register_singleton { name: db }",
            "unregister { name: db }",
            "Clearing the Container",
        ]
    );
}

#[test]
fn test_clear_trace_callback_stops_events() {
    let container = Container::new();
    let events = recording(&container);

    container.register_transient("a", |_| Ok(1i32));
    container.clear_trace_callback();

    container.register_transient("b", |_| Ok(2i32));
    let _ = container.resolve("b");
    let _ = container.has("b");

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_tracing_is_per_container() {
    let traced = Container::new();
    let silent = Container::new();
    let events = recording(&traced);

    traced.register_transient("a", |_| Ok(1i32));
    silent.register_transient("a", |_| Ok(2i32));
    let _ = silent.resolve("a");

    assert_eq!(events.lock().unwrap().len(), 1);
}
