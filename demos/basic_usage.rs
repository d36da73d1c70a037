//! Basic usage example for service-container.
//!
//! Demonstrates:
//! - Registering transient bindings and lazily built singletons
//! - Resolving values with `resolve_as()` (returns `Arc<T>`)
//! - Resolving owned values with `resolve_cloned()` (returns `T`)
//! - Checking registration status with `has()`, `is_transient()`, `is_singleton()`
//!
//! Run with: `cargo run --example basic_usage`

use service_container::define_container;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

// Create an isolated container for this example
define_container!(app);

#[derive(Debug, Clone, PartialEq)]
struct AppConfig {
    name: String,
    version: u32,
    debug_mode: bool,
}

static REQUEST_IDS: AtomicU32 = AtomicU32::new(0);

fn main() {
    println!("=== service-container: Basic Usage ===\n");

    // -------------------------------------------------------------------------
    // 1. Register a singleton (built on first resolve)
    // -------------------------------------------------------------------------
    println!("1. Registering a singleton...");

    app::singleton("config", |_| {
        println!("   -> building AppConfig");
        Ok(AppConfig {
            name: "MyApp".to_string(),
            version: 1,
            debug_mode: true,
        })
    });

    println!("   Registered: config (not built yet)");

    // -------------------------------------------------------------------------
    // 2. Register a transient binding (built on every resolve)
    // -------------------------------------------------------------------------
    println!("\n2. Registering a transient binding...");

    app::bind("request_id", |_| Ok(REQUEST_IDS.fetch_add(1, Ordering::SeqCst) + 1));

    println!("   Registered: request_id");

    // -------------------------------------------------------------------------
    // 3. Check registration status
    // -------------------------------------------------------------------------
    println!("\n3. Checking registration status...");

    println!("   has(\"config\")              = {}", app::has("config"));
    println!("   is_singleton(\"config\")     = {}", app::is_singleton("config"));
    println!("   is_transient(\"request_id\") = {}", app::is_transient("request_id"));
    println!("   has(\"missing\")             = {}", app::has("missing"));

    // -------------------------------------------------------------------------
    // 4. Resolve values
    // -------------------------------------------------------------------------
    println!("\n4. Resolving values with resolve_as() -> Arc<T>...");

    let cfg_1: Arc<AppConfig> = app::resolve_as("config").unwrap();
    let cfg_2: Arc<AppConfig> = app::resolve_as("config").unwrap();
    println!("   config:           {:?}", *cfg_1);
    println!("   same instance:    {}", Arc::ptr_eq(&cfg_1, &cfg_2));

    let id_1: u32 = app::resolve_cloned("request_id").unwrap();
    let id_2: u32 = app::resolve_cloned("request_id").unwrap();
    println!("   request ids:      {id_1}, {id_2}");

    // -------------------------------------------------------------------------
    // 5. Re-register under the other lifecycle
    // -------------------------------------------------------------------------
    println!("\n5. Re-registering config as a transient binding...");

    app::bind("config", |_| {
        Ok(AppConfig {
            name: "MyApp".to_string(),
            version: 2,
            debug_mode: false,
        })
    });

    let cfg_3: AppConfig = app::resolve_cloned("config").unwrap();
    println!("   is_singleton(\"config\") = {}", app::is_singleton("config"));
    println!("   config version:         {}", cfg_3.version);

    // -------------------------------------------------------------------------
    // 6. Handle missing names gracefully
    // -------------------------------------------------------------------------
    println!("\n6. Handling missing names...");

    app::unbind("request_id");
    match app::resolve("request_id") {
        Ok(_) => println!("   Found request_id"),
        Err(e) => println!("   Error (expected): {e}"),
    }

    println!("\n=== Example Complete ===");
}
