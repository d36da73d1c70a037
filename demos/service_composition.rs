//! Service composition example for service-container.
//!
//! Demonstrates:
//! - Contracts (traits) resolved as `Arc<dyn Trait>`
//! - Factories resolving their own dependencies from the container
//! - Swapping an implementation at runtime
//! - Observing container activity with a trace callback
//!
//! Run with: `cargo run --example service_composition`

use service_container::{Container, ContainerError, FactoryError};
use std::sync::Arc;

// =============================================================================
// Contracts
// =============================================================================

trait Logger: Send + Sync {
    fn log(&self, message: &str);
}

trait Notifier: Send + Sync {
    fn notify(&self, recipient: &str, message: &str);
}

// =============================================================================
// Implementations
// =============================================================================

struct ConsoleLogger;

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        println!("   [CONSOLE] {message}");
    }
}

struct FileLogger {
    path: String,
}

impl Logger for FileLogger {
    fn log(&self, message: &str) {
        println!("   [FILE:{}] {message}", self.path);
    }
}

/// Sends notifications and logs each one through the injected logger.
struct EmailNotifier {
    smtp_host: String,
    logger: Arc<dyn Logger>,
}

impl Notifier for EmailNotifier {
    fn notify(&self, recipient: &str, message: &str) {
        self.logger
            .log(&format!("email via {} to {recipient}: {message}", self.smtp_host));
    }
}

fn logger(c: &Container) -> Result<Arc<dyn Logger>, FactoryError> {
    Ok(Arc::clone(&*c.resolve_as::<Arc<dyn Logger>>("logger")?))
}

fn register_services(container: &Container) {
    container.register_singleton("smtp_host", |_| Ok("smtp.example.com".to_string()));
    container.register_singleton("logger", |_| Ok(Arc::new(ConsoleLogger) as Arc<dyn Logger>));
    container.register_transient("notifier", |c| {
        let notifier = EmailNotifier {
            smtp_host: c.resolve_cloned("smtp_host")?,
            logger: logger(c)?,
        };
        Ok(Arc::new(notifier) as Arc<dyn Notifier>)
    });
}

fn main() -> Result<(), ContainerError> {
    println!("=== service-container: Service Composition ===\n");

    let container = Container::new();
    container.set_trace_callback(|event| println!("   (trace) {event}"));

    println!("1. Registering services...");
    register_services(&container);

    println!("\n2. Resolving the notifier (builds its dependencies)...");
    let notifier: Arc<Arc<dyn Notifier>> = container.resolve_as("notifier")?;
    notifier.notify("alice@example.com", "welcome aboard");

    println!("\n3. Swapping the logger implementation...");
    container.register_singleton("logger", |_| {
        Ok(Arc::new(FileLogger {
            path: "/var/log/notify.log".to_string(),
        }) as Arc<dyn Logger>)
    });

    let notifier: Arc<Arc<dyn Notifier>> = container.resolve_as("notifier")?;
    notifier.notify("bob@example.com", "your report is ready");

    println!("\n4. Resolving with a missing dependency...");
    container.unregister("smtp_host");
    match container.resolve("notifier") {
        Ok(_) => println!("   unexpectedly resolved"),
        Err(e) => println!("   Error (expected): {e}"),
    }

    container.clear_trace_callback();
    println!("\n=== Example Complete ===");
    Ok(())
}
