//! # Service Container
//!
//! A thread-safe service container mapping string names to factory functions.
//!
//! Every name is registered under one of two lifecycles:
//!
//! - **transient** (a *binding*): the factory runs on every resolution;
//! - **singleton**: the factory runs on first resolution and its value is cached.
//!
//! Factories receive the container, so they can resolve their own dependencies.
//!
//! ## Quick Start
//!
//! ```rust
//! use service_container::Container;
//! use std::sync::Arc;
//!
//! let container = Container::new();
//! container.register_singleton("db_url", |_| Ok("postgres://localhost".to_string()));
//! container.register_transient("connection", |c| {
//!     let url = c.resolve_as::<String>("db_url")?;
//!     Ok(format!("connection to {url}"))
//! });
//!
//! let conn: Arc<String> = container.resolve_as("connection").unwrap();
//! assert_eq!(&*conn, "connection to postgres://localhost");
//! ```
//!
//! ## Shared Container
//!
//! A process-wide container is available through free functions:
//!
//! ```rust
//! use service_container::{bind, resolve_as};
//! use std::sync::Arc;
//!
//! bind("greeting", |_| Ok("Hello, World!"));
//! let greeting: Arc<&str> = resolve_as("greeting").unwrap();
//! assert_eq!(*greeting, "Hello, World!");
//! ```
//!
//! Use [`define_container!`] to create further isolated static containers.
//!
//! ## Main Items
//!
//! - [`Container`] - Independent container instance
//! - [`bind`] / [`singleton`] - Register on the shared container
//! - [`resolve`] / [`resolve_as`] - Resolve from the shared container
//! - [`ContainerError`] - Resolution failures
//! - [`ContainerEvent`] - Events passed to trace callbacks

#[macro_use]
mod macros;

mod container;
mod container_error;
mod container_event;

pub use container::{Container, Value};
pub use container_error::{ContainerError, FactoryError};
pub use container_event::{ContainerEvent, ResolveOutcome, TraceCallback};

define_container!(
    /// The process-wide shared container, built on first use and kept until exit.
    shared
);

pub use shared::{bind, resolve, resolve_as, singleton};
