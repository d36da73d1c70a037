//! Macros for creating named static containers.

/// Creates a module holding a lazily constructed static [`Container`](crate::Container).
///
/// The macro generates a module containing:
/// - Container static (hidden), built on first access
/// - `container()` returning the `&'static Container`
/// - Free functions delegating to it: `bind`, `singleton`, `resolve`, `resolve_as`,
///   `resolve_cloned`, `has`, `is_transient`, `is_singleton`, `unbind`,
///   `set_trace_callback`, `clear_trace_callback`
///
/// # Examples
///
/// ```rust
/// use service_container::define_container;
/// use std::sync::Arc;
///
/// define_container!(app);
///
/// app::bind("greeting", |_| Ok("Hello".to_string()));
/// app::singleton("answer", |_| Ok(42i32));
///
/// let msg: Arc<String> = app::resolve_as("greeting").unwrap();
/// let num: Arc<i32> = app::resolve_as("answer").unwrap();
///
/// assert_eq!(&**msg, "Hello");
/// assert_eq!(*num, 42);
/// ```
///
/// Attributes, including doc comments, are forwarded to the generated module.
///
/// # Multiple Containers
///
/// Each invocation creates an isolated container:
///
/// ```rust
/// use service_container::define_container;
///
/// define_container!(database);
/// define_container!(cache);
///
/// database::bind("url", |_| Ok("postgres://localhost"));
///
/// assert!(database::has("url"));
/// assert!(!cache::has("url"));
/// ```
#[macro_export]
macro_rules! define_container {
    ($(#[$attr:meta])* $name:ident) => {
        $(#[$attr])*
        pub mod $name {
            use std::sync::{Arc, LazyLock};

            static CONTAINER: LazyLock<$crate::Container> =
                LazyLock::new(|| $crate::Container::new());

            /// The container behind this module's free functions.
            pub fn container() -> &'static $crate::Container {
                &CONTAINER
            }

            /// Register a transient binding.
            pub fn bind<T, F>(name: impl Into<String>, factory: F)
            where
                T: Send + Sync + 'static,
                F: Fn(&$crate::Container) -> Result<T, $crate::FactoryError> + Send + Sync + 'static,
            {
                CONTAINER.register_transient(name, factory)
            }

            /// Register a lazily built singleton.
            pub fn singleton<T, F>(name: impl Into<String>, factory: F)
            where
                T: Send + Sync + 'static,
                F: Fn(&$crate::Container) -> Result<T, $crate::FactoryError> + Send + Sync + 'static,
            {
                CONTAINER.register_singleton(name, factory)
            }

            /// Resolve a name to its type-erased value.
            pub fn resolve(name: &str) -> Result<$crate::Value, $crate::ContainerError> {
                CONTAINER.resolve(name)
            }

            /// Resolve a name and downcast the value.
            pub fn resolve_as<T: Send + Sync + 'static>(
                name: &str,
            ) -> Result<Arc<T>, $crate::ContainerError> {
                CONTAINER.resolve_as(name)
            }

            /// Resolve a name and clone the value.
            pub fn resolve_cloned<T: Send + Sync + Clone + 'static>(
                name: &str,
            ) -> Result<T, $crate::ContainerError> {
                CONTAINER.resolve_cloned(name)
            }

            pub fn has(name: &str) -> bool {
                CONTAINER.has(name)
            }

            pub fn is_transient(name: &str) -> bool {
                CONTAINER.is_transient(name)
            }

            pub fn is_singleton(name: &str) -> bool {
                CONTAINER.is_singleton(name)
            }

            /// Remove a name from the container.
            pub fn unbind(name: &str) {
                CONTAINER.unregister(name)
            }

            /// Set a tracing callback for container operations.
            pub fn set_trace_callback(
                callback: impl Fn(&$crate::ContainerEvent) + Send + Sync + 'static,
            ) {
                CONTAINER.set_trace_callback(callback)
            }

            /// Clear the tracing callback.
            pub fn clear_trace_callback() {
                CONTAINER.clear_trace_callback()
            }
        }
    };
}
