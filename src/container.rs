//! A named service container mapping string names to factories.
//!
//! Each name is registered under at most one lifecycle:
//!
//! - **transient** (a *binding*): the factory runs on every [`Container::resolve`];
//! - **singleton**: the factory runs on first resolution and the value is cached.
//!
//! Registering a name under one lifecycle removes it from the other and drops any cached
//! singleton value, so the last registration always wins.
//!
//! # Examples
//!
//! ```
//! use service_container::Container;
//! use std::sync::Arc;
//!
//! let container = Container::new();
//! container.register_transient("greeting", |_| Ok("Hello".to_string()));
//! container.register_singleton("answer", |_| Ok(42u32));
//!
//! let greeting: Arc<String> = container.resolve_as("greeting").unwrap();
//! assert_eq!(&*greeting, "Hello");
//! assert_eq!(*container.resolve_as::<u32>("answer").unwrap(), 42);
//! assert!(container.is_cached("answer"));
//! ```

use std::{
    any::{type_name, Any},
    collections::HashMap,
    fmt,
    sync::{Arc, Mutex, MutexGuard},
};

use crate::{ContainerError, ContainerEvent, FactoryError, ResolveOutcome, TraceCallback};

/// Type-erased value produced by a factory.
///
/// The container never inspects it. Use [`Container::resolve_as`] or
/// `Arc::downcast` to get the concrete type back.
pub type Value = Arc<dyn Any + Send + Sync>;

type Factory = Arc<dyn Fn(&Container) -> Result<Value, FactoryError> + Send + Sync>;

#[derive(Default)]
struct Bindings {
    transient: HashMap<String, Factory>,
    singletons: HashMap<String, Factory>,
    instances: HashMap<String, Value>,
}

enum Lookup {
    Cached(Value),
    Singleton(Factory),
    Transient(Factory),
    Missing,
}

/// Thread-safe registry of named factories.
///
/// All three mappings sit behind one mutex. The lock is released before any factory or trace
/// callback runs, so a factory may freely resolve other names from the container it receives.
///
/// There is no cycle detection: a factory chain that resolves its own name keeps recursing
/// until the stack is exhausted.
pub struct Container {
    bindings: Mutex<Bindings>,
    trace: Mutex<Option<Arc<TraceCallback>>>,
}

impl Container {
    /// Creates an empty container.
    pub fn new() -> Self {
        Self {
            bindings: Mutex::new(Bindings::default()),
            trace: Mutex::new(None),
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Tracing
    // -------------------------------------------------------------------------------------------------

    /// Set a tracing callback invoked for every container operation.
    ///
    /// The callback runs without any container lock held, so it may call back into the
    /// container.
    pub fn set_trace_callback(&self, callback: impl Fn(&ContainerEvent) + Send + Sync + 'static) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = Some(Arc::new(callback));
    }

    /// Clear the tracing callback. Registered factories are not affected.
    pub fn clear_trace_callback(&self) {
        let mut guard = self.trace.lock().unwrap_or_else(|p| p.into_inner());
        *guard = None;
    }

    fn emit_event(&self, event: ContainerEvent) {
        match &event {
            ContainerEvent::Resolve {
                outcome: ResolveOutcome::Failed | ResolveOutcome::NotFound,
                ..
            } => tracing::debug!(event = %event, "container event"),
            _ => tracing::trace!(event = %event, "container event"),
        }

        let callback = self
            .trace
            .lock()
            .unwrap_or_else(|p| p.into_inner())
            .clone();
        if let Some(callback) = callback {
            callback(&event);
        }
    }

    // -------------------------------------------------------------------------------------------------
    // Registration
    // -------------------------------------------------------------------------------------------------

    // No user code runs while the lock is held, so a poisoned lock still guards consistent maps.
    fn bindings(&self) -> MutexGuard<'_, Bindings> {
        self.bindings.lock().unwrap_or_else(|p| p.into_inner())
    }

    /// Registers `factory` as a transient binding: it runs on every resolution of `name`.
    ///
    /// Any singleton registration (and cached value) under `name` is removed.
    pub fn register_transient<T, F>(&self, name: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Container) -> Result<T, FactoryError> + Send + Sync + 'static,
    {
        let name = name.into();

        // Replaced entries are dropped after the lock is released.
        let _replaced = {
            let mut bindings = self.bindings();
            let singleton = bindings.singletons.remove(&name);
            let instance = bindings.instances.remove(&name);
            let transient = bindings.transient.insert(name.clone(), erase(factory));
            (singleton, instance, transient)
        };

        self.emit_event(ContainerEvent::RegisterTransient { name });
    }

    /// Registers `factory` as a singleton. It is not invoked until the first resolution.
    ///
    /// Any transient binding under `name` is removed, and a value cached by a previous
    /// singleton registration is dropped.
    pub fn register_singleton<T, F>(&self, name: impl Into<String>, factory: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&Container) -> Result<T, FactoryError> + Send + Sync + 'static,
    {
        let name = name.into();

        let _replaced = {
            let mut bindings = self.bindings();
            let transient = bindings.transient.remove(&name);
            let instance = bindings.instances.remove(&name);
            let singleton = bindings.singletons.insert(name.clone(), erase(factory));
            (transient, instance, singleton)
        };

        self.emit_event(ContainerEvent::RegisterSingleton { name });
    }

    /// Removes `name` from the transient, singleton, and cache mappings, wherever present.
    pub fn unregister(&self, name: &str) {
        let _removed = {
            let mut bindings = self.bindings();
            (
                bindings.transient.remove(name),
                bindings.singletons.remove(name),
                bindings.instances.remove(name),
            )
        };

        self.emit_event(ContainerEvent::Unregister {
            name: name.to_string(),
        });
    }

    /// Removes every registration and cached value.
    ///
    /// Values already handed out stay valid; only the container's references are dropped.
    pub fn clear(&self) {
        let _cleared = std::mem::take(&mut *self.bindings());
        self.emit_event(ContainerEvent::Clear);
    }

    // -------------------------------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------------------------------

    pub fn is_transient(&self, name: &str) -> bool {
        self.bindings().transient.contains_key(name)
    }

    pub fn is_singleton(&self, name: &str) -> bool {
        self.bindings().singletons.contains_key(name)
    }

    /// Whether a singleton value for `name` has been produced and memoized.
    pub fn is_cached(&self, name: &str) -> bool {
        self.bindings().instances.contains_key(name)
    }

    /// Whether `name` has a transient or singleton registration.
    pub fn has(&self, name: &str) -> bool {
        let found = {
            let bindings = self.bindings();
            bindings.transient.contains_key(name) || bindings.singletons.contains_key(name)
        };

        self.emit_event(ContainerEvent::Contains {
            name: name.to_string(),
            found,
        });

        found
    }

    // -------------------------------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------------------------------

    /// Resolves `name` to a value.
    ///
    /// - singleton: returns the cached value, or runs the factory once and caches its result;
    /// - transient: runs the factory every time;
    /// - otherwise fails with [`ContainerError::NoBindingFound`].
    ///
    /// Factory failures come back as [`ContainerError::Factory`] and leave the cache empty, so
    /// the next call runs the singleton factory again.
    pub fn resolve(&self, name: &str) -> Result<Value, ContainerError> {
        let lookup = {
            let bindings = self.bindings();
            match bindings.singletons.get(name) {
                Some(factory) => match bindings.instances.get(name) {
                    Some(value) => Lookup::Cached(Arc::clone(value)),
                    None => Lookup::Singleton(Arc::clone(factory)),
                },
                None => match bindings.transient.get(name) {
                    Some(factory) => Lookup::Transient(Arc::clone(factory)),
                    None => Lookup::Missing,
                },
            }
        };

        let (result, outcome) = match lookup {
            Lookup::Cached(value) => (Ok(value), ResolveOutcome::Cached),
            Lookup::Singleton(factory) => match factory(self) {
                Ok(value) => (
                    Ok(self.memoize(name, &factory, value)),
                    ResolveOutcome::Constructed,
                ),
                Err(err) => (Err(ContainerError::Factory(err)), ResolveOutcome::Failed),
            },
            Lookup::Transient(factory) => match factory(self) {
                Ok(value) => (Ok(value), ResolveOutcome::Transient),
                Err(err) => (Err(ContainerError::Factory(err)), ResolveOutcome::Failed),
            },
            Lookup::Missing => (
                Err(ContainerError::NoBindingFound {
                    name: name.to_string(),
                }),
                ResolveOutcome::NotFound,
            ),
        };

        self.emit_event(ContainerEvent::Resolve {
            name: name.to_string(),
            outcome,
        });

        result
    }

    /// Stores a freshly built singleton value, unless the registration that produced it was
    /// replaced or removed while the factory ran. If another thread cached a value first,
    /// that value is returned instead.
    fn memoize(&self, name: &str, factory: &Factory, value: Value) -> Value {
        let mut bindings = self.bindings();

        let current = bindings
            .singletons
            .get(name)
            .is_some_and(|registered| Arc::ptr_eq(registered, factory));
        if !current {
            return value;
        }

        if let Some(existing) = bindings.instances.get(name) {
            return Arc::clone(existing);
        }
        bindings.instances.insert(name.to_string(), Arc::clone(&value));
        value
    }

    /// Resolves `name` and downcasts the value to `T`.
    ///
    /// # Errors
    ///
    /// - any error from [`Container::resolve`]
    /// - [`ContainerError::TypeMismatch`] if the value is not a `T`
    pub fn resolve_as<T: Send + Sync + 'static>(&self, name: &str) -> Result<Arc<T>, ContainerError> {
        self.resolve(name)?
            .downcast::<T>()
            .map_err(|_| ContainerError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Resolves `name` and returns an owned clone of the value.
    pub fn resolve_cloned<T: Send + Sync + Clone + 'static>(
        &self,
        name: &str,
    ) -> Result<T, ContainerError> {
        let arc = self.resolve_as::<T>(name)?;
        Ok((*arc).clone())
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings();

        let mut transient: Vec<&str> = bindings.transient.keys().map(String::as_str).collect();
        let mut singletons: Vec<&str> = bindings.singletons.keys().map(String::as_str).collect();
        transient.sort_unstable();
        singletons.sort_unstable();

        f.debug_struct("Container")
            .field("transient", &transient)
            .field("singletons", &singletons)
            .field("cached", &bindings.instances.len())
            .finish()
    }
}

fn erase<T, F>(factory: F) -> Factory
where
    T: Send + Sync + 'static,
    F: Fn(&Container) -> Result<T, FactoryError> + Send + Sync + 'static,
{
    Arc::new(move |container: &Container| factory(container).map(|value| Arc::new(value) as Value))
}

// -------------------------------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------------------------------
