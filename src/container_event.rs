use std::fmt;

/// Events emitted by a container during operations.
///
/// These events are passed to the tracing callback set via `set_trace_callback`
/// and logged through `tracing`. The `Clone` derive allows callbacks to store or
/// forward events if needed.
///
/// # Examples
///
/// ```rust
/// use service_container::ContainerEvent;
///
/// let event = ContainerEvent::RegisterSingleton { name: "db".to_string() };
/// assert_eq!(event.to_string(), "register_singleton { name: db }");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContainerEvent {
    /// A transient factory was registered.
    RegisterTransient { name: String },

    /// A singleton factory was registered.
    RegisterSingleton { name: String },

    /// A name was resolved (or failed to resolve).
    Resolve {
        name: String,
        outcome: ResolveOutcome,
    },

    /// A `has` check was performed.
    Contains { name: String, found: bool },

    /// A name was removed.
    Unregister { name: String },

    /// The container was cleared.
    Clear,
}

/// How a [`ContainerEvent::Resolve`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    /// Singleton served from the cache.
    Cached,
    /// Singleton factory ran and its value was cached.
    Constructed,
    /// Transient factory ran.
    Transient,
    /// The factory returned an error.
    Failed,
    /// No registration for the name.
    NotFound,
}

impl ResolveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolveOutcome::Cached => "cached",
            ResolveOutcome::Constructed => "constructed",
            ResolveOutcome::Transient => "transient",
            ResolveOutcome::Failed => "failed",
            ResolveOutcome::NotFound => "not_found",
        }
    }
}

impl fmt::Display for ResolveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ContainerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerEvent::RegisterTransient { name } => {
                write!(f, "register_transient {{ name: {name} }}")
            }
            ContainerEvent::RegisterSingleton { name } => {
                write!(f, "register_singleton {{ name: {name} }}")
            }
            ContainerEvent::Resolve { name, outcome } => {
                write!(f, "resolve {{ name: {name}, outcome: {outcome} }}")
            }
            ContainerEvent::Contains { name, found } => {
                write!(f, "contains {{ name: {name}, found: {found} }}")
            }
            ContainerEvent::Unregister { name } => write!(f, "unregister {{ name: {name} }}"),
            ContainerEvent::Clear => write!(f, "Clearing the Container"),
        }
    }
}

/// Type alias for the user-supplied tracing callback.
///
/// It must be thread-safe because containers are shared across threads.
pub type TraceCallback = dyn Fn(&ContainerEvent) + Send + Sync + 'static;
