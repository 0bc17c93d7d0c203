//! Per-load listener scoping
//!
//! Each media load gets its own [`ListenerId`]. Registering a new one
//! releases the previous one first, so events still in flight for an
//! earlier load are recognized as stale and dropped.

use serde::{Deserialize, Serialize};

/// Handle identifying the listeners of one media load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListenerId(u64);

impl ListenerId {
    /// Rebuild an id received back from a surface
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw value to hand to a surface
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "listener#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy)]
struct Registration {
    id: ListenerId,
    /// Position reports are only listened to once metadata is ready
    position_attached: bool,
}

/// Tracks the single live listener registration of a session
#[derive(Debug, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    active: Option<Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Release the current registration (if any) and open a new one
    pub fn register(&mut self) -> ListenerId {
        self.release();

        self.next_id += 1;
        let id = ListenerId(self.next_id);
        self.active = Some(Registration {
            id,
            position_attached: false,
        });

        tracing::trace!(%id, "Listener registered");
        id
    }

    /// Release the current registration
    ///
    /// Returns the released id, if there was one.
    pub fn release(&mut self) -> Option<ListenerId> {
        let released = self.active.take().map(|r| r.id);
        if let Some(id) = released {
            tracing::trace!(%id, "Listener released");
        }
        released
    }

    /// Currently registered listener
    pub fn current(&self) -> Option<ListenerId> {
        self.active.map(|r| r.id)
    }

    /// Whether `id` belongs to the live registration
    pub fn is_current(&self, id: ListenerId) -> bool {
        self.current() == Some(id)
    }

    /// Start accepting position reports for `id`
    ///
    /// Returns false if `id` is stale or was already attached.
    pub fn attach_position(&mut self, id: ListenerId) -> bool {
        match self.active.as_mut() {
            Some(registration) if registration.id == id && !registration.position_attached => {
                registration.position_attached = true;
                true
            }
            _ => false,
        }
    }

    /// Whether position reports delivered through `id` should be applied
    pub fn accepts_position(&self, id: ListenerId) -> bool {
        self.active
            .is_some_and(|r| r.id == id && r.position_attached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_releases_previous() {
        let mut registry = ListenerRegistry::new();
        let first = registry.register();
        let second = registry.register();

        assert_ne!(first, second);
        assert!(!registry.is_current(first));
        assert!(registry.is_current(second));
    }

    #[test]
    fn position_requires_attachment() {
        let mut registry = ListenerRegistry::new();
        let id = registry.register();

        assert!(!registry.accepts_position(id));
        assert!(registry.attach_position(id));
        assert!(registry.accepts_position(id));

        // Second metadata-ready for the same load is not a fresh attach
        assert!(!registry.attach_position(id));
    }

    #[test]
    fn stale_id_cannot_attach() {
        let mut registry = ListenerRegistry::new();
        let old = registry.register();
        let _new = registry.register();

        assert!(!registry.attach_position(old));
        assert!(!registry.accepts_position(old));
    }

    #[test]
    fn release_clears_everything() {
        let mut registry = ListenerRegistry::new();
        let id = registry.register();
        registry.attach_position(id);

        assert_eq!(registry.release(), Some(id));
        assert_eq!(registry.current(), None);
        assert!(!registry.accepts_position(id));
        assert_eq!(registry.release(), None);
    }

    #[test]
    fn ids_are_never_reused() {
        let mut registry = ListenerRegistry::new();
        let first = registry.register();
        registry.release();
        let second = registry.register();
        assert!(second > first);
    }
}
