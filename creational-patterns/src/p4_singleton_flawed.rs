// Pattern 4: Singleton - Shared by Construction (flawed on purpose)
// new() registers the first instance in a static and clones it for every
// later caller, so exclusivity holds only for callers that use new(). The
// Default impl below is a second construction path that skips the registry
// and mints a distinct instance. Do not copy this scheme; it is kept here
// as the contrast to the OnceLock accessor.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, OnceLock};

static NEXT_ID: AtomicUsize = AtomicUsize::new(1);

#[derive(Debug)]
struct ConnectionState {
    id: usize,
}

impl ConnectionState {
    fn fresh() -> Self {
        ConnectionState {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }
}

#[derive(Clone)]
struct Connection {
    state: Arc<ConnectionState>,
}

impl Connection {
    fn new() -> Self {
        static FIRST: OnceLock<Arc<ConnectionState>> = OnceLock::new();
        Connection {
            state: Arc::clone(FIRST.get_or_init(|| Arc::new(ConnectionState::fresh()))),
        }
    }

    fn id(&self) -> usize {
        self.state.id
    }

    fn shares_state_with(&self, other: &Connection) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

// The second path around the registry.
impl Default for Connection {
    fn default() -> Self {
        Connection {
            state: Arc::new(ConnectionState::fresh()),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructed_handles_share_state() {
        let first = Connection::new();
        let second = Connection::new();
        assert!(first.shares_state_with(&second));
        assert_eq!(first.id(), second.id());
    }

    // The documented defect: a handle built through any other path is a
    // different instance.
    #[test]
    fn default_path_escapes_the_registry() {
        let registered = Connection::new();
        let stray = Connection::default();
        assert!(!registered.shares_state_with(&stray));
        assert_ne!(registered.id(), stray.id());
    }
}

fn main() {
    println!("=== Shared-by-Construction Singleton ===\n");

    let s1 = Connection::new();
    let s2 = Connection::new();
    println!(
        "via new():     ids {} and {}, shared: {}",
        s1.id(),
        s2.id(),
        s1.shares_state_with(&s2)
    );

    let s3 = Connection::default();
    println!(
        "via default(): id {}, shared with s1: {}",
        s3.id(),
        s1.shares_state_with(&s3)
    );
}
