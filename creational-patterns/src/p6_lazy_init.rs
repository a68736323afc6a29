// Pattern 6: Lazy Initialization - Deferred Colleague Loading
// The eager person loads its colleague list at construction; the lazy person
// defers the load into a OnceCell that fills on first access and never again.

use std::cell::{Cell, OnceCell};

fn fetch_colleagues(name: &str) -> Vec<String> {
    println!("loading colleagues of {name} from the database");
    vec![format!("{name}'s teammate"), format!("{name}'s manager")]
}

// ============================================================================
// Example: Eager Loading
// ============================================================================

struct EagerPerson {
    name: String,
    colleagues: Vec<String>,
}

impl EagerPerson {
    fn load(name: &str) -> Self {
        // The related collection is populated up front, needed or not.
        EagerPerson {
            name: name.to_string(),
            colleagues: fetch_colleagues(name),
        }
    }

    /// Number of records a save would write: the person and every loaded
    /// colleague.
    fn save(&self) -> usize {
        1 + self.colleagues.len()
    }
}

// ============================================================================
// Example: Lazy Loading
// ============================================================================

struct LazyPerson {
    name: String,
    colleagues: OnceCell<Vec<String>>,
    loads: Cell<usize>,
}

impl LazyPerson {
    fn new(name: &str) -> Self {
        LazyPerson {
            name: name.to_string(),
            colleagues: OnceCell::new(),
            loads: Cell::new(0),
        }
    }

    fn colleagues(&self) -> &[String] {
        self.colleagues.get_or_init(|| {
            self.loads.set(self.loads.get() + 1);
            fetch_colleagues(&self.name)
        })
    }

    /// Saves only what has been materialized so far.
    fn save(&self) -> usize {
        1 + self.colleagues.get().map_or(0, Vec::len)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eager_person_is_populated_at_construction() {
        let person = EagerPerson::load("John");
        assert_eq!(person.colleagues.len(), 2);
        assert_eq!(person.save(), 3);
    }

    #[test]
    fn lazy_person_loads_nothing_until_asked() {
        let person = LazyPerson::new("John");
        assert_eq!(person.loads.get(), 0);
        assert_eq!(person.save(), 1);
    }

    #[test]
    fn lazy_load_happens_exactly_once() {
        let person = LazyPerson::new("John");
        let first = person.colleagues().to_vec();
        let second = person.colleagues().to_vec();
        assert_eq!(first, second);
        assert_eq!(person.loads.get(), 1);
        assert_eq!(person.save(), 3);
    }
}

fn main() {
    println!("=== Eager Loading ===");
    let eager = EagerPerson::load("John");
    println!(
        "constructed {}; save would write {} records\n",
        eager.name,
        eager.save()
    );

    println!("=== Lazy Loading ===");
    let lazy = LazyPerson::new("Jane");
    println!(
        "constructed {}; nothing loaded yet, save would write {} record",
        lazy.name,
        lazy.save()
    );

    println!("first access:");
    println!("  colleagues: {:?}", lazy.colleagues());
    println!("second access:");
    println!("  colleagues: {:?}", lazy.colleagues());
    println!(
        "loads performed: {}; save would now write {} records",
        lazy.loads.get(),
        lazy.save()
    );
}
