// Pattern 5: Object Pool - Checked-Out Accounting
// The corrected pool tracks how many handles are out and restores the count
// on release, so acquire/release cycles can run indefinitely on a small pool.
// Invariant: checked_out + free.len() <= capacity.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum PoolError {
    #[error("maximum connections reached")]
    MaxConnections,
}

#[derive(Debug)]
struct Connection {
    id: usize,
}

impl Connection {
    fn query(&self, sql: &str) -> String {
        format!("executing query on connection {}: {}", self.id, sql)
    }
}

struct ConnectionPool {
    free: Vec<Connection>,
    checked_out: usize,
    capacity: usize,
    next_id: usize,
}

impl ConnectionPool {
    fn new(capacity: usize) -> Self {
        ConnectionPool {
            free: Vec::new(),
            checked_out: 0,
            capacity,
            next_id: 0,
        }
    }

    fn acquire(&mut self) -> Result<Connection, PoolError> {
        if let Some(connection) = self.free.pop() {
            self.checked_out += 1;
            return Ok(connection);
        }
        // The free list is empty here, so every constructed connection is out.
        if self.checked_out < self.capacity {
            self.checked_out += 1;
            self.next_id += 1;
            println!("creating new database connection: {}", self.next_id);
            return Ok(Connection { id: self.next_id });
        }
        Err(PoolError::MaxConnections)
    }

    // Taking the connection by value is what makes the accounting sound:
    // a handle can only be released once, and only if it was acquired.
    fn release(&mut self, connection: Connection) {
        self.checked_out -= 1;
        self.free.push(connection);
    }

    fn in_use(&self) -> usize {
        self.checked_out
    }

    fn available(&self) -> usize {
        self.capacity - self.checked_out
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn acquiring_past_the_ceiling_errors() {
        let mut pool = ConnectionPool::new(2);
        let _c1 = pool.acquire().unwrap();
        let _c2 = pool.acquire().unwrap();
        assert_eq!(pool.acquire().err(), Some(PoolError::MaxConnections));
    }

    #[test]
    fn released_handles_are_immediately_reusable() {
        let mut pool = ConnectionPool::new(1);
        let c1 = pool.acquire().unwrap();
        let first_id = c1.id;
        pool.release(c1);

        let c2 = pool.acquire().unwrap();
        assert_eq!(c2.id, first_id);
        assert_eq!(pool.in_use(), 1);
    }

    #[test]
    fn cycles_do_not_exhaust_a_pool_of_one() {
        let mut pool = ConnectionPool::new(1);
        for _ in 0..10 {
            let connection = pool.acquire().unwrap();
            pool.release(connection);
        }
        assert_eq!(pool.available(), 1);
        // Only one connection was ever constructed.
        assert_eq!(pool.next_id, 1);
    }

    proptest! {
        // Whatever the acquire/release interleaving, an acquire fails only
        // when every handle is already out, and construction stays bounded
        // by the capacity.
        #[test]
        fn accounting_matches_the_handles_held(
            capacity in 1usize..6,
            ops in prop::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut pool = ConnectionPool::new(capacity);
            let mut held = Vec::new();
            for wants_acquire in ops {
                if wants_acquire {
                    match pool.acquire() {
                        Ok(connection) => {
                            prop_assert!(held.len() < capacity);
                            held.push(connection);
                        }
                        Err(_) => prop_assert_eq!(held.len(), capacity),
                    }
                } else if let Some(connection) = held.pop() {
                    pool.release(connection);
                }
                prop_assert_eq!(pool.in_use(), held.len());
                prop_assert!(pool.next_id <= capacity);
            }
        }
    }
}

fn main() {
    println!("=== Object Pool: Checked-Out Accounting ===\n");

    let mut pool = ConnectionPool::new(5);
    match pool.acquire() {
        Ok(connection) => {
            println!("{}", connection.query("SELECT * FROM users"));
            pool.release(connection);
        }
        Err(err) => println!("acquire failed: {err}"),
    }

    println!("\n=== A Pool of One, Cycled ===");
    let mut tiny = ConnectionPool::new(1);
    for round in 1..=3 {
        match tiny.acquire() {
            Ok(connection) => {
                println!("round {round}: {}", connection.query("SELECT 1"));
                tiny.release(connection);
            }
            Err(err) => println!("round {round}: {err}"),
        }
    }
    println!("in use: {}, available: {}", tiny.in_use(), tiny.available());
}
