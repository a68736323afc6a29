// Pattern 5: Object Pool - Free List with a Draining Capacity Counter
// acquire() reuses released handles before constructing new ones, and errors
// once the construction budget is spent. The budget is never restored, so a
// handle dropped instead of released consumes its slot for good. See
// p5_object_pool_counted for the corrected accounting.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
enum PoolError {
    #[error("no available connections")]
    Exhausted,
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
    remaining: usize,
    next_id: usize,
}

impl ConnectionPool {
    fn new(max_connections: usize) -> Self {
        ConnectionPool {
            free: Vec::new(),
            remaining: max_connections,
            next_id: 0,
        }
    }

    fn acquire(&mut self) -> Result<Connection, PoolError> {
        if let Some(connection) = self.free.pop() {
            return Ok(connection);
        }
        if self.remaining > 0 {
            self.remaining -= 1;
            self.next_id += 1;
            println!("creating new database connection: {}", self.next_id);
            return Ok(Connection { id: self.next_id });
        }
        Err(PoolError::Exhausted)
    }

    fn release(&mut self, connection: Connection) {
        self.free.push(connection);
    }

    /// Handles reachable without an error: the free list plus the budget.
    fn available(&self) -> usize {
        self.free.len() + self.remaining
    }
}

// ============================================================================
// Tests
// ============================================================================


fn pool_example() -> Result<(), PoolError> {
    let mut pool = ConnectionPool::new(5);

    let connection1 = pool.acquire()?;
    println!("{}", connection1.query("SELECT * FROM users"));

    let connection2 = pool.acquire()?;
    println!("{}", connection2.query("SELECT * FROM tasks"));

    pool.release(connection1);
    pool.release(connection2);
    println!("available after releases: {}", pool.available());

    println!("\n=== Exhaustion ===");
    let mut tiny = ConnectionPool::new(1);
    let held = tiny.acquire()?;
    if let Err(err) = tiny.acquire() {
        println!("second acquire: {err}");
    }
    tiny.release(held);
    Ok(())
}

fn main() {
    println!("=== Object Pool: Draining Budget ===\n");
    if let Err(err) = pool_example() {
        println!("pool error: {err}");
    }
}
