// Pattern 4: Singleton - OnceLock Accessor
// One lazily constructed connection shared process-wide. Direct construction
// is impossible outside this file because the struct has no public
// constructor; every caller goes through global().

use std::sync::OnceLock;

struct Connection {
    dsn: String,
}

impl Connection {
    fn global() -> &'static Connection {
        static INSTANCE: OnceLock<Connection> = OnceLock::new();
        INSTANCE.get_or_init(|| Connection {
            dsn: "db://shared".to_string(),
        })
    }

    fn query(&self, sql: &str) -> String {
        format!("executed query: {sql}")
    }
}

fn singleton_example() {
    let connection1 = Connection::global();
    println!("connected to {}", connection1.dsn);
    println!("{}", connection1.query("SELECT * FROM employees"));

    let connection2 = Connection::global();
    println!("{}", connection2.query("UPDATE employees SET age = 25"));

    println!("same instance: {}", std::ptr::eq(connection1, connection2));
}

// ============================================================================
// Example: Dependency Injection Instead of a Global
// ============================================================================

struct Database {
    connection_string: String,
}

impl Database {
    fn new(connection_string: impl Into<String>) -> Self {
        Database {
            connection_string: connection_string.into(),
        }
    }
}

struct EmployeeService<'a> {
    db: &'a Database,
}

impl<'a> EmployeeService<'a> {
    fn new(db: &'a Database) -> Self {
        EmployeeService { db }
    }

    fn connection(&self) -> &str {
        &self.db.connection_string
    }
}

fn dependency_injection_example() {
    // Explicit dependencies, no hidden global state.
    let db = Database::new("postgres://localhost");
    let service = EmployeeService::new(&db);
    println!("service talks to: {}", service.connection());
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== Singleton via OnceLock ===\n");
    singleton_example();

    println!("\n=== Dependency Injection ===");
    dependency_injection_example();
}
