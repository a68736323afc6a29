// Pattern 1: Factory - Function-Pointer Construction
// Products are plain records that carry their transition as data. The factory
// is a table mapping category tags to constructor functions.

use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Planned,
    Wishlisted,
    Drafted,
    Completed,
    Purchased,
    Deleted,
    Archived,
}

#[derive(Debug, Error, PartialEq)]
enum FactoryError {
    #[error("category not supported: {0}")]
    UnsupportedCategory(String),
}

struct Task {
    status: Status,
    on_advance: fn(Status) -> Status,
}

impl Task {
    fn advance(&mut self) {
        self.status = (self.on_advance)(self.status);
    }

    fn delete(&mut self) {
        self.status = Status::Deleted;
    }

    fn archive(&mut self) {
        self.status = Status::Archived;
    }
}

// ============================================================================
// Example: Constructors and the Lookup Table
// ============================================================================

fn new_home_task() -> Task {
    Task {
        status: Status::Planned,
        on_advance: |_| Status::Completed,
    }
}

fn new_shop_task() -> Task {
    Task {
        status: Status::Wishlisted,
        on_advance: |_| Status::Purchased,
    }
}

fn new_work_task() -> Task {
    Task {
        status: Status::Planned,
        on_advance: |_| Status::Drafted,
    }
}

fn constructors() -> HashMap<&'static str, fn() -> Task> {
    HashMap::from([
        ("home", new_home_task as fn() -> Task),
        ("shop", new_shop_task as fn() -> Task),
        ("work", new_work_task as fn() -> Task),
    ])
}

fn task_for(tag: &str) -> Result<Task, FactoryError> {
    constructors()
        .get(tag)
        .map(|make| make())
        .ok_or_else(|| FactoryError::UnsupportedCategory(tag.to_string()))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_covers_every_category() {
        for (tag, initial, advanced) in [
            ("work", Status::Planned, Status::Drafted),
            ("home", Status::Planned, Status::Completed),
            ("shop", Status::Wishlisted, Status::Purchased),
        ] {
            let mut task = task_for(tag).unwrap();
            assert_eq!(task.status, initial);
            task.advance();
            assert_eq!(task.status, advanced);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            task_for("body").map(|t| t.status),
            Err(FactoryError::UnsupportedCategory("body".to_string()))
        );
    }

    #[test]
    fn shared_behavior_is_plain_data() {
        let mut task = new_work_task();
        task.archive();
        assert_eq!(task.status, Status::Archived);

        // The transition function is untouched by archival.
        task.advance();
        assert_eq!(task.status, Status::Drafted);

        task.delete();
        assert_eq!(task.status, Status::Deleted);
    }
}

fn main() {
    println!("=== Factory from a Constructor Table ===\n");

    let tags = ["home", "shop", "work"];
    let mut tasks: Vec<Task> = Vec::new();
    for tag in tags {
        match task_for(tag) {
            Ok(task) => tasks.push(task),
            Err(err) => println!("rejected: {err}"),
        }
    }

    let statuses: Vec<Status> = tasks.iter().map(|t| t.status).collect();
    println!("initial:  {statuses:?}");

    for task in &mut tasks {
        task.advance();
    }
    let statuses: Vec<Status> = tasks.iter().map(|t| t.status).collect();
    println!("advanced: {statuses:?}");

    tasks[0].archive();
    tasks[1].delete();
    let statuses: Vec<Status> = tasks.iter().map(|t| t.status).collect();
    println!("afterward: {statuses:?}");

    println!("\n=== Unknown Category Tag ===");
    if let Err(err) = task_for("life") {
        println!("rejected: {err}");
    }
}
