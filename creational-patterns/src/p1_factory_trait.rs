// Pattern 1: Factory - Dispatch by Category Tag
// One dispatcher hides the concrete task types behind a product trait. The
// archival behavior shared by every category is provided on the trait itself.

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    Work,
    Home,
    Shop,
}

impl Category {
    fn parse(tag: &str) -> Result<Self, FactoryError> {
        match tag {
            "work" => Ok(Category::Work),
            "home" => Ok(Category::Home),
            "shop" => Ok(Category::Shop),
            other => Err(FactoryError::UnsupportedCategory(other.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq)]
enum FactoryError {
    #[error("category not supported: {0}")]
    UnsupportedCategory(String),
}

// ============================================================================
// Example: Product Trait with Provided Methods
// ============================================================================

trait Task {
    fn status(&self) -> Status;
    fn set_status(&mut self, status: Status);

    /// Move the task along its category's happy path.
    fn advance(&mut self);

    fn delete(&mut self) {
        self.set_status(Status::Deleted);
    }

    fn archive(&mut self) {
        self.set_status(Status::Archived);
    }
}

struct WorkTask {
    status: Status,
}

impl Task for WorkTask {
    fn status(&self) -> Status {
        self.status
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
    fn advance(&mut self) {
        self.status = Status::Drafted;
    }
}

struct HomeTask {
    status: Status,
}

impl Task for HomeTask {
    fn status(&self) -> Status {
        self.status
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
    fn advance(&mut self) {
        self.status = Status::Completed;
    }
}

struct ShopTask {
    status: Status,
}

impl Task for ShopTask {
    fn status(&self) -> Status {
        self.status
    }
    fn set_status(&mut self, status: Status) {
        self.status = status;
    }
    fn advance(&mut self) {
        self.status = Status::Purchased;
    }
}

// ============================================================================
// Example: The Factory
// ============================================================================

// Clients see only this function and the Task trait, never the concrete types.
fn new_task(category: Category) -> Box<dyn Task> {
    match category {
        Category::Work => Box::new(WorkTask {
            status: Status::Planned,
        }),
        Category::Home => Box::new(HomeTask {
            status: Status::Planned,
        }),
        Category::Shop => Box::new(ShopTask {
            status: Status::Wishlisted,
        }),
    }
}

// String boundary for callers that receive the tag from outside.
fn task_for(tag: &str) -> Result<Box<dyn Task>, FactoryError> {
    Ok(new_task(Category::parse(tag)?))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_mapping() {
        for (category, initial, advanced) in [
            (Category::Work, Status::Planned, Status::Drafted),
            (Category::Home, Status::Planned, Status::Completed),
            (Category::Shop, Status::Wishlisted, Status::Purchased),
        ] {
            let mut task = new_task(category);
            assert_eq!(task.status(), initial);
            task.advance();
            assert_eq!(task.status(), advanced);
        }
    }

    #[test]
    fn string_tags_resolve() {
        assert_eq!(task_for("home").map(|t| t.status()), Ok(Status::Planned));
        assert_eq!(task_for("shop").map(|t| t.status()), Ok(Status::Wishlisted));
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            Category::parse("play"),
            Err(FactoryError::UnsupportedCategory("play".to_string()))
        );
        assert!(task_for("").is_err());
    }

    #[test]
    fn provided_archival_behavior() {
        let mut task = new_task(Category::Home);
        task.archive();
        assert_eq!(task.status(), Status::Archived);

        let mut task = new_task(Category::Shop);
        task.delete();
        assert_eq!(task.status(), Status::Deleted);
    }
}

fn main() {
    println!("=== Factory Dispatch by Category ===\n");

    let mut home = new_task(Category::Home);
    let mut shop = new_task(Category::Shop);
    let mut work = new_task(Category::Work);
    println!(
        "initial:   {:?} {:?} {:?}",
        home.status(),
        shop.status(),
        work.status()
    );

    home.advance();
    shop.advance();
    work.advance();
    println!(
        "advanced:  {:?} {:?} {:?}",
        home.status(),
        shop.status(),
        work.status()
    );

    home.archive();
    shop.delete();
    println!(
        "afterward: {:?} {:?} {:?}",
        home.status(),
        shop.status(),
        work.status()
    );

    println!("\n=== Unknown Category Tag ===");
    if let Err(err) = task_for("play") {
        println!("rejected: {err}");
    }
}
