// Pattern 1: Factory - Closed Sum Type
// The category table becomes an enum, so construction and dispatch are
// exhaustive matches checked at compile time. The only runtime failure left
// is parsing a foreign tag at the string boundary.

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

// One variant per category. Adding a category without handling it everywhere
// is a compile error, not a default-throw at runtime.
#[derive(Debug)]
enum Task {
    Work { status: Status },
    Home { status: Status },
    Shop { status: Status },
}

impl Task {
    fn new(category: Category) -> Self {
        match category {
            Category::Work => Task::Work {
                status: Status::Planned,
            },
            Category::Home => Task::Home {
                status: Status::Planned,
            },
            Category::Shop => Task::Shop {
                status: Status::Wishlisted,
            },
        }
    }

    fn status(&self) -> Status {
        match self {
            Task::Work { status } | Task::Home { status } | Task::Shop { status } => *status,
        }
    }

    fn set_status(&mut self, new: Status) {
        match self {
            Task::Work { status } | Task::Home { status } | Task::Shop { status } => *status = new,
        }
    }

    fn advance(&mut self) {
        match self {
            Task::Work { status } => *status = Status::Drafted,
            Task::Home { status } => *status = Status::Completed,
            Task::Shop { status } => *status = Status::Purchased,
        }
    }

    fn delete(&mut self) {
        self.set_status(Status::Deleted);
    }

    fn archive(&mut self) {
        self.set_status(Status::Archived);
    }
}

fn task_for(tag: &str) -> Result<Task, FactoryError> {
    Ok(Task::new(Category::parse(tag)?))
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
            let mut task = Task::new(category);
            assert_eq!(task.status(), initial);
            task.advance();
            assert_eq!(task.status(), advanced);
        }
    }

    #[test]
    fn archival_applies_to_any_variant() {
        let mut home = Task::new(Category::Home);
        home.archive();
        assert_eq!(home.status(), Status::Archived);

        let mut shop = Task::new(Category::Shop);
        shop.delete();
        assert_eq!(shop.status(), Status::Deleted);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(
            task_for("trip").map(|t| t.status()),
            Err(FactoryError::UnsupportedCategory("trip".to_string()))
        );
    }
}

fn main() {
    println!("=== Factory as a Closed Sum Type ===\n");

    let mut home = Task::new(Category::Home);
    let mut shop = Task::new(Category::Shop);
    let mut work = Task::new(Category::Work);
    println!(
        "initial:   {:?} {:?} {:?}",
        home.status(),
        shop.status(),
        work.status()
    );

    work.advance();
    home.advance();
    shop.advance();
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
    if let Err(err) = task_for("mind") {
        println!("rejected: {err}");
    }
}
