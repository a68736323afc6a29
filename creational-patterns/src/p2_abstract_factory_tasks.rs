// Pattern 2: Abstract Factory - Task Families
// A family factory hands out urgent and normal tasks sharing the family's
// completion behavior. The second section builds the same products by
// composing traits instead of writing one struct per combination.

use std::marker::PhantomData;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Planned,
    Started,
    Drafted,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Priority {
    Urgent,
    Normal,
}

#[derive(Debug, Error, PartialEq)]
enum FamilyError {
    #[error("family not supported: {0}")]
    Unsupported(String),
}

// ============================================================================
// Example: Families via Trait Objects
// ============================================================================

trait FamilyTask {
    fn status(&self) -> Status;
    fn priority(&self) -> Priority;
    fn advance(&mut self);
}

struct UrgentWorkTask {
    status: Status,
}

impl FamilyTask for UrgentWorkTask {
    fn status(&self) -> Status {
        self.status
    }
    fn priority(&self) -> Priority {
        Priority::Urgent
    }
    fn advance(&mut self) {
        self.status = Status::Drafted;
    }
}

struct NormalWorkTask {
    status: Status,
}

impl FamilyTask for NormalWorkTask {
    fn status(&self) -> Status {
        self.status
    }
    fn priority(&self) -> Priority {
        Priority::Normal
    }
    fn advance(&mut self) {
        self.status = Status::Drafted;
    }
}

struct UrgentHomeTask {
    status: Status,
}

impl FamilyTask for UrgentHomeTask {
    fn status(&self) -> Status {
        self.status
    }
    fn priority(&self) -> Priority {
        Priority::Urgent
    }
    fn advance(&mut self) {
        self.status = Status::Completed;
    }
}

struct NormalHomeTask {
    status: Status,
}

impl FamilyTask for NormalHomeTask {
    fn status(&self) -> Status {
        self.status
    }
    fn priority(&self) -> Priority {
        Priority::Normal
    }
    fn advance(&mut self) {
        self.status = Status::Completed;
    }
}

trait TaskFactory {
    fn new_urgent_task(&self) -> Box<dyn FamilyTask>;
    fn new_normal_task(&self) -> Box<dyn FamilyTask>;
}

struct WorkTasksFactory;
impl TaskFactory for WorkTasksFactory {
    fn new_urgent_task(&self) -> Box<dyn FamilyTask> {
        Box::new(UrgentWorkTask {
            status: Status::Planned,
        })
    }
    fn new_normal_task(&self) -> Box<dyn FamilyTask> {
        Box::new(NormalWorkTask {
            status: Status::Planned,
        })
    }
}

struct HomeTasksFactory;
impl TaskFactory for HomeTasksFactory {
    fn new_urgent_task(&self) -> Box<dyn FamilyTask> {
        Box::new(UrgentHomeTask {
            status: Status::Planned,
        })
    }
    fn new_normal_task(&self) -> Box<dyn FamilyTask> {
        Box::new(NormalHomeTask {
            status: Status::Planned,
        })
    }
}

fn family_for(tag: &str) -> Result<Box<dyn TaskFactory>, FamilyError> {
    match tag {
        "work" => Ok(Box::new(WorkTasksFactory)),
        "home" => Ok(Box::new(HomeTasksFactory)),
        other => Err(FamilyError::Unsupported(other.to_string())),
    }
}

fn trait_object_example() {
    // Concrete factories can be used directly when the family is known.
    let work_factory = WorkTasksFactory;
    let mut urgent = work_factory.new_urgent_task();
    let mut normal = work_factory.new_normal_task();
    urgent.advance();
    normal.advance();
    println!(
        "work family:  {:?}/{:?} and {:?}/{:?}",
        urgent.priority(),
        urgent.status(),
        normal.priority(),
        normal.status()
    );

    // ..or picked by tag when it arrives from outside.
    match family_for("home") {
        Ok(home_factory) => {
            let mut urgent = home_factory.new_urgent_task();
            urgent.advance();
            println!(
                "home family:  {:?}/{:?}",
                urgent.priority(),
                urgent.status()
            );
        }
        Err(err) => println!("rejected: {err}"),
    }
}

// ============================================================================
// Example: Families by Trait Composition
// ============================================================================

// Venue behavior comes in through a type parameter instead of one struct per
// priority/venue combination.
trait Venue {
    const LABEL: &'static str;
    fn advanced() -> Status;
}

struct Office;
impl Venue for Office {
    const LABEL: &'static str = "work";
    fn advanced() -> Status {
        Status::Drafted
    }
}

struct Household;
impl Venue for Household {
    const LABEL: &'static str = "home";
    fn advanced() -> Status {
        Status::Completed
    }
}

struct ComposedTask<V: Venue> {
    status: Status,
    priority: Priority,
    _venue: PhantomData<V>,
}

impl<V: Venue> ComposedTask<V> {
    fn urgent() -> Self {
        ComposedTask {
            status: Status::Planned,
            priority: Priority::Urgent,
            _venue: PhantomData,
        }
    }

    fn normal() -> Self {
        ComposedTask {
            status: Status::Planned,
            priority: Priority::Normal,
            _venue: PhantomData,
        }
    }

    fn start(&mut self) {
        self.status = Status::Started;
    }

    fn advance(&mut self) {
        self.status = V::advanced();
    }
}

fn composed_example() {
    let mut office_task = ComposedTask::<Office>::urgent();
    office_task.start();
    office_task.advance();
    println!(
        "{} urgent task ends {:?}",
        Office::LABEL,
        office_task.status
    );

    let mut household_task = ComposedTask::<Household>::normal();
    household_task.advance();
    println!(
        "{} normal task ends {:?} ({:?})",
        Household::LABEL,
        household_task.status,
        household_task.priority
    );
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== Abstract Factory: Task Families ===\n");
    trait_object_example();

    println!("\n=== Families by Trait Composition ===");
    composed_example();

    println!("\n=== Unknown Family Tag ===");
    if let Err(err) = family_for("soul") {
        println!("rejected: {err}");
    }
}
