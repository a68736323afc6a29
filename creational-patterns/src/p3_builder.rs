// Pattern 3: Builder - Fluent Task Construction
// Chained setters accumulate configuration; build() consumes the builder and
// returns the finished task.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Planned,
    Started,
    Drafted,
    Reviewed,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Priority {
    Urgent,
    Normal,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Assignee {
    id: u32,
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadline {
    year: u16,
    month: u8,
    day: u8,
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

#[derive(Debug)]
struct Task {
    status: Status,
    priority: Priority,
    description: String,
    deadline: Option<Deadline>,
    tags: Vec<String>,
    assignees: Vec<Assignee>,
}

impl Task {
    fn builder() -> TaskBuilder {
        TaskBuilder::new()
    }
}

struct TaskBuilder {
    status: Status,
    priority: Priority,
    description: String,
    deadline: Option<Deadline>,
    tags: Vec<String>,
    assignees: Vec<Assignee>,
}

impl TaskBuilder {
    fn new() -> Self {
        TaskBuilder {
            status: Status::Planned,
            priority: Priority::None,
            description: String::new(),
            deadline: None,
            tags: Vec::new(),
            assignees: Vec::new(),
        }
    }

    // Each setter takes `self` and returns `self` for chaining.
    fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    fn priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    fn deadline(mut self, deadline: Deadline) -> Self {
        self.deadline = Some(deadline);
        self
    }

    // Collection setters accumulate instead of replacing.
    fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    fn assign_to(mut self, assignee: Assignee) -> Self {
        self.assignees.push(assignee);
        self
    }

    fn build(self) -> Task {
        Task {
            status: self.status,
            priority: self.priority,
            description: self.description,
            deadline: self.deadline,
            tags: self.tags,
            assignees: self.assignees,
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
    fn defaults() {
        let task = Task::builder().build();
        assert_eq!(task.status, Status::Planned);
        assert_eq!(task.priority, Priority::None);
        assert_eq!(task.description, "");
        assert_eq!(task.deadline, None);
        assert!(task.tags.is_empty());
        assert!(task.assignees.is_empty());
    }

    #[test]
    fn chained_configuration() {
        let task = Task::builder()
            .description("Write the retro notes")
            .priority(Priority::Urgent)
            .status(Status::Started)
            .deadline(Deadline {
                year: 2024,
                month: 1,
                day: 31,
            })
            .build();

        assert_eq!(task.description, "Write the retro notes");
        assert_eq!(task.priority, Priority::Urgent);
        assert_eq!(task.status, Status::Started);
        assert_eq!(task.deadline.map(|d| d.to_string()), Some("2024-01-31".to_string()));
    }

    #[test]
    fn collection_setters_accumulate() {
        let task = Task::builder()
            .priority(Priority::Normal)
            .tag("writing")
            .tag("quarterly")
            .assign_to(Assignee {
                id: 7,
                name: "Dana".to_string(),
            })
            .assign_to(Assignee {
                id: 12,
                name: "Lee".to_string(),
            })
            .build();

        assert_eq!(task.tags, ["writing", "quarterly"]);
        assert_eq!(task.assignees.len(), 2);
        assert_eq!(task.assignees[1].name, "Lee");
    }

    #[test]
    fn review_chain_passes_through_every_status() {
        for status in [Status::Drafted, Status::Reviewed, Status::Completed] {
            let task = Task::builder().status(status).build();
            assert_eq!(task.status, status);
        }
    }
}

fn main() {
    println!("=== Builder: Fluent Task Construction ===\n");

    let task = Task::builder()
        .description("Complete the project write-up")
        .priority(Priority::Urgent)
        .status(Status::Started)
        .deadline(Deadline {
            year: 2024,
            month: 1,
            day: 31,
        })
        .tag("writing")
        .assign_to(Assignee {
            id: 7,
            name: "Dana".to_string(),
        })
        .build();

    println!("{task:#?}");

    // Mostly-default construction stays a one-liner.
    let routine = Task::builder()
        .description("Water the plants")
        .priority(Priority::Normal)
        .build();
    println!(
        "\nroutine task: {} ({:?}, {:?})",
        routine.description, routine.priority, routine.status
    );

    // Each setter consumes the builder, so a finished chain cannot be reused:
    // let builder = Task::builder();
    // let t1 = builder.build();
    // let t2 = builder.build(); // ERROR: use of moved value
}
