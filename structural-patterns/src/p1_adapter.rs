// Pattern 1: Adapter - Task to Calendar Event
// The external calendar wants its own event shape; the adapter translates
// task fields into it before forwarding.

use std::fmt;

// ============================================================================
// Example: The External Service (simulated in-file)
// ============================================================================

// Shapes and naming here belong to the calendar vendor, not to the task app.
struct EventMetadata {
    is_urgent: bool,
    assigned_to: String,
}

struct CalendarEvent {
    event_date: String,
    event_title: String,
    metadata: EventMetadata,
}

struct ExternalCalendar;

impl ExternalCalendar {
    fn add_event(&self, event: &CalendarEvent) -> String {
        format!(
            "Event added: {} on {}",
            event.event_title, event.event_date
        )
    }
}

// ============================================================================
// Example: The Task App and Its Adapter
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Priority {
    Urgent,
    Normal,
    None,
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

struct Task {
    name: String,
    deadline: Deadline,
    priority: Priority,
    assigned_user_id: String,
}

// Lower-case the whole title, then capitalize the first letter of each word.
// Punctuation and spacing pass through untouched.
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut at_word_start = true;
    for ch in name.to_lowercase().chars() {
        if ch.is_alphanumeric() {
            if at_word_start {
                out.extend(ch.to_uppercase());
                at_word_start = false;
            } else {
                out.push(ch);
            }
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

struct CalendarAdapter {
    calendar: ExternalCalendar,
}

impl CalendarAdapter {
    fn new() -> Self {
        CalendarAdapter {
            calendar: ExternalCalendar,
        }
    }

    fn adapt(task: &Task) -> CalendarEvent {
        CalendarEvent {
            event_date: task.deadline.to_string(),
            event_title: title_case(&task.name),
            metadata: EventMetadata {
                is_urgent: task.priority == Priority::Urgent,
                assigned_to: task.assigned_user_id.clone(),
            },
        }
    }

    fn add_task_to_calendar(&self, task: &Task) -> String {
        let event = Self::adapt(task);
        self.calendar.add_event(&event)
    }
}

struct TasksService {
    calendar_adapter: CalendarAdapter,
}

impl TasksService {
    fn new() -> Self {
        TasksService {
            calendar_adapter: CalendarAdapter::new(),
        }
    }

    fn create_task(&self, task: &Task) -> String {
        // Existing task bookkeeping would go here.
        self.calendar_adapter.add_task_to_calendar(task)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn report_task(priority: Priority) -> Task {
        Task {
            name: "complete the QUARTERLY report!!!".to_string(),
            deadline: Deadline {
                year: 2024,
                month: 2,
                day: 20,
            },
            priority,
            assigned_user_id: "user123".to_string(),
        }
    }

    #[test]
    fn titles_are_recased() {
        let event = CalendarAdapter::adapt(&report_task(Priority::None));
        assert_eq!(event.event_title, "Complete The Quarterly Report!!!");
    }

    #[test]
    fn title_case_handles_punctuation_boundaries() {
        assert_eq!(title_case("e-mail FOLLOW-up"), "E-Mail Follow-Up");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn dates_render_as_iso_days() {
        let event = CalendarAdapter::adapt(&report_task(Priority::Normal));
        assert_eq!(event.event_date, "2024-02-20");
    }

    #[test]
    fn urgency_coerces_to_a_boolean() {
        assert!(CalendarAdapter::adapt(&report_task(Priority::Urgent)).metadata.is_urgent);
        assert!(!CalendarAdapter::adapt(&report_task(Priority::Normal)).metadata.is_urgent);
        assert!(!CalendarAdapter::adapt(&report_task(Priority::None)).metadata.is_urgent);
    }

    #[test]
    fn assignee_is_forwarded() {
        let event = CalendarAdapter::adapt(&report_task(Priority::Urgent));
        assert_eq!(event.metadata.assigned_to, "user123");
    }

    #[test]
    fn service_forwards_through_the_adapter() {
        let service = TasksService::new();
        let confirmation = service.create_task(&report_task(Priority::Urgent));
        assert_eq!(
            confirmation,
            "Event added: Complete The Quarterly Report!!! on 2024-02-20"
        );
    }
}

fn main() {
    println!("=== Adapter: Task to Calendar Event ===\n");

    let task_service = TasksService::new();
    let new_task = Task {
        name: "complete the QUARTERLY report!!!".to_string(),
        deadline: Deadline {
            year: 2024,
            month: 2,
            day: 20,
        },
        priority: Priority::Urgent,
        assigned_user_id: "user123".to_string(),
    };

    println!("{}", task_service.create_task(&new_task));

    let event = CalendarAdapter::adapt(&new_task);
    println!(
        "adapted fields: date={}, urgent={}, assigned to {}",
        event.event_date, event.metadata.is_urgent, event.metadata.assigned_to
    );
}
