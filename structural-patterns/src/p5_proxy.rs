// Pattern 5: Proxy - Guard, Delegate, Log
// The proxy exposes the same trait as the real service and wraps every call:
// authorization first, then delegation, then an access-log entry. Denied
// callers never reach the delegate.

use std::cell::{Cell, RefCell};

trait ReportService {
    fn fetch(&self, user_id: u32) -> String;
}

// ============================================================================
// Example: The Real Service and the Cross-Cutting Helpers
// ============================================================================

struct LiveReportService {
    calls: Cell<usize>,
}

impl LiveReportService {
    fn new() -> Self {
        LiveReportService {
            calls: Cell::new(0),
        }
    }
}

impl ReportService for LiveReportService {
    fn fetch(&self, user_id: u32) -> String {
        self.calls.set(self.calls.get() + 1);
        format!("quarterly report for user #{user_id}")
    }
}

struct Guard {
    banned: Vec<u32>,
}

impl Guard {
    fn check_permission_for(&self, user_id: u32) -> bool {
        !self.banned.contains(&user_id)
    }
}

struct AccessLog {
    entries: RefCell<Vec<String>>,
}

impl AccessLog {
    fn new() -> Self {
        AccessLog {
            entries: RefCell::new(Vec::new()),
        }
    }

    fn info(&self, user_id: u32) {
        self.entries
            .borrow_mut()
            .push(format!("User #{user_id} accessed ReportService::fetch"));
    }
}

// ============================================================================
// Example: The Proxy
// ============================================================================

struct ReportServiceProxy {
    service: LiveReportService,
    guard: Guard,
    log: AccessLog,
}

impl ReportServiceProxy {
    fn new(banned: Vec<u32>) -> Self {
        ReportServiceProxy {
            service: LiveReportService::new(),
            guard: Guard { banned },
            log: AccessLog::new(),
        }
    }
}

impl ReportService for ReportServiceProxy {
    fn fetch(&self, user_id: u32) -> String {
        if !self.guard.check_permission_for(user_id) {
            return "Access denied".to_string();
        }
        let report = self.service.fetch(user_id);
        self.log.info(user_id);
        report
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorized_calls_delegate_and_log() {
        let proxy = ReportServiceProxy::new(vec![]);
        let report = proxy.fetch(123);
        assert_eq!(report, "quarterly report for user #123");
        assert_eq!(proxy.service.calls.get(), 1);
        assert_eq!(
            proxy.log.entries.borrow().as_slice(),
            ["User #123 accessed ReportService::fetch"]
        );
    }

    #[test]
    fn denied_calls_never_reach_the_delegate() {
        let proxy = ReportServiceProxy::new(vec![42]);
        let report = proxy.fetch(42);
        assert_eq!(report, "Access denied");
        assert_eq!(proxy.service.calls.get(), 0);
        assert!(proxy.log.entries.borrow().is_empty());
    }

    #[test]
    fn proxy_satisfies_the_service_trait() {
        fn run(service: &dyn ReportService, user_id: u32) -> String {
            service.fetch(user_id)
        }
        let proxy = ReportServiceProxy::new(vec![]);
        assert_eq!(run(&proxy, 7), "quarterly report for user #7");
    }
}

fn main() {
    println!("=== Proxy: Guard, Delegate, Log ===\n");

    // Callers hold the proxy through the same trait as the real service.
    let service: &dyn ReportService = &ReportServiceProxy::new(vec![666]);

    println!("user 123: {}", service.fetch(123));
    println!("user 666: {}", service.fetch(666));
}
