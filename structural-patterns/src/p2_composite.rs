// Pattern 2: Composite - Org Chart in an Arena
// The organization owns every node in one Vec; tree edges are index ids and
// the manager back-reference is a non-owning id. No parent pointers, no
// reference cycles.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EmployeeId(usize);

#[derive(Debug)]
struct Employee {
    name: String,
    role: String,
    manager: Option<EmployeeId>,
    subordinates: Vec<EmployeeId>,
}

#[derive(Default)]
struct Organization {
    employees: Vec<Employee>,
}

impl Organization {
    fn new() -> Self {
        Organization::default()
    }

    fn hire(&mut self, name: &str, role: &str) -> EmployeeId {
        let id = EmployeeId(self.employees.len());
        self.employees.push(Employee {
            name: name.to_string(),
            role: role.to_string(),
            manager: None,
            subordinates: Vec::new(),
        });
        id
    }

    fn employee(&self, id: EmployeeId) -> &Employee {
        &self.employees[id.0]
    }

    fn add_subordinate(&mut self, manager: EmployeeId, report: EmployeeId) {
        self.employees[manager.0].subordinates.push(report);
        self.employees[report.0].manager = Some(manager);
    }

    fn remove_subordinate(&mut self, manager: EmployeeId, report: EmployeeId) {
        let subordinates = &mut self.employees[manager.0].subordinates;
        if let Some(position) = subordinates.iter().position(|id| *id == report) {
            subordinates.remove(position);
            self.employees[report.0].manager = None;
        }
    }

    fn manager_name(&self, id: EmployeeId) -> &str {
        match self.employee(id).manager {
            Some(manager) => &self.employee(manager).name,
            None => "None",
        }
    }

    /// Depth-first rendering of the subtree under `root`, one line per
    /// employee, four spaces of indent per level.
    fn chart(&self, root: EmployeeId) -> String {
        let mut out = String::new();
        self.chart_into(root, 0, &mut out);
        out
    }

    fn chart_into(&self, id: EmployeeId, depth: usize, out: &mut String) {
        let employee = self.employee(id);
        out.push_str(&" ".repeat(depth * 4));
        out.push_str(&format!(
            "{} - {} - Manager: {}\n",
            employee.name,
            employee.role,
            self.manager_name(id)
        ));
        for subordinate in &employee.subordinates {
            self.chart_into(*subordinate, depth + 1, out);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================


fn main() {
    println!("=== Composite: Org Chart ===\n");

    let mut org = Organization::new();

    let ceo = org.hire("Sharon Bell", "CEO");
    let em = org.hire("Marcus Webb", "Engineering Manager");
    let lead = org.hire("Priya Nair", "Team Lead");
    let dev1 = org.hire("John Doe", "Software Developer");
    let dev2 = org.hire("Jane Doe", "Software Developer");
    let contractor = org.hire("Gustavo Reyes", "Contractor");
    let intern = org.hire("Ana Flores", "Intern");

    org.add_subordinate(ceo, em);
    org.add_subordinate(em, lead);
    org.add_subordinate(lead, dev1);
    org.add_subordinate(lead, dev2);
    org.add_subordinate(ceo, contractor);
    org.add_subordinate(ceo, intern);

    println!("Organization Structure:");
    print!("{}", org.chart(ceo));

    org.remove_subordinate(ceo, contractor);
    println!("\nAfter the contractor rolls off:");
    print!("{}", org.chart(ceo));
    println!(
        "contractor's manager is now: {}",
        org.manager_name(contractor)
    );
}
