use super::domain::{DepartmentId, Employee, EmployeeId};
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Employee list with ids made unique, so merged upstream lists cannot count
/// the same person twice.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    employees: Vec<Employee>,
    index: HashMap<EmployeeId, usize>,
}

impl Roster {
    /// First occurrence of an id wins.
    pub fn new<I>(employees: I) -> Self
    where
        I: IntoIterator<Item = Employee>,
    {
        let mut roster = Self::default();
        for employee in employees {
            if roster.index.contains_key(&employee.id) {
                debug!(employee = %employee.id, "dropping duplicate roster entry");
                continue;
            }
            roster
                .index
                .insert(employee.id.clone(), roster.employees.len());
            roster.employees.push(employee);
        }
        roster
    }

    pub fn get(&self, id: &EmployeeId) -> Option<&Employee> {
        self.index.get(id).map(|&position| &self.employees[position])
    }

    pub fn contains(&self, id: &EmployeeId) -> bool {
        self.index.contains_key(id)
    }

    pub fn department_of(&self, id: &EmployeeId) -> Option<&DepartmentId> {
        self.get(id).map(|employee| &employee.department_id)
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn departments(&self) -> BTreeSet<&DepartmentId> {
        self.employees
            .iter()
            .map(|employee| &employee.department_id)
            .collect()
    }

    /// Employees still on staff.
    pub fn active(&self) -> Roster {
        Roster::new(
            self.employees
                .iter()
                .filter(|employee| employee.is_active)
                .cloned(),
        )
    }

    /// Direct reports of a supervisor.
    pub fn team(&self, supervisor: &EmployeeId) -> Roster {
        Roster::new(
            self.employees
                .iter()
                .filter(|employee| employee.supervisor_id.as_ref() == Some(supervisor))
                .cloned(),
        )
    }
}
