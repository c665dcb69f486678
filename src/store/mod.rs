//! In-memory storage collaborator.
//!
//! The store persists departments, employees, salary records and the
//! single administrator account, and enforces referential and uniqueness
//! constraints as a second line of defense behind the consistency engine.
//! Violations it detects use the same error taxonomy as the engine
//! pre-checks, so callers cannot distinguish where a violation was caught.
//!
//! The store itself is not synchronized; the API layer wraps it in a
//! read/write lock and serializes concurrent mutations.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{
    AdminRole, AdminUser, Department, Employee, EmployeeWithDepartment, NewEmployee,
    NewSalaryRecord, ReportRow, SalaryRecord, SalaryUpdate, SalaryWithContext,
};

/// Normalizes a monetary amount to exactly two fractional digits, the
/// form every external representation carries.
fn to_money(value: Decimal) -> Decimal {
    let mut value = value;
    value.rescale(2);
    value
}

/// The in-memory store backing the payroll service.
///
/// Employee numbers and salary record ids are system-assigned and
/// sequential, starting at 1. Department codes are natural keys.
///
/// # Example
///
/// ```
/// use payroll_engine::store::MemoryStore;
///
/// let store = MemoryStore::new();
/// assert!(store.list_departments().is_empty());
/// assert!(store.admin().is_none());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    departments: BTreeMap<String, Department>,
    employees: BTreeMap<u32, Employee>,
    salaries: BTreeMap<u32, SalaryRecord>,
    admin: Option<AdminUser>,
    next_employee_number: u32,
    next_salary_id: u32,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the set of existing department codes for referential
    /// validation.
    pub fn department_codes(&self) -> BTreeSet<String> {
        self.departments.keys().cloned().collect()
    }

    /// Returns the set of existing employee numbers for referential
    /// validation.
    pub fn employee_numbers(&self) -> BTreeSet<u32> {
        self.employees.keys().copied().collect()
    }

    /// Persists a department, enforcing code uniqueness.
    pub fn insert_department(&mut self, department: Department) -> PayrollResult<Department> {
        if self.departments.contains_key(&department.department_code) {
            return Err(PayrollError::DuplicateKey {
                field: "department_code".to_string(),
                value: department.department_code.clone(),
            });
        }

        let department = Department {
            gross_salary: to_money(department.gross_salary),
            ..department
        };
        self.departments
            .insert(department.department_code.clone(), department.clone());
        Ok(department)
    }

    /// Lists all departments ordered by display name.
    pub fn list_departments(&self) -> Vec<Department> {
        let mut departments: Vec<Department> = self.departments.values().cloned().collect();
        departments.sort_by(|a, b| {
            a.department_name
                .cmp(&b.department_name)
                .then_with(|| a.department_code.cmp(&b.department_code))
        });
        departments
    }

    /// Deletes a department and detaches referencing employees.
    ///
    /// Employees that referenced the department keep their records with an
    /// absent department reference; nothing cascades. Returns the number
    /// of employees detached.
    pub fn delete_department(&mut self, code: &str) -> PayrollResult<usize> {
        if self.departments.remove(code).is_none() {
            return Err(PayrollError::RecordNotFound {
                entity: "department".to_string(),
                id: code.to_string(),
            });
        }

        let mut detached = 0;
        for employee in self.employees.values_mut() {
            if employee.department_code.as_deref() == Some(code) {
                employee.department_code = None;
                detached += 1;
            }
        }
        Ok(detached)
    }

    /// Persists an employee, assigning the next sequential number.
    ///
    /// A present department reference must resolve to an existing
    /// department; this is the storage-level counterpart of the engine's
    /// pre-check.
    pub fn insert_employee(&mut self, candidate: NewEmployee) -> PayrollResult<Employee> {
        if let Some(code) = &candidate.department_code {
            if !self.departments.contains_key(code) {
                return Err(PayrollError::UnknownDepartment { code: code.clone() });
            }
        }

        let gender = match candidate.gender.as_deref() {
            Some(value) => Some(value.parse()?),
            None => None,
        };
        let hired_date = match candidate.hired_date.as_deref() {
            Some(value) => Some(parse_hired_date(value)?),
            None => None,
        };

        self.next_employee_number += 1;
        let employee = Employee {
            employee_number: self.next_employee_number,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            position: candidate.position,
            address: candidate.address,
            telephone: candidate.telephone,
            gender,
            hired_date,
            department_code: candidate.department_code,
        };
        self.employees
            .insert(employee.employee_number, employee.clone());
        Ok(employee)
    }

    /// Lists all employees with their department names, ordered by last
    /// name, then first name.
    ///
    /// Employees without a department appear with an absent department
    /// name.
    pub fn list_employees(&self) -> Vec<EmployeeWithDepartment> {
        let mut employees: Vec<EmployeeWithDepartment> = self
            .employees
            .values()
            .map(|employee| self.join_department(employee))
            .collect();
        employees.sort_by(|a, b| {
            a.employee
                .last_name
                .cmp(&b.employee.last_name)
                .then_with(|| a.employee.first_name.cmp(&b.employee.first_name))
                .then_with(|| a.employee.employee_number.cmp(&b.employee.employee_number))
        });
        employees
    }

    /// Fetches a single employee with its department name.
    pub fn get_employee(&self, employee_number: u32) -> PayrollResult<EmployeeWithDepartment> {
        self.employees
            .get(&employee_number)
            .map(|employee| self.join_department(employee))
            .ok_or_else(|| PayrollError::RecordNotFound {
                entity: "employee".to_string(),
                id: employee_number.to_string(),
            })
    }

    /// Deletes an employee, cascading deletion of its salary records.
    ///
    /// Returns the number of salary records removed by the cascade.
    pub fn delete_employee(&mut self, employee_number: u32) -> PayrollResult<usize> {
        if self.employees.remove(&employee_number).is_none() {
            return Err(PayrollError::RecordNotFound {
                entity: "employee".to_string(),
                id: employee_number.to_string(),
            });
        }

        let before = self.salaries.len();
        self.salaries
            .retain(|_, record| record.employee_number != employee_number);
        Ok(before - self.salaries.len())
    }

    /// Persists a salary record, assigning the next sequential id.
    ///
    /// The employee reference must resolve; this is the storage-level
    /// counterpart of the engine's pre-check. Several records may exist
    /// for the same employee and month.
    pub fn insert_salary(&mut self, candidate: NewSalaryRecord) -> PayrollResult<SalaryRecord> {
        if !self.employees.contains_key(&candidate.employee_number) {
            return Err(PayrollError::UnknownEmployee {
                employee_number: i64::from(candidate.employee_number),
            });
        }

        self.next_salary_id += 1;
        let record = SalaryRecord {
            id: self.next_salary_id,
            employee_number: candidate.employee_number,
            gross_salary: to_money(candidate.gross_salary),
            total_deduction: to_money(candidate.total_deduction),
            net_salary: to_money(candidate.net_salary),
            month: candidate.month,
        };
        self.salaries.insert(record.id, record.clone());
        Ok(record)
    }

    /// Lists all salary records joined with employee and department
    /// context, ordered by month descending, then last name, then first
    /// name.
    ///
    /// Records whose employee has no department are not listed, matching
    /// the join shape of the original service.
    pub fn list_salaries(&self) -> Vec<SalaryWithContext> {
        let mut records: Vec<SalaryWithContext> = self
            .salaries
            .values()
            .filter_map(|record| self.join_salary(record))
            .collect();
        records.sort_by(|a, b| {
            b.record
                .month
                .cmp(&a.record.month)
                .then_with(|| a.last_name.cmp(&b.last_name))
                .then_with(|| a.first_name.cmp(&b.first_name))
                .then_with(|| a.record.id.cmp(&b.record.id))
        });
        records
    }

    /// Replaces the amount and month fields of a salary record.
    pub fn update_salary(&mut self, id: u32, update: SalaryUpdate) -> PayrollResult<SalaryRecord> {
        let record = self
            .salaries
            .get_mut(&id)
            .ok_or_else(|| PayrollError::RecordNotFound {
                entity: "salary record".to_string(),
                id: id.to_string(),
            })?;

        record.gross_salary = to_money(update.gross_salary);
        record.total_deduction = to_money(update.total_deduction);
        record.net_salary = to_money(update.net_salary);
        record.month = update.month;
        Ok(record.clone())
    }

    /// Deletes a salary record.
    pub fn delete_salary(&mut self, id: u32) -> PayrollResult<()> {
        self.salaries
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| PayrollError::RecordNotFound {
                entity: "salary record".to_string(),
                id: id.to_string(),
            })
    }

    /// Returns the joined report rows for every salary record of `month`.
    ///
    /// The rows are unordered; the report aggregator owns the ordering.
    pub fn report_rows(&self, month: &str) -> Vec<ReportRow> {
        self.salaries
            .values()
            .filter(|record| record.month == month)
            .filter_map(|record| self.join_salary(record))
            .map(|joined| ReportRow {
                first_name: joined.first_name,
                last_name: joined.last_name,
                position: joined.position,
                department_name: joined.department_name,
                gross_salary: joined.record.gross_salary,
                total_deduction: joined.record.total_deduction,
                net_salary: joined.record.net_salary,
            })
            .collect()
    }

    /// Registers the administrator account.
    ///
    /// The store holds a single optional administrator slot; once it is
    /// occupied, registration is permanently disabled for the lifetime of
    /// the store. The occupancy check and the write happen under the same
    /// exclusive borrow, so two racing registrations cannot both succeed.
    pub fn register_admin(
        &mut self,
        username: &str,
        password_hash: &str,
    ) -> PayrollResult<AdminUser> {
        if self.admin.is_some() {
            return Err(PayrollError::DuplicateKey {
                field: "administrator".to_string(),
                value: username.to_string(),
            });
        }

        let admin = AdminUser {
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            role: AdminRole::Admin,
            created_at: Utc::now(),
        };
        self.admin = Some(admin.clone());
        Ok(admin)
    }

    /// Returns the administrator account, if one has been registered.
    pub fn admin(&self) -> Option<&AdminUser> {
        self.admin.as_ref()
    }

    fn join_department(&self, employee: &Employee) -> EmployeeWithDepartment {
        let department_name = employee
            .department_code
            .as_ref()
            .and_then(|code| self.departments.get(code))
            .map(|department| department.department_name.clone());
        EmployeeWithDepartment {
            employee: employee.clone(),
            department_name,
        }
    }

    fn join_salary(&self, record: &SalaryRecord) -> Option<SalaryWithContext> {
        let employee = self.employees.get(&record.employee_number)?;
        let department = employee
            .department_code
            .as_ref()
            .and_then(|code| self.departments.get(code))?;
        Some(SalaryWithContext {
            record: record.clone(),
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            position: employee.position.clone(),
            department_name: department.department_name.clone(),
        })
    }
}

fn parse_hired_date(value: &str) -> PayrollResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| PayrollError::InvalidFormat {
        field: "hired_date".to_string(),
        message: "expected a calendar date as YYYY-MM-DD".to_string(),
    })
}
