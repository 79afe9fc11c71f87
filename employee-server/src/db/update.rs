//! UPDATE statement construction
//!
//! Column names only ever come from [`EmployeeField`]; every value is bound
//! as a parameter.

use shared::models::EmployeeChanges;
use sqlx::{Postgres, QueryBuilder};

use crate::error::{ServiceError, ServiceResult};

/// Columns returned by every statement that yields an employee row
pub(crate) const RETURNING_COLUMNS: &str = "id, name, position, salary::float8 AS salary";

/// The updatable columns of `employees`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeField {
    Name,
    Position,
    Salary,
}

impl EmployeeField {
    pub const fn column(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Position => "position",
            Self::Salary => "salary",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum FieldValue {
    Text(String),
    Float(f64),
}

/// A validated selective update of one employee row
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeUpdate {
    id: i32,
    assignments: Vec<(EmployeeField, FieldValue)>,
}

impl EmployeeUpdate {
    /// Fails when the id cannot address a row or nothing would change
    pub fn new(id: i32, changes: EmployeeChanges) -> ServiceResult<Self> {
        if id < 1 {
            return Err(ServiceError::validation("employee id is required"));
        }

        let mut assignments = Vec::with_capacity(3);
        if let Some(name) = changes.name {
            assignments.push((EmployeeField::Name, FieldValue::Text(name)));
        }
        if let Some(position) = changes.position {
            assignments.push((EmployeeField::Position, FieldValue::Text(position)));
        }
        if let Some(salary) = changes.salary {
            assignments.push((EmployeeField::Salary, FieldValue::Float(salary)));
        }

        if assignments.is_empty() {
            return Err(ServiceError::validation(
                "at least one of name, position or salary must be provided",
            ));
        }
        Ok(Self { id, assignments })
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn fields(&self) -> impl Iterator<Item = EmployeeField> + '_ {
        self.assignments.iter().map(|(field, _)| *field)
    }

    /// `UPDATE employees SET .. WHERE id = $n RETURNING ..`
    pub fn into_query(self) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new("UPDATE employees SET ");
        {
            let mut set = qb.separated(", ");
            for (field, value) in self.assignments {
                set.push(format_args!("{} = ", field.column()));
                match value {
                    FieldValue::Text(text) => set.push_bind_unseparated(text),
                    FieldValue::Float(number) => set.push_bind_unseparated(number),
                };
            }
        }
        qb.push(" WHERE id = ")
            .push_bind(self.id)
            .push(" RETURNING ")
            .push(RETURNING_COLUMNS);
        qb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn changes(name: Option<&str>, position: Option<&str>, salary: Option<f64>) -> EmployeeChanges {
        EmployeeChanges {
            name: name.map(str::to_string),
            position: position.map(str::to_string),
            salary,
        }
    }

    #[test]
    fn test_salary_only() {
        let update = EmployeeUpdate::new(1, changes(None, None, Some(60_000.0))).unwrap();
        assert_eq!(update.fields().collect::<Vec<_>>(), vec![EmployeeField::Salary]);
        assert_eq!(
            update.into_query().sql(),
            "UPDATE employees SET salary = $1 WHERE id = $2 \
             RETURNING id, name, position, salary::float8 AS salary"
        );
    }

    #[test]
    fn test_all_fields_are_numbered_in_order() {
        let update =
            EmployeeUpdate::new(7, changes(Some("Asha"), Some("Lead"), Some(1.5))).unwrap();
        assert_eq!(update.id(), 7);
        assert_eq!(
            update.into_query().sql(),
            "UPDATE employees SET name = $1, position = $2, salary = $3 WHERE id = $4 \
             RETURNING id, name, position, salary::float8 AS salary"
        );
    }

    #[test]
    fn test_values_never_reach_the_sql_text() {
        let update =
            EmployeeUpdate::new(3, changes(Some("x'; DROP TABLE employees; --"), None, None))
                .unwrap();
        let query = update.into_query();
        assert_eq!(
            query.sql(),
            "UPDATE employees SET name = $1 WHERE id = $2 \
             RETURNING id, name, position, salary::float8 AS salary"
        );
    }

    #[test]
    fn test_nothing_to_update_is_rejected() {
        let err = EmployeeUpdate::new(1, EmployeeChanges::default()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let err = EmployeeUpdate::new(0, changes(Some("Asha"), None, None)).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
