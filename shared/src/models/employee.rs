//! Employee Model

use std::fmt;

use serde::de::{IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{AppError, AppResult};

/// Employee record
///
/// Serialized with the keys existing clients read: `ID`, `Name`,
/// `position`, `Salary`. Also the request body for create and update, where
/// keys match case-insensitively and an absent or `null` field keeps its
/// zero value. The zero value means "not provided".
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    /// Store-assigned id, 0 when not yet persisted
    #[serde(rename = "ID")]
    pub id: i32,
    #[serde(rename = "Name")]
    pub name: String,
    pub position: String,
    #[serde(rename = "Salary")]
    pub salary: f64,
}

impl<'de> Deserialize<'de> for Employee {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(EmployeeVisitor)
    }
}

struct EmployeeVisitor;

impl<'de> Visitor<'de> for EmployeeVisitor {
    type Value = Employee;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an employee object")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Employee, A::Error> {
        let mut employee = Employee::default();
        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "id" => {
                    if let Some(id) = map.next_value()? {
                        employee.id = id;
                    }
                }
                "name" => {
                    if let Some(name) = map.next_value()? {
                        employee.name = name;
                    }
                }
                "position" => {
                    if let Some(position) = map.next_value()? {
                        employee.position = position;
                    }
                }
                "salary" => {
                    if let Some(salary) = map.next_value()? {
                        employee.salary = salary;
                    }
                }
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }
        Ok(employee)
    }
}

/// Columns an update request actually sets
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EmployeeChanges {
    pub name: Option<String>,
    pub position: Option<String>,
    pub salary: Option<f64>,
}

impl EmployeeChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.position.is_none() && self.salary.is_none()
    }
}

impl Employee {
    /// Fields required to create an employee: name, position and a salary of at least 1
    pub fn validate_for_create(&self) -> AppResult<()> {
        if self.name.is_empty() || self.position.is_empty() || self.salary < 1.0 {
            return Err(AppError::validation("all fields are mandatory"));
        }
        Ok(())
    }

    /// A stored employee can only be targeted by a positive id
    pub fn validate_has_id(&self) -> AppResult<()> {
        if self.id < 1 {
            return Err(AppError::validation("employee id is required"));
        }
        Ok(())
    }

    /// Id present and at least one column to change
    pub fn validate_for_update(&self) -> AppResult<()> {
        self.validate_has_id()?;
        if self.changes().is_empty() {
            return Err(AppError::validation(
                "at least one of name, position or salary must be provided",
            ));
        }
        Ok(())
    }

    /// Non-empty strings and a non-zero salary, as optional column values
    pub fn changes(&self) -> EmployeeChanges {
        EmployeeChanges {
            name: (!self.name.is_empty()).then(|| self.name.clone()),
            position: (!self.position.is_empty()).then(|| self.position.clone()),
            salary: (self.salary != 0.0).then_some(self.salary),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn trehan() -> Employee {
        Employee {
            id: 0,
            name: "Trehan".to_string(),
            position: "Software Engineer".to_string(),
            salary: 5_000_000.0,
        }
    }

    #[test]
    fn test_validate_for_create_accepts_complete_record() {
        assert!(trehan().validate_for_create().is_ok());
    }

    #[test]
    fn test_validate_for_create_rejects_missing_fields() {
        let cases = [
            Employee {
                name: String::new(),
                ..trehan()
            },
            Employee {
                position: String::new(),
                ..trehan()
            },
            Employee {
                salary: 0.5,
                ..trehan()
            },
            Employee {
                salary: -10.0,
                ..trehan()
            },
        ];
        for emp in cases {
            let err = emp.validate_for_create().unwrap_err();
            assert_eq!(err.code, ErrorCode::ValidationFailed);
            assert_eq!(err.message, "all fields are mandatory");
        }
    }

    #[test]
    fn test_validate_for_create_salary_boundary() {
        let emp = Employee {
            salary: 1.0,
            ..trehan()
        };
        assert!(emp.validate_for_create().is_ok());
    }

    #[test]
    fn test_validate_has_id() {
        assert!(trehan().validate_has_id().is_err());
        assert!(Employee { id: -3, ..trehan() }.validate_has_id().is_err());
        assert!(Employee { id: 1, ..trehan() }.validate_has_id().is_ok());
    }

    #[test]
    fn test_validate_for_update_requires_a_change() {
        let only_id = Employee {
            id: 4,
            ..Default::default()
        };
        let err = only_id.validate_for_update().unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);

        let salary_only = Employee {
            id: 4,
            salary: 60_000.0,
            ..Default::default()
        };
        assert!(salary_only.validate_for_update().is_ok());
    }

    #[test]
    fn test_changes_skip_zero_values() {
        let emp = Employee {
            id: 1,
            name: String::new(),
            position: "Lead".to_string(),
            salary: 0.0,
        };
        assert_eq!(
            emp.changes(),
            EmployeeChanges {
                name: None,
                position: Some("Lead".to_string()),
                salary: None,
            }
        );
    }

    #[test]
    fn test_deserialize_missing_fields_default_to_zero() {
        let emp: Employee = serde_json::from_str(r#"{"id": 1, "salary": 60000}"#).unwrap();
        assert_eq!(emp.id, 1);
        assert_eq!(emp.salary, 60_000.0);
        assert!(emp.name.is_empty());
        assert!(emp.position.is_empty());
    }

    #[test]
    fn test_deserialize_keys_ignore_case() {
        let emp: Employee = serde_json::from_str(
            r#"{"ID": 2, "Name": "Asha", "position": "QA", "Salary": 1200.5}"#,
        )
        .unwrap();
        assert_eq!(emp.id, 2);
        assert_eq!(emp.name, "Asha");
        assert_eq!(emp.position, "QA");
        assert_eq!(emp.salary, 1200.5);

        let shouted: Employee = serde_json::from_str(
            r#"{"NAME": "Asha", "POSITION": "QA", "SALARY": 10, "Id": 9}"#,
        )
        .unwrap();
        assert_eq!(shouted.id, 9);
        assert_eq!(shouted.name, "Asha");
        assert_eq!(shouted.position, "QA");
        assert_eq!(shouted.salary, 10.0);
    }

    #[test]
    fn test_deserialize_null_and_unknown_keys() {
        let emp: Employee =
            serde_json::from_str(r#"{"id": 1, "name": null, "team": "core", "salary": 5}"#)
                .unwrap();
        assert_eq!(emp.id, 1);
        assert!(emp.name.is_empty());
        assert_eq!(emp.salary, 5.0);
    }

    #[test]
    fn test_deserialize_rejects_wrong_types() {
        assert!(serde_json::from_str::<Employee>(r#"{"salary": "lots"}"#).is_err());
        assert!(serde_json::from_str::<Employee>(r#"[1, "a"]"#).is_err());
    }

    #[test]
    fn test_serialize_uses_client_keys() {
        let value = serde_json::to_value(Employee { id: 3, ..trehan() }).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "ID": 3,
                "Name": "Trehan",
                "position": "Software Engineer",
                "Salary": 5000000.0
            })
        );
    }
}
