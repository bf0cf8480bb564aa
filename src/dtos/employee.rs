//! Employee DTOs - Data Transfer Objects per dipendenti

use crate::entities::Employee;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Serialize, Deserialize, Debug)]
pub struct EmployeeDTO {
    pub employee_id: i32,
    pub name: String,
    pub surname: String,
    pub tel: String,
    pub department_id: i32,
    pub department_name: Option<String>,
}

impl From<Employee> for EmployeeDTO {
    fn from(value: Employee) -> Self {
        Self {
            employee_id: value.employee_id,
            name: value.name,
            surname: value.surname,
            tel: value.tel,
            department_id: value.department_id,
            department_name: value.department.map(|d| d.name),
        }
    }
}

/// DTO per creare un nuovo dipendente (senza employee_id)
#[derive(Serialize, Deserialize, Debug, Clone, Validate)]
pub struct CreateEmployeeDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 100))]
    pub surname: String,
    #[validate(length(max = 32))]
    pub tel: String,
    pub department_id: i32,
}

/// DTO per aggiornare un dipendente (solo i campi `Some(_)` vengono modificati)
#[derive(Serialize, Deserialize, Debug, Clone, Default, Validate)]
pub struct UpdateEmployeeDTO {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 100))]
    pub surname: Option<String>,
    #[validate(length(max = 32))]
    pub tel: Option<String>,
    pub department_id: Option<i32>,
}
