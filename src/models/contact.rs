use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Contacto del listado de administración
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub company_name: String,
    pub country_code: String, // ISO 3166-1 alpha-2
    pub status: String, // "active", "inactive", "pending"
    pub organization_type: String,
    pub account_type: String,
    pub billing_type: String,
    pub created_at: NaiveDate,
}

impl Contact {
    /// Valor textual de una columna ordenable; `None` si la columna no existe
    pub fn sort_key(&self, column: &str) -> Option<String> {
        let value = match column {
            "name" => self.name.to_lowercase(),
            "email" => self.email.to_lowercase(),
            "company_name" => self.company_name.to_lowercase(),
            "country_code" => self.country_code.to_lowercase(),
            "status" => self.status.to_lowercase(),
            // ISO 8601 ordena igual que la fecha
            "created_at" => self.created_at.format("%Y-%m-%d").to_string(),
            _ => return None,
        };
        Some(value)
    }
}
