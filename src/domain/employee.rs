//! Employee - Roster Record Data

use serde::{Deserialize, Serialize};

/// Employee gender as reported by the API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Uppercased initial, as rendered in the demography column
    pub fn initial(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

/// Employer information attached to each record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub title: String,
}

/// Address information; only the city is used by the filter
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
}

/// An employee record, immutable once fetched
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique ID
    pub id: u64,
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Gender
    pub gender: Gender,
    /// Age in years
    pub age: u32,
    /// Employer and job title
    #[serde(default)]
    pub company: Company,
    /// Address (city only)
    #[serde(default)]
    pub address: Address,
    /// Avatar URL
    #[serde(default)]
    pub image: String,
}

impl Employee {
    /// "First Last" as rendered in the name column
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// "M/33" style demography cell
    pub fn demography(&self) -> String {
        format!("{}/{}", self.gender.initial(), self.age)
    }
}

/// The sortable roster columns. Keeping this a closed enum rejects
/// unsupported sort keys at the interface boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    FirstName,
    Age,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "Id",
            SortKey::FirstName => "Full Name",
            SortKey::Age => "Demography",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_camel_case_record() {
        let json = r#"{
            "id": 7,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "gender": "female",
            "age": 36,
            "company": {"name": "Analytical Engines", "title": "Programmer"},
            "address": {"city": "London"},
            "image": "https://example.com/ada.png"
        }"#;
        let emp: Employee = serde_json::from_str(json).expect("record should parse");
        assert_eq!(emp.id, 7);
        assert_eq!(emp.gender, Gender::Female);
        assert_eq!(emp.full_name(), "Ada Lovelace");
        assert_eq!(emp.demography(), "F/36");
        assert_eq!(emp.address.city, "London");
    }

    #[test]
    fn test_missing_company_and_address_default() {
        let json = r#"{
            "id": 1,
            "firstName": "Bob",
            "lastName": "Smith",
            "gender": "male",
            "age": 41
        }"#;
        let emp: Employee = serde_json::from_str(json).expect("record should parse");
        assert!(emp.company.name.is_empty());
        assert!(emp.address.city.is_empty());
        assert_eq!(emp.demography(), "M/41");
    }
}
