//! EmployeeApi - Roster Record Source
//!
//! The only network-facing call in the application: one GET returning
//! `{ "users": [...] }`. The endpoint is treated as opaque beyond that
//! contract.

use std::time::Duration;

use serde::Deserialize;

use crate::domain::config::ApiConfig;
use crate::domain::employee::Employee;
use crate::error::{Error, Result};

/// Response envelope of the users endpoint
#[derive(Debug, Deserialize)]
struct UsersResponse {
    users: Vec<Employee>,
}

/// HTTP record source for the employee roster
pub struct EmployeeApi {
    client: reqwest::Client,
    endpoint: String,
}

impl EmployeeApi {
    /// Build a client from the API configuration
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
        })
    }

    /// Fetch the full record set. Issued once at startup; no retry here.
    pub async fn fetch_all(&self) -> Result<Vec<Employee>> {
        tracing::debug!(endpoint = %self.endpoint, "fetching roster");
        let response = self.client.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        let employees = parse_users(&body)?;
        tracing::info!(count = employees.len(), "roster fetched");
        Ok(employees)
    }
}

/// Parse the `{ "users": [...] }` envelope
fn parse_users(body: &str) -> Result<Vec<Employee>> {
    let parsed: UsersResponse = serde_json::from_str(body)?;
    Ok(parsed.users)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::Gender;

    #[test]
    fn test_parse_users_envelope() {
        let body = r#"{
            "users": [
                {
                    "id": 1,
                    "firstName": "Emily",
                    "lastName": "Johnson",
                    "gender": "female",
                    "age": 28,
                    "company": {"name": "Dooley, Kozey and Cronin", "title": "Sales Manager"},
                    "address": {"city": "Phoenix"},
                    "image": "https://dummyjson.com/icon/emilys/128"
                },
                {
                    "id": 2,
                    "firstName": "Michael",
                    "lastName": "Williams",
                    "gender": "male",
                    "age": 35,
                    "company": {"name": "Spinka - Dickinson", "title": "Support Specialist"},
                    "address": {"city": "Houston"},
                    "image": "https://dummyjson.com/icon/michaelw/128"
                }
            ],
            "total": 208,
            "skip": 0,
            "limit": 30
        }"#;
        let users = parse_users(body).expect("envelope should parse");
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].first_name, "Emily");
        assert_eq!(users[1].gender, Gender::Male);
        assert_eq!(users[1].address.city, "Houston");
    }

    #[test]
    fn test_parse_users_empty() {
        let users = parse_users(r#"{"users": []}"#).expect("empty envelope should parse");
        assert!(users.is_empty());
    }

    #[test]
    fn test_parse_users_malformed_is_error() {
        assert!(parse_users("not json").is_err());
        assert!(parse_users(r#"{"records": []}"#).is_err());
    }
}
