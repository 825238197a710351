//! YAML access-case loader shared by access tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

use privkit_internal::access::PermissionSet;

#[derive(Debug, Deserialize)]
pub struct AccessCase {
    pub description: String,
    pub user_id: String,
    #[serde(default)]
    pub permissions: PermissionSet,
    pub expect: bool,
    #[serde(default)]
    pub reason: Option<String>,
}

pub fn load_cases(name: &str) -> Vec<AccessCase> {
    let s = fs::read_to_string(format!("tests/vectors/{name}")).unwrap();
    serde_yaml::from_str(&s).unwrap()
}
