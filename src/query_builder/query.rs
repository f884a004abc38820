use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::fs;
use std::path::Path;

// Filter part of a Cube query, as it is saved and sent to the API
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
pub struct Query {
    #[serde(default)]
    pub filters: Vec<QueryFilter>,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct QueryFilter {
    pub member: String,
    pub operator: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}

#[derive(Debug)]
pub enum QueryError {
    Io(std::io::Error),
    InvalidJson(serde_json::Error),
}

impl Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Io(e) => write!(f, "Could not read query file: {e}"),
            QueryError::InvalidJson(e) => write!(f, "Invalid query: {e}"),
        }
    }
}

impl std::error::Error for QueryError {}

impl From<std::io::Error> for QueryError {
    fn from(value: std::io::Error) -> Self {
        QueryError::Io(value)
    }
}

impl From<serde_json::Error> for QueryError {
    fn from(value: serde_json::Error) -> Self {
        QueryError::InvalidJson(value)
    }
}

pub fn load_query(path: &Path) -> Result<Query, QueryError> {
    debug!("Loading query from {:?}", path);
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}
