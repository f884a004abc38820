use log::debug;
use serde::Deserialize;
use std::fmt::Display;
use std::fs;
use std::path::Path;

use super::filter::{AvailableMembers, Cube, Member, MemberKind};

// Bundled sample schema, used when no schema file is configured
const DEFAULT_SCHEMA: &str = include_str!("../assets/schema.json");

#[derive(Debug)]
pub enum SchemaError {
    Io(std::io::Error),
    InvalidJson(serde_json::Error),
}

impl Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SchemaError::Io(e) => write!(f, "Could not read schema file: {e}"),
            SchemaError::InvalidJson(e) => write!(f, "Invalid schema meta: {e}"),
        }
    }
}

impl std::error::Error for SchemaError {}

impl From<std::io::Error> for SchemaError {
    fn from(value: std::io::Error) -> Self {
        SchemaError::Io(value)
    }
}

impl From<serde_json::Error> for SchemaError {
    fn from(value: serde_json::Error) -> Self {
        SchemaError::InvalidJson(value)
    }
}

// Shape of a Cube `/meta` response, only the parts the builder needs
#[derive(Deserialize)]
struct Meta {
    cubes: Vec<MetaCube>,
}

#[derive(Deserialize)]
struct MetaCube {
    name: String,
    title: Option<String>,
    #[serde(default)]
    dimensions: Vec<MetaMember>,
    #[serde(default)]
    measures: Vec<MetaMember>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetaMember {
    name: String,
    title: Option<String>,
    short_title: Option<String>,
    #[serde(rename = "type")]
    member_type: String,
}

impl From<MetaMember> for Member {
    fn from(meta: MetaMember) -> Self {
        let title = meta.title.unwrap_or_else(|| meta.name.clone());
        Member {
            short_title: meta.short_title.unwrap_or_else(|| title.clone()),
            kind: MemberKind::from_meta_type(&meta.member_type),
            name: meta.name,
            title,
        }
    }
}

pub fn parse_schema(json: &str) -> Result<AvailableMembers, SchemaError> {
    let meta: Meta = serde_json::from_str(json)?;

    let cubes = meta
        .cubes
        .into_iter()
        .map(|cube| Cube {
            title: cube.title.unwrap_or_else(|| cube.name.clone()),
            name: cube.name,
            // Dimensions are listed before measures in the dropdown
            members: cube
                .dimensions
                .into_iter()
                .chain(cube.measures)
                .map(Member::from)
                .collect(),
        })
        .collect::<Vec<_>>();

    debug!("Parsed schema with {} cubes", cubes.len());
    Ok(AvailableMembers { cubes })
}

pub fn load_schema(path: &Path) -> Result<AvailableMembers, SchemaError> {
    debug!("Loading schema from {:?}", path);
    let json = fs::read_to_string(path)?;
    parse_schema(&json)
}

pub fn default_schema() -> Result<AvailableMembers, SchemaError> {
    parse_schema(DEFAULT_SCHEMA)
}
