// Routes module - route-information decoding, extraction and comparison

pub mod diff;
pub mod extract;
pub mod parser;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// One destination of one routing instance, with its next hops.
///
/// `next_hops`, `via` and `local_interfaces` always have the same length:
/// index `i` of each describes the same `<nh>` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingEntry {
    pub table_name: String,
    pub destination: String,
    pub next_hops: Vec<String>,
    pub via: Vec<String>,
    pub local_interfaces: Vec<String>,
}

impl RoutingEntry {
    /// Lookup key used by the differ. Equal entries always share a key.
    pub fn key(&self) -> (&str, &str) {
        (&self.table_name, &self.destination)
    }
}

/// Which routing instances to extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstanceFilter {
    All,
    Only(BTreeSet<String>),
}

impl InstanceFilter {
    pub fn includes(&self, table_name: &str) -> bool {
        match self {
            InstanceFilter::All => true,
            InstanceFilter::Only(names) => names.contains(table_name),
        }
    }
}

impl FromStr for InstanceFilter {
    type Err = String;

    /// Parses `ALL` or a comma-separated list of table names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let names: BTreeSet<String> = s
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(String::from)
            .collect();

        if names.is_empty() {
            return Err(format!("no routing instance given in '{}'", s));
        }
        if names.contains("ALL") {
            return Ok(InstanceFilter::All);
        }
        Ok(InstanceFilter::Only(names))
    }
}

impl fmt::Display for InstanceFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceFilter::All => write!(f, "ALL"),
            InstanceFilter::Only(names) => {
                let names: Vec<&str> = names.iter().map(String::as_str).collect();
                write!(f, "{}", names.join(","))
            }
        }
    }
}

/// How many entries a destination with several `<rt-entry>` records yields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EntrySelection {
    /// One entry per destination, taken from the active `<rt-entry>`
    #[default]
    Active,
    /// One entry per `<rt-entry>`
    Every,
}
