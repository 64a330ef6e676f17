// JSON rendering of a comparison

use crate::config::Config;
use crate::error::AppResult;
use crate::routes::RoutingEntry;
use crate::routes::diff::ComparisonResult;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub pre: String,
    pub post: String,
    pub vrf: String,
    pub only_in_pre: &'a [RoutingEntry],
    pub only_in_post: &'a [RoutingEntry],
}

impl<'a> JsonReport<'a> {
    pub fn new(result: &'a ComparisonResult, config: &Config) -> Self {
        JsonReport {
            generated_at: Utc::now(),
            pre: config.pre.display().to_string(),
            post: config.post.display().to_string(),
            vrf: config.filter.to_string(),
            only_in_pre: &result.only_in_pre,
            only_in_post: &result.only_in_post,
        }
    }
}

pub fn render(result: &ComparisonResult, config: &Config) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(&JsonReport::new(result, config))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileOutput, OutputFormat};
    use crate::routes::{EntrySelection, InstanceFilter};
    use std::path::PathBuf;

    #[test]
    fn test_json_report_fields() {
        let config = Config {
            pre: PathBuf::from("pre.xml"),
            post: PathBuf::from("post.xml"),
            filter: "inet.0".parse::<InstanceFilter>().unwrap(),
            entries: EntrySelection::Active,
            file_output: FileOutput::Off,
            format: OutputFormat::Json,
            output_dir: PathBuf::from("."),
        };
        let result = ComparisonResult {
            only_in_pre: Vec::new(),
            only_in_post: vec![RoutingEntry {
                table_name: "inet.0".to_string(),
                destination: "10.0.0.0/24".to_string(),
                next_hops: vec!["192.168.1.1".to_string(), "192.168.1.2".to_string()],
                via: vec!["ge-0/0/0.0".to_string(), "ge-0/0/1.0".to_string()],
                local_interfaces: vec![String::new(), String::new()],
            }],
        };

        let value: serde_json::Value =
            serde_json::from_str(&render(&result, &config).unwrap()).unwrap();
        assert_eq!(value["pre"], "pre.xml");
        assert_eq!(value["vrf"], "inet.0");
        assert_eq!(value["only_in_pre"].as_array().unwrap().len(), 0);
        assert_eq!(value["only_in_post"][0]["next_hops"][1], "192.168.1.2");
        assert!(value["generated_at"].is_string());
    }
}
