use serde::{Deserialize, Serialize};

/// Wire format between page-context extraction scripts and generated scraper
/// modules. A script evaluated against the live page must return a JSON
/// string encoding an array of these records; the generated module parses it
/// with `serde_json::from_str::<Vec<ScrapedJob>>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ScrapedJob {
    pub title: String,
    pub location: String,
    pub link: String,
}
