use crate::intake::{ScaffoldRequest, ScraperKind};
use crate::naming::{escape_str_literal, Identifiers};
use std::path::{Path, PathBuf};

/// Selector used when the operator leaves the content-selector prompt empty.
pub const WHOLE_DOCUMENT_SELECTOR: &str = "body";

/// Example page-context script for an unrelated job board. Page structures
/// are too heterogeneous to infer from a selector string, so the operator
/// replaces this by hand after generation.
const EXAMPLE_EXTRACTION_SCRIPT: &str = r##"// DELETE AND REPLACE WITH CUSTOM JS LOGIC
const engJobs = document.querySelector("#jobs-16253");

const jobs = Array.from(engJobs.querySelectorAll(".job")).map((j) => {
    const title = j.querySelector(".job-title").innerHTML;
    const location = j.querySelector(".job-location").innerHTML;
    const link = j.querySelector("a").href;

    return {
        title,
        location,
        link
    };
});

JSON.stringify(jobs);"##;

/// A rendered scraper module, ready to be placed on disk.
#[derive(Debug)]
pub struct GeneratedModule {
    pub module_dir: PathBuf,
    pub module_file: PathBuf,
    pub source_text: String,
    pub registration: String,
}

impl GeneratedModule {
    pub fn render(
        request: &ScaffoldRequest,
        identifiers: &Identifiers,
        scrapers_root: &Path,
    ) -> GeneratedModule {
        let module_dir = scrapers_root.join(&identifiers.module_slug);
        let module_file = module_dir.join("scraper.rs");
        let source_text = match request.kind {
            ScraperKind::HeadlessChrome => render_headless_chrome(request, identifiers),
            ScraperKind::Custom => render_custom(request, identifiers),
        };
        GeneratedModule {
            module_dir,
            module_file,
            source_text,
            registration: registration(&identifiers.module_slug),
        }
    }
}

/// Namespace declaration inserted into the shared `mod.rs`.
pub fn registration(module_slug: &str) -> String {
    format!("pub mod {module_slug} {{\n    pub mod scraper;\n}}\n")
}

fn effective_selector(request: &ScaffoldRequest) -> &str {
    request
        .content_selector
        .as_deref()
        .unwrap_or(WHOLE_DOCUMENT_SELECTOR)
}

fn render_headless_chrome(request: &ScaffoldRequest, identifiers: &Identifiers) -> String {
    format!(
        r####"use std::error::Error;

use headless_chrome::{{Browser, LaunchOptions}};

use crate::models::{{
    data::Data,
    scraper::{{JobsPayload, ScrapedJob}},
}};

pub async fn scrape_{slug}(data: &mut Data) -> Result<JobsPayload, Box<dyn Error>> {{
    let launch_options = LaunchOptions {{
        headless: false,
        window_size: Some((1920, 1080)),
        enable_logging: true,

        ..LaunchOptions::default()
    }};
    let browser = Browser::new(launch_options)?;

    let tab = browser.new_tab()?;

    tab.navigate_to("{url}")?;
    tab.wait_for_element("body")?;
    tab.wait_for_element("{selector}")?;

    let remote_object = tab.evaluate(
        r##"
{script}
    "##,
        false,
    )?;

    let scraped_jobs: Vec<ScrapedJob> =
        serde_json::from_str(remote_object.value.unwrap().as_str().unwrap())?;

    let jobs_payload = JobsPayload::from_scraped_jobs(scraped_jobs, &data.data["{key}"]);

    data.data.get_mut("{key}").unwrap().jobs = jobs_payload.all_jobs.clone();

    data.save();

    Ok(jobs_payload)
}}
"####,
        slug = identifiers.module_slug,
        url = escape_str_literal(&request.careers_url),
        selector = escape_str_literal(effective_selector(request)),
        key = escape_str_literal(&identifiers.registry_key),
        script = EXAMPLE_EXTRACTION_SCRIPT,
    )
}

fn render_custom(request: &ScaffoldRequest, identifiers: &Identifiers) -> String {
    format!(
        r#"use std::error::Error;

use crate::models::{{
    data::Data,
    scraper::{{JobsPayload, ScrapedJob}},
}};

const CAREERS_URL: &str = "{url}";
const CONTENT_SELECTOR: &str = "{selector}";

pub async fn scrape_{slug}(data: &mut Data) -> Result<JobsPayload, Box<dyn Error>> {{
    // DELETE AND REPLACE WITH CUSTOM FETCH LOGIC: collect the postings for
    // CAREERS_URL (content under CONTENT_SELECTOR) as a Vec<ScrapedJob>.
    let scraped_jobs: Vec<ScrapedJob> = Vec::new();

    let jobs_payload = JobsPayload::from_scraped_jobs(scraped_jobs, &data.data["{key}"]);

    data.data.get_mut("{key}").unwrap().jobs = jobs_payload.all_jobs.clone();

    data.save();

    Ok(jobs_payload)
}}
"#,
        slug = identifiers.module_slug,
        url = escape_str_literal(&request.careers_url),
        selector = escape_str_literal(effective_selector(request)),
        key = escape_str_literal(&identifiers.registry_key),
    )
}
