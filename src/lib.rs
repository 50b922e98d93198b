use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod contract;
pub mod intake;
pub mod naming;
pub mod registry;
pub mod template;

mod error;

pub use contract::ScrapedJob;
pub use error::ScaffoldError;
pub use intake::{ScaffoldRequest, ScraperKind};
pub use naming::Identifiers;
pub use template::GeneratedModule;

/// Scrapers root of the host project, relative to the invocation directory.
pub const SCRAPERS_ROOT: &str = "./src/scrapers";

/// What a successful run produced.
#[derive(Debug)]
pub struct ScaffoldSummary {
    pub identifiers: Identifiers,
    pub module_file: PathBuf,
    pub registry_file: PathBuf,
    pub newly_registered: bool,
}

/// Runs the whole pipeline for one request: derive identifiers, render the
/// module, ensure its directory exists, write the file (overwriting any prior
/// content), then register it in the shared `mod.rs`. Strictly sequential and
/// without rollback; a failed registration leaves the module file in place.
pub fn scaffold(
    request: &ScaffoldRequest,
    scrapers_root: &Path,
) -> Result<ScaffoldSummary, ScaffoldError> {
    let identifiers = Identifiers::derive(&request.company_name);
    let module = GeneratedModule::render(request, &identifiers, scrapers_root);

    fs::create_dir_all(&module.module_dir).map_err(|e| ScaffoldError::CreateDir {
        path: module.module_dir.clone(),
        source: e,
    })?;
    debug!("Module directory {}", module.module_dir.display());

    fs::write(&module.module_file, &module.source_text).map_err(|e| {
        ScaffoldError::WriteModule {
            path: module.module_file.clone(),
            source: e,
        }
    })?;
    info!("Wrote {}", module.module_file.display());

    let registry_file = scrapers_root.join("mod.rs");
    let newly_registered = registry::register(
        &registry_file,
        &identifiers.module_slug,
        &module.registration,
    )?;

    Ok(ScaffoldSummary {
        identifiers,
        module_file: module.module_file,
        registry_file,
        newly_registered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn weedmaps_request() -> ScaffoldRequest {
        ScaffoldRequest {
            company_name: "Weedmaps".to_string(),
            kind: ScraperKind::HeadlessChrome,
            careers_url: "https://weedmaps.com/careers".to_string(),
            content_selector: Some("#jobs".to_string()),
        }
    }

    #[test]
    fn scaffolds_a_module_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("scrapers");

        let summary = scaffold(&weedmaps_request(), &root).unwrap();

        assert_eq!(summary.identifiers.module_slug, "weedmaps");
        assert_eq!(summary.identifiers.registry_key, "Weedmaps");
        assert!(summary.newly_registered);
        assert_eq!(summary.module_file, root.join("weedmaps/scraper.rs"));

        let source = fs::read_to_string(&summary.module_file).unwrap();
        assert_eq!(source.matches("https://weedmaps.com/careers").count(), 1);
        assert_eq!(source.matches("\"#jobs\"").count(), 1);

        let registry = fs::read_to_string(root.join("mod.rs")).unwrap();
        assert!(registry.contains("pub mod weedmaps {\n    pub mod scraper;\n}"));
    }

    #[test]
    fn re_running_overwrites_the_file_without_duplicating_the_registration() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("scrapers");
        let request = weedmaps_request();

        let first = scaffold(&request, &root).unwrap();
        fs::write(&first.module_file, "// edited by hand").unwrap();

        let second = scaffold(&request, &root).unwrap();
        assert!(!second.newly_registered);

        let source = fs::read_to_string(&second.module_file).unwrap();
        assert!(source.contains("pub async fn scrape_weedmaps"));

        let registry = fs::read_to_string(root.join("mod.rs")).unwrap();
        assert_eq!(registry.matches("pub mod weedmaps {").count(), 1);
    }

    #[test]
    fn failed_directory_creation_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        // A plain file where the scrapers root should be makes create_dir_all fail.
        let root = dir.path().join("scrapers");
        fs::write(&root, "").unwrap();

        let result = scaffold(&weedmaps_request(), &root);

        assert!(matches!(result, Err(ScaffoldError::CreateDir { .. })));
        assert!(!root.join("weedmaps").exists());
        assert!(!root.join("mod.rs").exists());
    }

    #[test]
    fn custom_variant_scaffolds_the_same_paths() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("scrapers");
        let request = ScaffoldRequest {
            kind: ScraperKind::Custom,
            ..weedmaps_request()
        };

        let summary = scaffold(&request, &root).unwrap();

        let source = fs::read_to_string(&summary.module_file).unwrap();
        assert!(!source.contains("Browser::new"));
        assert!(source.contains("const CAREERS_URL: &str = \"https://weedmaps.com/careers\";"));
        assert!(fs::read_to_string(root.join("mod.rs"))
            .unwrap()
            .contains("pub mod weedmaps {"));
    }
}
