use crate::error::ScaffoldError;
use std::io;
use std::path::Path;
use tracing::debug;

/// Inserts `registration` into the shared module index if the module is not
/// already declared there. A missing registry file is created. Returns
/// whether anything was written, so re-runs stay idempotent.
pub fn register(
    registry_file: &Path,
    module_slug: &str,
    registration: &str,
) -> Result<bool, ScaffoldError> {
    let mut contents = match std::fs::read_to_string(registry_file) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => String::new(),
        Err(e) => {
            return Err(ScaffoldError::UpdateRegistry {
                path: registry_file.to_path_buf(),
                source: e,
            })
        }
    };

    // The brace keeps a slug from matching another slug it prefixes.
    if contents.contains(&format!("pub mod {module_slug} {{")) {
        debug!("Module {} already registered", module_slug);
        return Ok(false);
    }

    if !contents.is_empty() && !contents.ends_with('\n') {
        contents.push('\n');
    }
    contents.push_str(registration);

    std::fs::write(registry_file, contents).map_err(|e| ScaffoldError::UpdateRegistry {
        path: registry_file.to_path_buf(),
        source: e,
    })?;
    debug!("Registered module {}", module_slug);
    Ok(true)
}
