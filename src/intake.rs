use crate::error::ScaffoldError;
use dialoguer::Input;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScraperKind {
    HeadlessChrome,
    Custom,
}

impl ScraperKind {
    /// Exactly `"h"` selects the headless-browser variant. Any other input,
    /// including an empty line, selects `Custom`; the permissive default is
    /// intentional.
    pub fn from_discriminator(input: &str) -> ScraperKind {
        match input {
            "h" => ScraperKind::HeadlessChrome,
            _ => ScraperKind::Custom,
        }
    }
}

/// One generator invocation, built from the four prompts. Immutable once
/// collected. `content_selector` is `None` when the prompt was left empty.
#[derive(Debug, Clone)]
pub struct ScaffoldRequest {
    pub company_name: String,
    pub kind: ScraperKind,
    pub careers_url: String,
    pub content_selector: Option<String>,
}

/// Reads the four prompts in fixed order. Any string is accepted; URLs and
/// selectors are not validated.
pub fn prompt_request() -> Result<ScaffoldRequest, ScaffoldError> {
    let company_name: String = Input::new()
        .with_prompt("Enter the name of the company (e.g. Google)")
        .interact_text()?;

    let discriminator: String = Input::new()
        .with_prompt("Scraper type ('h' for headless browser, anything else for a custom function)")
        .allow_empty(true)
        .interact_text()?;

    let careers_url: String = Input::new()
        .with_prompt("Enter the careers page URL")
        .interact_text()?;

    let content_selector: String = Input::new()
        .with_prompt(r#"Enter the content selector (e.g. ".content", empty for whole document)"#)
        .allow_empty(true)
        .interact_text()?;

    Ok(ScaffoldRequest {
        company_name,
        kind: ScraperKind::from_discriminator(&discriminator),
        careers_url,
        content_selector: Some(content_selector).filter(|s| !s.is_empty()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn h_selects_the_headless_variant() {
        assert_eq!(
            ScraperKind::from_discriminator("h"),
            ScraperKind::HeadlessChrome
        );
    }

    #[test]
    fn everything_else_selects_custom() {
        for input in ["H", "c", "", "hh", "headless", " h"] {
            assert_eq!(ScraperKind::from_discriminator(input), ScraperKind::Custom);
        }
    }
}
