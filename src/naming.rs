use lazy_regex::regex;

/// Identifiers derived from a raw company name. `module_slug` names the
/// module directory and the generated function; `registry_key` is the lookup
/// key into the host project's company-keyed data store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifiers {
    pub module_slug: String,
    pub registry_key: String,
}

impl Identifiers {
    pub fn derive(company_name: &str) -> Identifiers {
        let module_slug = to_slug(company_name);
        let registry_key = to_registry_key(&module_slug);
        Identifiers {
            module_slug,
            registry_key,
        }
    }
}

/// Every space and comma becomes an underscore, then the whole name is
/// lowercased. URL and selector never influence the slug.
pub fn to_slug(raw: &str) -> String {
    regex!(r"[ ,]").replace_all(raw, "_").to_lowercase()
}

/// Uppercases only the first character of the slug and lowercases the rest,
/// so multi-word names collapse to a single capitalized token.
pub fn to_registry_key(slug: &str) -> String {
    let mut chars = slug.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str().to_lowercase()),
        None => String::new(),
    }
}

/// Escapes a value for splicing into a double-quoted string literal of the
/// generated source. Quotes and backslashes are the only characters that can
/// break out of the literal.
pub fn escape_str_literal(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(c),
        }
    }
    escaped
}
