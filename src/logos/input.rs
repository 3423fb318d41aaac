//! Company list inputs for the logo pipeline.
//!
//! Companies arrive either as `-c NAME[:domain]` arguments or from a file:
//! `.json` files hold an array of names or `{name, domain}` objects, anything
//! else is plain text with one company per line.

use std::path::Path;

use serde::Deserialize;

use crate::error::{ScoutError, ScoutResult};
use crate::model::CompanySpec;

/// One entry of a JSON company file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FileEntry {
    Name(String),
    Full {
        name: String,
        #[serde(default)]
        domain: Option<String>,
    },
}

/// Parse a `NAME[:domain]` command-line argument. The split is on the first
/// colon only, so a stray colon in the domain part is kept verbatim.
pub fn parse_company_arg(arg: &str) -> ScoutResult<CompanySpec> {
    let (name, domain) = match arg.split_once(':') {
        Some((name, domain)) => (name.trim(), Some(domain.trim())),
        None => (arg.trim(), None),
    };
    if name.is_empty() {
        return Err(ScoutError::InvalidInput(format!(
            "company argument {arg:?} has no name"
        )));
    }

    Ok(match domain.filter(|d| !d.is_empty()) {
        Some(domain) => CompanySpec::with_domain(name, domain),
        None => CompanySpec::new(name),
    })
}

/// Load companies from a file. `.json` files must hold a JSON array; any
/// other extension is read as text, one company per line (`name` or
/// `name,domain`), skipping blank lines and `#` comments.
pub fn load_company_file(path: &Path) -> ScoutResult<Vec<CompanySpec>> {
    let raw = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json(&raw)
    } else {
        Ok(parse_lines(&raw))
    }
}

fn parse_json(raw: &str) -> ScoutResult<Vec<CompanySpec>> {
    let entries: Vec<FileEntry> = serde_json::from_str(raw)?;
    Ok(entries
        .into_iter()
        .map(|entry| match entry {
            FileEntry::Name(name) => CompanySpec::new(name),
            FileEntry::Full {
                name,
                domain: Some(domain),
            } => CompanySpec::with_domain(name, domain),
            FileEntry::Full { name, domain: None } => CompanySpec::new(name),
        })
        .collect())
}

fn parse_lines(raw: &str) -> Vec<CompanySpec> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(|line| match line.split_once(',') {
            Some((name, domain)) if !domain.trim().is_empty() => {
                CompanySpec::with_domain(name.trim(), domain.trim())
            }
            Some((name, _)) => CompanySpec::new(name.trim()),
            None => CompanySpec::new(line),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_arg_without_domain() {
        let spec = parse_company_arg("Digital Realty").unwrap();
        assert_eq!(spec, CompanySpec::new("Digital Realty"));
    }

    #[test]
    fn test_arg_with_domain_splits_on_first_colon() {
        let spec = parse_company_arg("Acme:acme.io:8080").unwrap();
        assert_eq!(spec, CompanySpec::with_domain("Acme", "acme.io:8080"));
    }

    #[test]
    fn test_arg_trims_both_sides() {
        let spec = parse_company_arg(" Acme : acme.io ").unwrap();
        assert_eq!(spec, CompanySpec::with_domain("Acme", "acme.io"));
    }

    #[test]
    fn test_arg_with_empty_domain_guesses_later() {
        let spec = parse_company_arg("Acme:").unwrap();
        assert_eq!(spec, CompanySpec::new("Acme"));
    }

    #[test]
    fn test_arg_without_name_is_rejected() {
        assert!(parse_company_arg(":acme.io").is_err());
        assert!(parse_company_arg("   ").is_err());
    }

    #[test]
    fn test_text_lines_skip_comments_and_blanks() {
        let raw = "# header\n\nAcme\nBeta Corp, beta.io\nGamma,\n";
        let companies = parse_lines(raw);
        assert_eq!(
            companies,
            vec![
                CompanySpec::new("Acme"),
                CompanySpec::with_domain("Beta Corp", "beta.io"),
                CompanySpec::new("Gamma"),
            ]
        );
    }

    #[test]
    fn test_json_mixes_names_and_objects() {
        let raw = r#"[
            "Acme",
            {"name": "Beta Corp", "domain": "beta.io"},
            {"name": "Gamma"}
        ]"#;
        let companies = parse_json(raw).unwrap();
        assert_eq!(
            companies,
            vec![
                CompanySpec::new("Acme"),
                CompanySpec::with_domain("Beta Corp", "beta.io"),
                CompanySpec::new("Gamma"),
            ]
        );
    }

    #[test]
    fn test_json_must_be_an_array() {
        assert!(parse_json(r#"{"name": "Acme"}"#).is_err());
    }

    #[test]
    fn test_file_dispatch_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("companies.json");
        let mut f = std::fs::File::create(&json_path).unwrap();
        write!(f, r#"["Acme"]"#).unwrap();
        assert_eq!(
            load_company_file(&json_path).unwrap(),
            vec![CompanySpec::new("Acme")]
        );

        let txt_path = dir.path().join("companies.txt");
        let mut f = std::fs::File::create(&txt_path).unwrap();
        writeln!(f, "Beta Corp, beta.io").unwrap();
        assert_eq!(
            load_company_file(&txt_path).unwrap(),
            vec![CompanySpec::with_domain("Beta Corp", "beta.io")]
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        assert!(load_company_file(Path::new("/nonexistent/companies.txt")).is_err());
    }
}
