use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyConfig {
    /// Short company key, also used to recognise local release filenames.
    pub name: String,
    pub newsroom_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CompaniesFile {
    pub companies: Vec<CompanyConfig>,
}

impl CompaniesFile {
    /// Find the company a local release file belongs to.
    ///
    /// Returns the first company, in file order, whose lowercase name occurs
    /// anywhere in the lowercase filename.
    #[must_use]
    pub fn infer_from_filename(&self, filename: &str) -> Option<&CompanyConfig> {
        let lower = filename.to_lowercase();
        self.companies
            .iter()
            .find(|c| lower.contains(&c.name.to_lowercase()))
    }
}

/// Load and validate the company registry from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_companies(path: &Path) -> Result<CompaniesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::CompaniesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let companies_file: CompaniesFile = serde_yaml::from_str(&content)?;

    validate_companies(&companies_file)?;

    Ok(companies_file)
}

fn validate_companies(companies_file: &CompaniesFile) -> Result<(), ConfigError> {
    let mut seen_names = HashSet::new();

    for company in &companies_file.companies {
        if company.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "company name must be non-empty".to_string(),
            ));
        }

        if !seen_names.insert(company.name.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "duplicate company name: '{}'",
                company.name
            )));
        }

        if let Some(url) = &company.newsroom_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::Validation(format!(
                    "company '{}' has invalid newsroom_url '{url}'; expected http(s)",
                    company.name
                )));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn company(name: &str) -> CompanyConfig {
        CompanyConfig {
            name: name.to_string(),
            newsroom_url: None,
        }
    }

    #[test]
    fn infer_matches_case_insensitive_substring() {
        let file = CompaniesFile {
            companies: vec![company("sap"), company("zeiss med")],
        };
        let found = file.infer_from_filename("2024-03_SAP_Joule.txt");
        assert_eq!(found.map(|c| c.name.as_str()), Some("sap"));
    }

    #[test]
    fn infer_prefers_first_company_in_file_order() {
        let file = CompaniesFile {
            companies: vec![company("sma solar"), company("sma")],
        };
        let found = file.infer_from_filename("sma solar q1.txt");
        assert_eq!(found.map(|c| c.name.as_str()), Some("sma solar"));
    }

    #[test]
    fn infer_returns_none_without_match() {
        let file = CompaniesFile {
            companies: vec![company("evotec")],
        };
        assert!(file.infer_from_filename("unrelated.txt").is_none());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let file = CompaniesFile {
            companies: vec![company("  ")],
        };
        assert!(matches!(
            validate_companies(&file),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_duplicate_names_ignoring_case() {
        let file = CompaniesFile {
            companies: vec![company("SAP"), company("sap")],
        };
        let err = validate_companies(&file).unwrap_err();
        assert!(err.to_string().contains("duplicate company name"));
    }

    #[test]
    fn validate_rejects_non_http_newsroom_url() {
        let file = CompaniesFile {
            companies: vec![CompanyConfig {
                name: "ionos".to_string(),
                newsroom_url: Some("ftp://ionos-group.com".to_string()),
            }],
        };
        assert!(matches!(
            validate_companies(&file),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn load_companies_reads_yaml_file() {
        let mut tmp = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "companies:\n  - name: elmos\n    newsroom_url: https://www.elmos.com/\n  - name: verbio"
        )
        .unwrap();
        let file = load_companies(tmp.path()).unwrap();
        assert_eq!(file.companies.len(), 2);
        assert_eq!(file.companies[1].name, "verbio");
        assert!(file.companies[1].newsroom_url.is_none());
    }

    #[test]
    fn load_companies_reports_missing_file() {
        let result = load_companies(Path::new("/nonexistent/companies.yaml"));
        assert!(matches!(result, Err(ConfigError::CompaniesFileIo { .. })));
    }
}
