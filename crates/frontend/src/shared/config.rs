use serde::Deserialize;
use std::collections::HashSet;

use super::list_endpoints::ListEndpoint;
use super::list_query::DEFAULT_MAX_PAGE_SIZE;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub endpoints: Vec<ListEndpoint>,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ApiConfig {
    /// Empty means "same host as the page, port 3000"
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PaginationConfig {
    pub default_page_size: i64,
    pub max_page_size: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page_size: 20,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        }
    }
}

/// Default configuration embedded in the bundle.
///
/// Each `[[endpoints]]` entry describes one list page: `fields.fallback` is the
/// operation used for fields without a built-in rule (`name`/`code`/`from`/`to`),
/// `fields.overrides` pins individual (normalized) fields.
pub const DEFAULT_CONFIG: &str = r#"
[api]
base_url = ""

[pagination]
default_page_size = 20
max_page_size = 10000

[[endpoints]]
name = "materials"
path = "/material"
fields = { fallback = "in" }

[[endpoints]]
name = "import_requests"
path = "/import-request"
fields = { fallback = "in", overrides = { status = "inStrings" } }

[[endpoints]]
name = "export_requests"
path = "/export-request"
fields = { fallback = "in", overrides = { status = "inStrings" } }

[[endpoints]]
name = "receipts"
path = "/receipt"
fields = { fallback = "eq" }

[[endpoints]]
name = "inventory_reports"
path = "/inventory-report"
fields = { fallback = "in", overrides = { "material.id" = "eq" } }

[[endpoints]]
name = "purchase_orders"
path = "/purchase-order"
fields = { fallback = "eq", overrides = { supplierId = "in" } }

[[endpoints]]
name = "production_plans"
path = "/production-plan"
fields = { fallback = "eq" }
"#;

/// Load the embedded default configuration
pub fn load_config() -> anyhow::Result<Config> {
    log::info!("Using default embedded list configuration");
    load_config_from_str(DEFAULT_CONFIG)
}

/// Parse and validate configuration from a TOML document
pub fn load_config_from_str(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> anyhow::Result<()> {
    let pagination = &config.pagination;
    if pagination.max_page_size <= 0 {
        anyhow::bail!("pagination.max_page_size must be > 0");
    }
    if pagination.default_page_size <= 0 || pagination.default_page_size > pagination.max_page_size {
        anyhow::bail!(
            "pagination.default_page_size must be in 1..={}",
            pagination.max_page_size
        );
    }

    let mut seen = HashSet::new();
    for endpoint in &config.endpoints {
        if !seen.insert(endpoint.name.as_str()) {
            anyhow::bail!("Duplicate list endpoint: {}", endpoint.name);
        }
        if !endpoint.path.starts_with('/') {
            anyhow::bail!(
                "Endpoint '{}' path must start with '/': {}",
                endpoint.name,
                endpoint.path
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_query::OperationType;

    #[test]
    fn test_default_config_loads() {
        let config = load_config_from_str(DEFAULT_CONFIG);
        assert!(config.is_ok());
        let config = config.unwrap();
        assert_eq!(config.api.base_url, "");
        assert_eq!(config.pagination.default_page_size, 20);
        assert_eq!(config.pagination.max_page_size, 10000);
        assert_eq!(config.endpoints.len(), 7);
    }

    #[test]
    fn test_endpoint_field_policies_parsed() {
        let config = load_config().unwrap();
        let orders = config
            .endpoints
            .iter()
            .find(|e| e.name == "purchase_orders")
            .unwrap();
        assert_eq!(orders.fields.fallback, OperationType::Eq);
        assert_eq!(orders.fields.overrides.get("supplierId"), Some(&OperationType::In));
    }

    #[test]
    fn test_sections_are_optional() {
        let config = load_config_from_str("").unwrap();
        assert!(config.endpoints.is_empty());
        assert_eq!(config.pagination.max_page_size, DEFAULT_MAX_PAGE_SIZE);
    }

    #[test]
    fn test_missing_fields_table_defaults_to_in() {
        let config = load_config_from_str(
            r#"
[[endpoints]]
name = "materials"
path = "/material"
"#,
        )
        .unwrap();
        assert_eq!(config.endpoints[0].fields.fallback, OperationType::In);
    }

    #[test]
    fn test_duplicate_endpoint_rejected() {
        let result = load_config_from_str(
            r#"
[[endpoints]]
name = "receipts"
path = "/receipt"

[[endpoints]]
name = "receipts"
path = "/receipt-v2"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_page_sizes_rejected() {
        let result = load_config_from_str(
            r#"
[pagination]
default_page_size = 50
max_page_size = 10
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_operation_rejected() {
        let result = load_config_from_str(
            r#"
[[endpoints]]
name = "materials"
path = "/material"
fields = { fallback = "like" }
"#,
        );
        assert!(result.is_err());
    }
}
