//! Реестр списочных endpoint'ов.
//!
//! Особенности каждого списка (какой тип операции по умолчанию, какие поля
//! сравниваются иначе) описаны в конфигурации, а не в коде страниц.

use contracts::shared::list_query::{ListRequest, PaginationState};
use serde::Deserialize;

use super::config::{load_config, Config};
use super::list_query::{FieldTypeTable, ListQueryCompiler, ListQueryError};

/// Один списочный endpoint backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListEndpoint {
    pub name: String,
    /// Путь относительно базового URL API, например `/material`
    pub path: String,
    #[serde(default)]
    pub fields: FieldTypeTable,
}

impl ListEndpoint {
    pub fn resolver(&self) -> FieldTypeTable {
        self.fields.clone()
    }

    pub fn compiler(&self, max_page_size: i64) -> ListQueryCompiler {
        ListQueryCompiler::new(self.resolver()).with_max_page_size(max_page_size)
    }

    /// Путь с query string: `/material?limit=20&offset=0...`
    pub fn query_path(
        &self,
        request: &ListRequest,
        max_page_size: i64,
    ) -> Result<String, ListQueryError> {
        let query = self.compiler(max_page_size).compile(request)?;
        Ok(format!("{}{}", self.path, query))
    }
}

#[derive(Debug, Clone)]
pub struct EndpointRegistry {
    endpoints: Vec<ListEndpoint>,
    max_page_size: i64,
    default_page_size: i64,
}

impl EndpointRegistry {
    pub fn from_config(config: &Config) -> Self {
        log::info!("List endpoints registered: {}", config.endpoints.len());
        Self {
            endpoints: config.endpoints.clone(),
            max_page_size: config.pagination.max_page_size,
            default_page_size: config.pagination.default_page_size,
        }
    }

    /// Registry built from the embedded default configuration
    pub fn load_default() -> anyhow::Result<Self> {
        let config = load_config()?;
        Ok(Self::from_config(&config))
    }

    pub fn get(&self, name: &str) -> Result<&ListEndpoint, ListQueryError> {
        self.endpoints
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| ListQueryError::UnknownEndpoint(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.endpoints.iter().map(|e| e.name.as_str())
    }

    pub fn max_page_size(&self) -> i64 {
        self.max_page_size
    }

    pub fn default_page_size(&self) -> i64 {
        self.default_page_size
    }

    /// Первая страница с размером из `pagination.default_page_size`
    pub fn initial_pagination(&self) -> PaginationState {
        PaginationState::new(0, self.default_page_size)
    }

    /// Пустой запрос для только что открытого списка
    pub fn initial_request(&self) -> ListRequest {
        ListRequest::new(self.initial_pagination())
    }

    pub fn compiler(&self, name: &str) -> Result<ListQueryCompiler, ListQueryError> {
        Ok(self.get(name)?.compiler(self.max_page_size))
    }

    pub fn query_path(&self, name: &str, request: &ListRequest) -> Result<String, ListQueryError> {
        self.get(name)?.query_path(request, self.max_page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_query::FieldTypeResolver;
    use crate::shared::config::load_config_from_str;
    use contracts::shared::list_query::{ColumnFilter, OperationType, SortEntry};
    use serde_json::json;

    fn registry() -> EndpointRegistry {
        EndpointRegistry::load_default().unwrap()
    }

    #[test]
    fn test_all_list_pages_registered() {
        let registry = registry();
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(
            names,
            vec![
                "materials",
                "import_requests",
                "export_requests",
                "receipts",
                "inventory_reports",
                "purchase_orders",
                "production_plans",
            ]
        );
    }

    #[test]
    fn test_unknown_endpoint() {
        let result = registry().query_path("invoices", &ListRequest::default());
        assert_eq!(
            result,
            Err(ListQueryError::UnknownEndpoint("invoices".to_string()))
        );
    }

    #[test]
    fn test_materials_query_path() {
        let request = ListRequest::new(PaginationState::new(1, 10))
            .with_sort(SortEntry::desc("material_name"))
            .with_filter(ColumnFilter::new("code", "AB"));

        let path = registry().query_path("materials", &request).unwrap();

        assert_eq!(
            path,
            "/material?limit=10&offset=10\
             &filter[0][field]=code&filter[0][type]=ilike&filter[0][value]=AB\
             &order[0][field]=material.name&order[0][dir]=desc"
        );
    }

    #[test]
    fn test_equality_endpoint_fans_out_arrays() {
        let request = ListRequest::new(PaginationState::new(0, 20))
            .with_filter(ColumnFilter::new("status", json!(["draft", "approved"])));

        let query = registry().compiler("receipts").unwrap().build(&request).unwrap();

        assert_eq!(query.filter().len(), 2);
        assert!(query.filter().iter().all(|c| c.op == OperationType::Eq));
    }

    #[test]
    fn test_override_applies_to_normalized_field() {
        let endpoint = registry().get("inventory_reports").unwrap().clone();
        let resolver = endpoint.resolver();
        assert_eq!(resolver.resolve("material.id"), OperationType::Eq);
        assert_eq!(resolver.resolve("warehouseId"), OperationType::In);

        let request = ListRequest::new(PaginationState::new(0, 20))
            .with_filter(ColumnFilter::new("material_id", "m1"));
        let path = endpoint.query_path(&request, 100).unwrap();
        assert!(path.contains("filter[0][field]=material.id&filter[0][type]=eq"));
    }

    #[test]
    fn test_initial_request_uses_configured_page_size() {
        let config = load_config_from_str(
            r#"
[pagination]
default_page_size = 50
max_page_size = 500

[[endpoints]]
name = "receipts"
path = "/receipt"
"#,
        )
        .unwrap();
        let registry = EndpointRegistry::from_config(&config);

        assert_eq!(registry.initial_pagination(), PaginationState::new(0, 50));
        let path = registry
            .query_path("receipts", &registry.initial_request())
            .unwrap();
        assert_eq!(path, "/receipt?limit=50&offset=0");
    }

    #[test]
    fn test_registry_page_size_cap_applies() {
        let request = ListRequest::new(PaginationState::new(0, 20_000));
        let result = registry().query_path("materials", &request);
        assert!(matches!(result, Err(ListQueryError::Validation(_))));
    }
}
