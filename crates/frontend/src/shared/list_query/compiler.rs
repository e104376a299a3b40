use contracts::shared::list_query::{ListQuery, ListRequest, PaginationState};

use super::error::ListQueryError;
use super::filter::compile_filter;
use super::resolver::{FieldTypeResolver, FieldTypeTable};
use super::serializer::serialize;
use super::sort::compile_sort;

/// Upper bound for `pageSize` on endpoint compilers, same cap the backend list handlers apply
pub const DEFAULT_MAX_PAGE_SIZE: i64 = 10_000;

/// Компилятор запроса для одного списка (со своей политикой типов полей).
///
/// Не хранит изменяемого состояния; один экземпляр можно использовать из
/// любого количества параллельных загрузок. Ограничение размера страницы
/// задаётся только явно через [`ListQueryCompiler::with_max_page_size`].
pub struct ListQueryCompiler {
    resolver: Box<dyn FieldTypeResolver + Send + Sync>,
    max_page_size: Option<i64>,
}

impl ListQueryCompiler {
    pub fn new(resolver: impl FieldTypeResolver + Send + Sync + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            max_page_size: None,
        }
    }

    pub fn with_max_page_size(mut self, max_page_size: i64) -> Self {
        self.max_page_size = Some(max_page_size);
        self
    }

    /// Build the structured query without serializing it
    pub fn build(&self, request: &ListRequest) -> Result<ListQuery, ListQueryError> {
        build_query(request, self.resolver.as_ref(), self.max_page_size)
    }

    /// Build and serialize; result is ready to append to the endpoint path
    pub fn compile(&self, request: &ListRequest) -> Result<String, ListQueryError> {
        let query = self.build(request)?;
        Ok(serialize(&query))
    }
}

impl Default for ListQueryCompiler {
    fn default() -> Self {
        Self::new(FieldTypeTable::default())
    }
}

/// One-shot compilation. Without a resolver the default field-type table is used.
/// Page size is not capped here.
pub fn compile(
    request: &ListRequest,
    resolver: Option<&dyn FieldTypeResolver>,
) -> Result<String, ListQueryError> {
    let default_table = FieldTypeTable::default();
    let resolver = resolver.unwrap_or(&default_table);
    let query = build_query(request, resolver, None)?;
    Ok(serialize(&query))
}

fn build_query(
    request: &ListRequest,
    resolver: &dyn FieldTypeResolver,
    max_page_size: Option<i64>,
) -> Result<ListQuery, ListQueryError> {
    let (page_index, page_size) = match page_window(&request.pagination, max_page_size) {
        Ok(window) => window,
        Err(e) => {
            log::warn!("Rejected list request: {}", e);
            return Err(e);
        }
    };

    let mut filter = Vec::with_capacity(request.column_filters.len());
    for column_filter in &request.column_filters {
        filter.extend(compile_filter(column_filter, resolver)?);
    }

    let order = request.sorting.iter().map(compile_sort).collect();

    let query = ListQuery::for_page(page_index, page_size, filter, order).ok_or_else(|| {
        ListQueryError::Validation(format!(
            "offset overflows for page {} of size {}",
            page_index, page_size
        ))
    })?;
    log::debug!(
        "Compiled list query: limit={}, offset={}, {} filter clause(s), {} order clause(s)",
        query.limit(),
        query.offset(),
        query.filter().len(),
        query.order().len()
    );
    Ok(query)
}

/// Validated `(pageIndex, pageSize)`; `pageIndex * pageSize` must fit in `i64`
fn page_window(
    pagination: &PaginationState,
    max_page_size: Option<i64>,
) -> Result<(u64, u64), ListQueryError> {
    let PaginationState {
        page_index,
        page_size,
    } = *pagination;

    if page_index < 0 {
        return Err(ListQueryError::Validation(format!(
            "page index must be >= 0, got {}",
            page_index
        )));
    }
    if page_size <= 0 {
        return Err(ListQueryError::Validation(format!(
            "page size must be > 0, got {}",
            page_size
        )));
    }
    if let Some(max_page_size) = max_page_size {
        if page_size > max_page_size {
            return Err(ListQueryError::Validation(format!(
                "page size must be <= {}, got {}",
                max_page_size, page_size
            )));
        }
    }

    page_index.checked_mul(page_size).ok_or_else(|| {
        ListQueryError::Validation(format!(
            "offset overflows for page {} of size {}",
            page_index, page_size
        ))
    })?;

    Ok((page_index as u64, page_size as u64))
}
