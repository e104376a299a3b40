use serde::{Deserialize, Serialize};

/// Значение фильтра колонки в том виде, в каком его отдаёт таблица:
/// строка, массив (мультивыбор) или `null`.
pub type FilterValue = serde_json::Value;

/// Фильтр одной колонки таблицы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnFilter {
    /// Ключ колонки, `_` может заменять `.` в пути связи (`material_name`)
    pub id: String,
    #[serde(default)]
    pub value: FilterValue,
}

impl ColumnFilter {
    pub fn new(id: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    /// Фильтр без значения (`null`)
    pub fn empty(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: FilterValue::Null,
        }
    }
}

/// Сортировка по одной колонке
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortEntry {
    pub id: String,
    #[serde(default)]
    pub desc: bool,
}

impl SortEntry {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }
}

/// Состояние пагинации таблицы (индекс страницы с нуля).
///
/// Значения приходят из UI как есть (в том числе отрицательные) и
/// проверяются компилятором запроса.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    pub page_index: i64,
    pub page_size: i64,
}

impl PaginationState {
    pub fn new(page_index: i64, page_size: i64) -> Self {
        Self {
            page_index,
            page_size,
        }
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 20,
        }
    }
}

/// Полное состояние списка, передаваемое в компилятор запроса
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListRequest {
    #[serde(default)]
    pub sorting: Vec<SortEntry>,
    #[serde(default)]
    pub column_filters: Vec<ColumnFilter>,
    #[serde(default)]
    pub pagination: PaginationState,
}

impl ListRequest {
    pub fn new(pagination: PaginationState) -> Self {
        Self {
            pagination,
            ..Default::default()
        }
    }

    pub fn with_sort(mut self, sort: SortEntry) -> Self {
        self.sorting.push(sort);
        self
    }

    pub fn with_filter(mut self, filter: ColumnFilter) -> Self {
        self.column_filters.push(filter);
        self
    }
}
