use contracts::shared::list_query::{OrderClause, SortDirection, SortEntry};

use super::field_key::normalize;

/// Сортировка колонки -> условие `order[j]`. Всегда один к одному.
pub fn compile_sort(sort: &SortEntry) -> OrderClause {
    OrderClause {
        field: normalize(&sort.id),
        dir: if sort.desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    }
}
