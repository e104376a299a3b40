use contracts::shared::list_query::{ClauseValue, ColumnFilter, FilterClause, FilterValue};

use super::error::ListQueryError;
use super::field_key::normalize;
use super::resolver::FieldTypeResolver;

/// Компилирует фильтр колонки в условия backend.
///
/// - `null`, `""` и `[]` дают пустой результат (фильтр не применяется);
/// - массив при операции `in`/`inStrings` передаётся одним условием;
/// - массив при любой другой операции раскладывается на условие на каждый элемент;
/// - скаляр даёт одно условие.
///
/// Пустые элементы массива (`null`, `""`) пропускаются. Объекты и вложенные
/// массивы не имеют строкового представления и возвращают
/// [`ListQueryError::Encoding`].
pub fn compile_filter(
    filter: &ColumnFilter,
    resolver: &dyn FieldTypeResolver,
) -> Result<Vec<FilterClause>, ListQueryError> {
    let field = normalize(&filter.id);
    let op = resolver.resolve(&field);

    match &filter.value {
        FilterValue::Array(items) => {
            let mut values = Vec::with_capacity(items.len());
            for item in items {
                if let Some(value) = scalar_to_string(&field, item)? {
                    values.push(value);
                }
            }

            if values.is_empty() {
                log::debug!("Skipping filter '{}': empty array", filter.id);
                return Ok(Vec::new());
            }

            if op.is_set_membership() {
                Ok(vec![FilterClause::new(field, op, ClauseValue::Multiple(values))])
            } else {
                Ok(values
                    .into_iter()
                    .map(|value| FilterClause::new(field.clone(), op, value))
                    .collect())
            }
        }
        value => match scalar_to_string(&field, value)? {
            Some(value) => Ok(vec![FilterClause::new(field, op, value)]),
            None => {
                log::debug!("Skipping filter '{}': empty value", filter.id);
                Ok(Vec::new())
            }
        },
    }
}

/// `None` for semantically empty values
fn scalar_to_string(field: &str, value: &FilterValue) -> Result<Option<String>, ListQueryError> {
    match value {
        FilterValue::Null => Ok(None),
        FilterValue::String(s) if s.is_empty() => Ok(None),
        FilterValue::String(s) => Ok(Some(s.clone())),
        FilterValue::Number(n) => Ok(Some(n.to_string())),
        FilterValue::Bool(b) => Ok(Some(b.to_string())),
        FilterValue::Array(_) => Err(ListQueryError::Encoding {
            field: field.to_string(),
            reason: "nested array".to_string(),
        }),
        FilterValue::Object(_) => Err(ListQueryError::Encoding {
            field: field.to_string(),
            reason: "object value".to_string(),
        }),
    }
}
