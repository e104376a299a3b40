use std::collections::BTreeMap;

use contracts::shared::list_query::OperationType;
use serde::Deserialize;

/// Выбор типа операции по (нормализованному) имени поля.
///
/// Реализован для любых замыканий `Fn(&str) -> OperationType`, так что
/// отдельный список может подставить свою политику без нового типа.
pub trait FieldTypeResolver {
    fn resolve(&self, field: &str) -> OperationType;
}

impl<F> FieldTypeResolver for F
where
    F: Fn(&str) -> OperationType,
{
    fn resolve(&self, field: &str) -> OperationType {
        self(field)
    }
}

/// Table-driven resolver.
///
/// Lookup order: explicit per-field `overrides`, then the built-in rows
/// (`name`/`code` -> `ilike`, `from` -> `gte`, `to` -> `lte`), then `fallback`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FieldTypeTable {
    #[serde(default)]
    pub overrides: BTreeMap<String, OperationType>,
    #[serde(default = "default_fallback")]
    pub fallback: OperationType,
}

fn default_fallback() -> OperationType {
    OperationType::In
}

impl FieldTypeTable {
    pub fn with_fallback(fallback: OperationType) -> Self {
        Self {
            overrides: BTreeMap::new(),
            fallback,
        }
    }

    /// Variant used by lists that compare everything except name/code/range by `eq`
    pub fn equality() -> Self {
        Self::with_fallback(OperationType::Eq)
    }

    pub fn with_override(mut self, field: impl Into<String>, op: OperationType) -> Self {
        self.overrides.insert(field.into(), op);
        self
    }

    fn builtin(field: &str) -> Option<OperationType> {
        match field {
            "name" | "code" => Some(OperationType::ILike),
            "from" => Some(OperationType::Gte),
            "to" => Some(OperationType::Lte),
            _ => None,
        }
    }
}

impl Default for FieldTypeTable {
    fn default() -> Self {
        Self::with_fallback(default_fallback())
    }
}

impl FieldTypeResolver for FieldTypeTable {
    fn resolve(&self, field: &str) -> OperationType {
        self.overrides
            .get(field)
            .copied()
            .or_else(|| Self::builtin(field))
            .unwrap_or(self.fallback)
    }
}
