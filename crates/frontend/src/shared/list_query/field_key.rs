/// Переводит ключ колонки UI в путь связи backend: все `_` заменяются на `.`
/// (`material_name` -> `material.name`).
///
/// Ключ без подчёркиваний возвращается без изменений, поэтому повторная
/// нормализация ничего не меняет.
pub fn normalize(key: &str) -> String {
    key.replace('_', ".")
}
