//! Запись с динамическими полями для универсальных таблиц и выпадающих списков.
//!
//! Таблица и поиск работают со строками как с картой `поле -> значение`,
//! типизированные DTO приводятся к `Record` на границе компонента.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::cmp::Ordering;

/// Поле идентификатора по умолчанию
pub const DEFAULT_ID_KEY: &str = "id";

/// Строка таблицы / элемент списка выбора
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Преобразует любой сериализуемый DTO в запись.
    /// Не-объекты (числа, массивы) дают пустую запись.
    pub fn from_serialize<T: Serialize>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(Value::Object(map)) => Self(map),
            Ok(_) => Self::new(),
            Err(e) => {
                log::warn!("record: failed to serialize DTO: {}", e);
                Self::new()
            }
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.0.insert(key.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Into<Value>) {
        self.0.insert(key.to_string(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Строковое представление поля (см. [`coerce_to_string`])
    pub fn text(&self, key: &str) -> Option<String> {
        self.get(key).and_then(coerce_to_string)
    }

    /// Идентификатор записи из поля `id`
    pub fn id(&self) -> Option<String> {
        self.id_by(DEFAULT_ID_KEY)
    }

    pub fn id_by(&self, key: &str) -> Option<String> {
        self.text(key).filter(|s| !s.is_empty())
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Приводит значение к строке для поиска и отображения.
///
/// `null` и объекты строки не имеют. Целые числа, записанные как float
/// (`2.0`), выводятся без дробной части.
pub fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Object(_) => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(format_number(n)),
        Value::Array(items) => Some(
            items
                .iter()
                .map(|item| coerce_to_string(item).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(","),
        ),
    }
}

fn format_number(n: &serde_json::Number) -> String {
    if n.is_f64() {
        if let Some(f) = n.as_f64() {
            if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                return format!("{}", f as i64);
            }
        }
    }
    n.to_string()
}

/// Десериализует идентификатор, пришедший строкой или числом
pub fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(format_number(&n)),
        other => Err(serde::de::Error::custom(format!(
            "invalid identifier: {}",
            other
        ))),
    }
}

/// Проверяет, содержит ли значение подстроку (без учёта регистра).
/// `needle_lower` должен быть уже в нижнем регистре.
pub fn value_contains(value: Option<&Value>, needle_lower: &str) -> bool {
    value
        .and_then(coerce_to_string)
        .map(|s| s.to_lowercase().contains(needle_lower))
        .unwrap_or(false)
}

/// Естественное сравнение значений: числа с числами, строки со строками,
/// bool с bool. Значения разных видов упорядочены по виду (числа, строки,
/// bool, затем всё остальное), пустые и составные значения равны между собой,
/// поэтому стабильная сортировка сохраняет их исходный порядок.
pub fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Number(x)), Some(Value::Number(y))) => match (x.as_f64(), y.as_f64()) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    }
}

fn kind_rank(value: Option<&Value>) -> u8 {
    match value {
        Some(Value::Number(_)) => 0,
        Some(Value::String(_)) => 1,
        Some(Value::Bool(_)) => 2,
        _ => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_coerce_to_string() {
        assert_eq!(coerce_to_string(&json!("Alpha")), Some("Alpha".to_string()));
        assert_eq!(coerce_to_string(&json!(42)), Some("42".to_string()));
        assert_eq!(coerce_to_string(&json!(2.0)), Some("2".to_string()));
        assert_eq!(coerce_to_string(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(coerce_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(coerce_to_string(&json!(["a", 1])), Some("a,1".to_string()));
        assert_eq!(coerce_to_string(&json!(null)), None);
        assert_eq!(coerce_to_string(&json!({"a": 1})), None);
    }

    #[test]
    fn test_record_id_from_number_and_string() {
        let numeric = Record::new().with("id", 7);
        let text = Record::new().with("id", "abc");
        let empty = Record::new().with("id", "");
        assert_eq!(numeric.id(), Some("7".to_string()));
        assert_eq!(text.id(), Some("abc".to_string()));
        assert_eq!(empty.id(), None);
        assert_eq!(Record::new().id(), None);
    }

    #[test]
    fn test_compare_values() {
        let one = json!(1);
        let ten = json!(10);
        let a = json!("a");
        let b = json!("b");
        assert_eq!(compare_values(Some(&one), Some(&ten)), Ordering::Less);
        assert_eq!(compare_values(Some(&b), Some(&a)), Ordering::Greater);
        assert_eq!(compare_values(Some(&one), Some(&a)), Ordering::Less);
        assert_eq!(compare_values(None, Some(&a)), Ordering::Greater);
        assert_eq!(compare_values(None, Some(&json!(null))), Ordering::Equal);
    }

    #[test]
    fn test_deserialize_id_accepts_numbers() {
        #[derive(Deserialize)]
        struct Dto {
            #[serde(deserialize_with = "deserialize_id")]
            id: String,
        }
        let numeric: Dto = serde_json::from_str(r#"{"id": 12}"#).unwrap();
        let text: Dto = serde_json::from_str(r#"{"id": "a-1"}"#).unwrap();
        assert_eq!(numeric.id, "12");
        assert_eq!(text.id, "a-1");
        assert!(serde_json::from_str::<Dto>(r#"{"id": [1]}"#).is_err());
    }

    #[test]
    fn test_from_serialize() {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Dto {
            id: u32,
            full_name: String,
        }
        let record = Record::from_serialize(&Dto {
            id: 3,
            full_name: "Ana".to_string(),
        });
        assert_eq!(record.id(), Some("3".to_string()));
        assert_eq!(record.text("fullName"), Some("Ana".to_string()));
        assert!(Record::from_serialize(&5).as_map().is_empty());
    }
}
