use crate::shared::record::{deserialize_id, Record};
use serde::{Deserialize, Serialize};

/// Элемент справочника для выпадающих списков `{ id, name }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookupItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
}

impl LookupItem {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    pub fn to_record(&self) -> Record {
        Record::from_serialize(self)
    }
}

/// Название элемента по id, пустая строка если не найден
pub fn lookup_name<'a>(items: &'a [LookupItem], id: &str) -> &'a str {
    items
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.name.as_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_name() {
        let items = vec![LookupItem::new("1", "Cash"), LookupItem::new("2", "Yape")];
        assert_eq!(lookup_name(&items, "2"), "Yape");
        assert_eq!(lookup_name(&items, "9"), "");
        assert_eq!(items[0].to_record().text("name"), Some("Cash".to_string()));
    }

    #[test]
    fn test_numeric_ids_from_backend() {
        let brands: Vec<LookupItem> =
            serde_json::from_str(r#"[{"id": 3, "name": "Bosch"}, {"id": "4", "name": "Mann"}]"#).unwrap();
        assert_eq!(brands[0].id, "3");
        assert_eq!(lookup_name(&brands, "4"), "Mann");
    }
}
