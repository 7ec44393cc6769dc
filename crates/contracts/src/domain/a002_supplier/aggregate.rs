use crate::shared::error::DraftError;
use crate::shared::form::{accepts_document_input, is_digits, is_valid_email, non_empty, DocumentKind};
use crate::shared::record::{deserialize_id, Record};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Поставщик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Supplier {
    pub fn to_record(&self) -> Record {
        Record::from_serialize(self)
    }
}

/// Данные формы поставщика (создание и редактирование)
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierDto {
    pub id: Option<String>,
    pub name: String,
    pub document_type: String,
    pub document_number: String,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub active: bool,
}

impl Default for SupplierDto {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            document_type: String::new(),
            document_number: String::new(),
            description: String::new(),
            address: String::new(),
            phone: String::new(),
            email: String::new(),
            active: true,
        }
    }
}

impl From<Supplier> for SupplierDto {
    fn from(s: Supplier) -> Self {
        Self {
            id: Some(s.id),
            name: s.name,
            document_type: s.document_type,
            document_number: s.document_number,
            description: s.description.unwrap_or_default(),
            address: s.address.unwrap_or_default(),
            phone: s.phone.unwrap_or_default(),
            email: s.email.unwrap_or_default(),
            active: s.active,
        }
    }
}

impl SupplierDto {
    /// Номер документа принимается только цифрами в пределах длины типа
    pub fn set_document_number(&mut self, raw: String) -> bool {
        if !accepts_document_input(&self.document_type, &raw) {
            return false;
        }
        self.document_number = raw;
        true
    }

    pub fn set_phone(&mut self, raw: String) -> bool {
        if !is_digits(&raw) {
            return false;
        }
        self.phone = raw;
        true
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.name.trim().is_empty() {
            return Err(DraftError::Required("Supplier name"));
        }
        let Some(kind) = DocumentKind::parse(&self.document_type) else {
            return Err(DraftError::Required("Document type"));
        };
        let number = self.document_number.trim();
        if number.is_empty() {
            return Err(DraftError::Required("Document number"));
        }
        kind.check_number(number)?;
        let email = self.email.trim();
        if !email.is_empty() && !is_valid_email(email) {
            return Err(DraftError::InvalidEmail);
        }
        Ok(())
    }

    /// Тело запроса: строки обрезаны, пустые необязательные поля -> `null`
    pub fn to_payload(&self) -> Result<SupplierPayload, DraftError> {
        self.validate()?;
        Ok(SupplierPayload {
            name: self.name.trim().to_string(),
            document_type: self.document_type.clone(),
            document_number: self.document_number.trim().to_string(),
            description: non_empty(&self.description),
            address: non_empty(&self.address),
            phone: non_empty(&self.phone),
            email: non_empty(&self.email),
            active: self.active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierPayload {
    pub name: String,
    pub document_type: String,
    pub document_number: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supplier_record_uses_wire_names() {
        let supplier: Supplier = serde_json::from_str(
            r#"{"id": 1, "name": "Distribuidora XYZ", "documentType": "RUC", "documentNumber": "20481234567", "phone": null}"#,
        )
        .unwrap();
        let record = supplier.to_record();
        assert_eq!(record.text("documentNumber"), Some("20481234567".to_string()));
        assert_eq!(record.text("phone"), None);
        assert_eq!(record.text("active"), Some("true".to_string()));
    }

    fn filled() -> SupplierDto {
        SupplierDto {
            name: "  Distribuidora XYZ ".into(),
            document_type: "RUC".into(),
            document_number: "20481234567".into(),
            ..SupplierDto::default()
        }
    }

    #[test]
    fn test_validation_order() {
        let mut dto = SupplierDto::default();
        assert_eq!(dto.validate(), Err(DraftError::Required("Supplier name")));
        dto.name = "XYZ".into();
        assert_eq!(dto.validate(), Err(DraftError::Required("Document type")));
        dto.document_type = "RUC".into();
        assert_eq!(dto.validate(), Err(DraftError::Required("Document number")));
        dto.document_number = "2048".into();
        assert_eq!(
            dto.validate(),
            Err(DraftError::DocumentLength { kind: "RUC", len: 11 })
        );

        let mut dto = filled();
        dto.email = "ventas@".into();
        assert_eq!(dto.validate(), Err(DraftError::InvalidEmail));
    }

    #[test]
    fn test_input_filters() {
        let mut dto = filled();
        dto.document_type = "DNI".into();
        assert!(!dto.set_document_number("123456789".into()));
        assert!(!dto.set_document_number("12x".into()));
        assert!(dto.set_document_number("12345678".into()));
        assert_eq!(dto.document_number, "12345678");
        assert!(!dto.set_phone("98-765".into()));
        assert!(dto.set_phone("987654321".into()));
    }

    #[test]
    fn test_payload_trims_and_nulls_optional_fields() {
        let mut dto = filled();
        dto.address = "   ".into();
        dto.email = " ventas@xyz.pe ".into();
        let payload = dto.to_payload().unwrap();
        assert_eq!(payload.name, "Distribuidora XYZ");
        assert_eq!(payload.address, None);
        assert_eq!(payload.email.as_deref(), Some("ventas@xyz.pe"));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["documentNumber"], "20481234567");
        assert!(json["phone"].is_null());
    }

    #[test]
    fn test_edit_form_from_entity() {
        let supplier: Supplier = serde_json::from_str(
            r#"{"id": 3, "name": "ACME", "documentType": "DNI", "documentNumber": "45879612", "email": "a@acme.pe", "active": false}"#,
        )
        .unwrap();
        let dto = SupplierDto::from(supplier);
        assert_eq!(dto.id.as_deref(), Some("3"));
        assert_eq!(dto.email, "a@acme.pe");
        assert_eq!(dto.phone, "");
        assert!(!dto.active);
        assert!(dto.validate().is_ok());
    }
}
