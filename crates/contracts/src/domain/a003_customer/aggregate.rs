use crate::shared::error::DraftError;
use crate::shared::form::{accepts_document_input, is_digits, non_empty, DocumentKind};
use crate::shared::record::{deserialize_id, Record};
use crate::shared::search_select::SearchSelectConfig;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// Клиент: физическое лицо (`full_name`) или компания (`company_name`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub document_type: String,
    #[serde(default)]
    pub document_number: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

impl Customer {
    pub fn to_record(&self) -> Record {
        Record::from_serialize(self)
    }

    /// Настройка поля выбора клиента: поиск по имени, компании и документу,
    /// компания показывается, если имя не заполнено.
    pub fn select_config(name: &str) -> SearchSelectConfig {
        SearchSelectConfig::new(name)
            .display_key("fullName")
            .fallback_display_key("companyName")
            .search_keys(["fullName", "companyName", "documentNumber"])
    }
}

/// Данные формы клиента. Для RUC заполняется компания, для DNI/CEX имя.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDto {
    pub id: Option<String>,
    pub full_name: String,
    pub company_name: String,
    pub document_type: String,
    pub document_number: String,
    pub phone_number: String,
    pub active: bool,
}

impl Default for CustomerDto {
    fn default() -> Self {
        Self {
            id: None,
            full_name: String::new(),
            company_name: String::new(),
            document_type: String::new(),
            document_number: String::new(),
            phone_number: String::new(),
            active: true,
        }
    }
}

impl From<Customer> for CustomerDto {
    fn from(c: Customer) -> Self {
        Self {
            id: Some(c.id),
            full_name: c.full_name,
            company_name: c.company_name.unwrap_or_default(),
            document_type: c.document_type,
            document_number: c.document_number,
            phone_number: c.phone_number.unwrap_or_default(),
            active: c.active,
        }
    }
}

impl CustomerDto {
    pub fn is_company(&self) -> bool {
        DocumentKind::parse(&self.document_type) == Some(DocumentKind::Ruc)
    }

    pub fn set_document_number(&mut self, raw: String) -> bool {
        if !accepts_document_input(&self.document_type, &raw) {
            return false;
        }
        self.document_number = raw;
        true
    }

    pub fn set_phone_number(&mut self, raw: String) -> bool {
        if !is_digits(&raw) {
            return false;
        }
        self.phone_number = raw;
        true
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let Some(kind) = DocumentKind::parse(&self.document_type) else {
            return Err(DraftError::Required("Document type"));
        };
        match kind {
            DocumentKind::Ruc if self.company_name.trim().is_empty() => {
                return Err(DraftError::Required("Company name"));
            }
            DocumentKind::Dni | DocumentKind::Cex if self.full_name.trim().is_empty() => {
                return Err(DraftError::Required("Full name"));
            }
            _ => {}
        }
        let number = self.document_number.trim();
        if number.is_empty() {
            return Err(DraftError::Required("Document number"));
        }
        kind.check_number(number)
    }

    /// Тело запроса: неиспользуемое для типа документа имя уходит пустым
    pub fn to_payload(&self) -> Result<CustomerPayload, DraftError> {
        self.validate()?;
        let (full_name, company_name) = if self.is_company() {
            (String::new(), self.company_name.trim().to_string())
        } else {
            (self.full_name.trim().to_string(), String::new())
        };
        Ok(CustomerPayload {
            full_name,
            company_name,
            document_type: self.document_type.clone(),
            document_number: self.document_number.trim().to_string(),
            phone_number: non_empty(&self.phone_number),
            active: self.active,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPayload {
    pub full_name: String,
    pub company_name: String,
    pub document_type: String,
    pub document_number: String,
    pub phone_number: Option<String>,
    pub active: bool,
}
