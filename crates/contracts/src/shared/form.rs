//! Общие правила форм справочников: режим формы, типы документов,
//! фильтрация ввода и проверка email.

use crate::shared::error::DraftError;

/// Режим формы справочника
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

impl FormMode {
    pub fn id(&self) -> Option<&str> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(id),
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self, FormMode::Edit(_))
    }
}

/// Тип документа контрагента
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Dni,
    Ruc,
    Cex,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [DocumentKind::Dni, DocumentKind::Ruc, DocumentKind::Cex];

    pub fn code(self) -> &'static str {
        match self {
            DocumentKind::Dni => "DNI",
            DocumentKind::Ruc => "RUC",
            DocumentKind::Cex => "CEX",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.code() == code)
    }

    pub fn max_len(self) -> usize {
        match self {
            DocumentKind::Dni => 8,
            DocumentKind::Ruc => 11,
            DocumentKind::Cex => 20,
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            DocumentKind::Dni => "8 digits",
            DocumentKind::Ruc => "11 digits",
            DocumentKind::Cex => "Up to 20 digits",
        }
    }

    /// DNI и RUC фиксированной длины, CEX не длиннее максимума
    pub fn check_number(self, number: &str) -> Result<(), DraftError> {
        let len = number.chars().count();
        match self {
            DocumentKind::Dni | DocumentKind::Ruc if len != self.max_len() => {
                Err(DraftError::DocumentLength {
                    kind: self.code(),
                    len: self.max_len(),
                })
            }
            DocumentKind::Cex if len > self.max_len() => Err(DraftError::DocumentTooLong {
                kind: self.code(),
                max_len: self.max_len(),
            }),
            _ => Ok(()),
        }
    }
}

pub fn is_digits(raw: &str) -> bool {
    raw.chars().all(|c| c.is_ascii_digit())
}

/// Принимается ли набранный номер документа: только цифры и не длиннее
/// максимума выбранного типа (тип не выбран — длина не ограничена).
pub fn accepts_document_input(document_type: &str, raw: &str) -> bool {
    if !is_digits(raw) {
        return false;
    }
    DocumentKind::parse(document_type)
        .map(|kind| raw.chars().count() <= kind.max_len())
        .unwrap_or(true)
}

/// Упрощённая проверка `local@domain.tld` без пробелов
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Пустая после обрезки строка превращается в `None`
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_number_rules() {
        assert!(DocumentKind::Dni.check_number("45879612").is_ok());
        assert!(DocumentKind::Dni.check_number("4587961").is_err());
        assert!(DocumentKind::Ruc.check_number("20481234567").is_ok());
        assert!(DocumentKind::Ruc.check_number("2048123456").is_err());
        assert!(DocumentKind::Cex.check_number("123").is_ok());
        assert_eq!(
            DocumentKind::Cex.check_number(&"1".repeat(21)).unwrap_err().to_string(),
            "CEX cannot exceed 20 digits"
        );
        assert_eq!(
            DocumentKind::Dni.check_number("1").unwrap_err().to_string(),
            "DNI must have 8 digits"
        );
    }

    #[test]
    fn test_document_input_filter() {
        assert!(accepts_document_input("DNI", "1234"));
        assert!(!accepts_document_input("DNI", "12a4"));
        assert!(!accepts_document_input("DNI", "123456789"));
        assert!(accepts_document_input("", "123456789012"));
        assert!(accepts_document_input("RUC", ""));
    }

    #[test]
    fn test_email() {
        assert!(is_valid_email("ventas@xyz.pe"));
        assert!(!is_valid_email("ventas@xyz"));
        assert!(!is_valid_email("@xyz.pe"));
        assert!(!is_valid_email("ven tas@xyz.pe"));
        assert!(!is_valid_email("a@b@c.pe"));
    }

    #[test]
    fn test_form_mode() {
        assert_eq!(FormMode::Create.id(), None);
        let edit = FormMode::Edit("7".into());
        assert!(edit.is_edit());
        assert_eq!(edit.id(), Some("7"));
    }
}
