use thiserror::Error;

/// Ошибка удалённого поиска / REST-запроса
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("Failed to send request: {0}")]
    Request(String),

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Ошибка проверки черновика документа или формы справочника
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("At least one product must be added")]
    NoLines,

    #[error("Product '{0}' is already added")]
    AlreadyAdded(String),

    #[error("Line {0} does not exist")]
    NoSuchLine(usize),

    #[error("Client DNI and name are required")]
    ClientIncomplete,

    #[error("{0} is required")]
    Required(&'static str),

    #[error("{kind} must have {len} digits")]
    DocumentLength { kind: &'static str, len: usize },

    #[error("{kind} cannot exceed {max_len} digits")]
    DocumentTooLong { kind: &'static str, max_len: usize },

    #[error("Email format is not valid")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            SearchError::Status(500).to_string(),
            "Server responded with status 500"
        );
        assert_eq!(
            SearchError::Request("offline".into()).to_string(),
            "Failed to send request: offline"
        );
    }
}
