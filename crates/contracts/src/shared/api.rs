use serde::{Deserialize, Serialize};

/// Обёртка ответа REST API: `{ "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Параметры поиска в query string: `?input=..&pageNumber=..&pageSize=..`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub input: String,
    pub page_number: u32,
    pub page_size: u32,
}

impl SearchParams {
    pub fn first_page(input: impl Into<String>, page_size: u32) -> Self {
        Self {
            input: input.into(),
            page_number: 0,
            page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_envelope() {
        let parsed: ApiResponse<Vec<u32>> = serde_json::from_str(r#"{"data":[1,2]}"#).unwrap();
        assert_eq!(parsed.data, vec![1, 2]);
        assert_eq!(parsed.message, None);
    }

    #[test]
    fn test_search_params_camel_case() {
        let json = serde_json::to_value(SearchParams::first_page("lap", 10)).unwrap();
        assert_eq!(json["pageNumber"], 0);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["input"], "lap");
    }
}
