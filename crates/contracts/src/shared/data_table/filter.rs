use super::column::ColumnSpec;
use crate::shared::record::{value_contains, Record};

/// Фильтрует строки по поисковому запросу.
///
/// Строка проходит, если значение хотя бы одной объявленной колонки содержит
/// запрос (без учёта регистра). Пустой запрос пропускает все строки.
pub fn filter_rows<'a>(rows: &'a [Record], columns: &[ColumnSpec], query: &str) -> Vec<&'a Record> {
    if query.is_empty() {
        return rows.iter().collect();
    }

    let needle = query.to_lowercase();
    rows.iter()
        .filter(|row| row_matches(row, columns, &needle))
        .collect()
}

/// `needle_lower` — запрос в нижнем регистре
pub fn row_matches(row: &Record, columns: &[ColumnSpec], needle_lower: &str) -> bool {
    columns
        .iter()
        .any(|column| value_contains(row.get(&column.key), needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::record::coerce_to_string;

    fn columns() -> Vec<ColumnSpec> {
        vec![
            ColumnSpec::new("name", "Name").sortable(),
            ColumnSpec::new("documentNumber", "Document"),
        ]
    }

    fn rows() -> Vec<Record> {
        vec![
            Record::new().with("id", 1).with("name", "Alpha").with("documentNumber", 20481),
            Record::new().with("id", 2).with("name", "Beta").with("documentNumber", "X-77"),
            Record::new().with("id", 3).with("name", "Gamma").with("email", "alpha@mail.com"),
        ]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let data = rows();
        let result = filter_rows(&data, &columns(), "");
        assert_eq!(result.len(), data.len());
        assert!(result.iter().zip(data.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_case_insensitive_substring() {
        let data = rows();
        let result = filter_rows(&data, &columns(), "AL");
        let ids: Vec<_> = result.iter().filter_map(|r| r.id()).collect();
        // Gamma совпадает только по email, которого нет среди колонок
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_numbers_are_searched_as_text() {
        let data = rows();
        let result = filter_rows(&data, &columns(), "048");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id(), Some("1".to_string()));
    }

    #[test]
    fn test_result_is_subset_and_every_row_matches() {
        let data = rows();
        let cols = columns();
        for query in ["a", "x", "7", "zzz", "ET"] {
            let result = filter_rows(&data, &cols, query);
            let needle = query.to_lowercase();
            assert!(result.len() <= data.len());
            for row in result {
                assert!(data.iter().any(|r| r == row));
                assert!(cols.iter().any(|c| row
                    .get(&c.key)
                    .and_then(coerce_to_string)
                    .map(|s| s.to_lowercase().contains(&needle))
                    .unwrap_or(false)));
            }
        }
    }

    #[test]
    fn test_whitespace_query_is_not_empty() {
        let data = vec![
            Record::new().with("name", "Acme Corp"),
            Record::new().with("name", "Beta"),
        ];
        let result = filter_rows(&data, &columns(), " ");
        assert_eq!(result.len(), 1);
    }
}
