//! Contract between the generic table and list endpoints.
//!
//! The exact field names of a list response are not fixed: the table parses
//! bodies through a pluggable adapter. The default adapter reads the standard
//! `Paginated` envelope (`items` + `total_count`); an endpoint with a
//! different shape supplies its own parser.

use std::sync::Arc;

use contracts::common::Paginated;
use serde_json::Value;

/// Одна страница таблицы после разбора ответа.
#[derive(Debug, Clone, PartialEq)]
pub struct TablePage {
    pub rows: Vec<Value>,
    pub total_count: usize,
}

pub type ResponseParser = Arc<dyn Fn(Value) -> Result<TablePage, String> + Send + Sync>;

/// Разбор стандартного конверта `{ items, total_count }`.
pub fn parse_paginated(body: Value) -> Result<TablePage, String> {
    let envelope: Paginated<Value> =
        serde_json::from_value(body).map_err(|e| format!("Unexpected response shape: {}", e))?;
    Ok(TablePage {
        rows: envelope.items,
        total_count: envelope.total_count.max(0) as usize,
    })
}

pub fn default_parser() -> ResponseParser {
    Arc::new(parse_paginated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_paginated_envelope() {
        let body = json!({
            "items": [{"id": "1", "name": "a"}, {"id": "2", "name": "b"}],
            "total_count": 17
        });
        let page = parse_paginated(body).unwrap();
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.total_count, 17);
    }

    #[test]
    fn test_parse_paginated_rejects_missing_fields() {
        let body = json!({"rows": [], "total": 0});
        let result = parse_paginated(body);
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Unexpected response shape"));
    }

    #[test]
    fn test_parse_paginated_clamps_negative_count() {
        let body = json!({"items": [], "total_count": -5});
        let page = parse_paginated(body).unwrap();
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn test_custom_parser_boundary() {
        // нестандартный конверт подключается своим парсером
        let parser: ResponseParser = Arc::new(|body: Value| {
            let rows = body
                .get("data")
                .and_then(Value::as_array)
                .cloned()
                .ok_or_else(|| "Unexpected response shape: no data".to_string())?;
            let total = body.get("count").and_then(Value::as_u64).unwrap_or(0) as usize;
            Ok(TablePage {
                rows,
                total_count: total,
            })
        });

        let page = parser(json!({"data": [{"id": 1}], "count": 1})).unwrap();
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.total_count, 1);
    }
}
