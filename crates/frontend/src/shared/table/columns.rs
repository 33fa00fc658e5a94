//! Описание колонок универсальной таблицы.
//!
//! Строки приходят сырыми JSON-объектами; колонка знает ключ поля, подпись,
//! сортируемость и необязательный чистый рендер значения.

use std::sync::Arc;

use chrono::NaiveDate;
use serde_json::Value;

use super::number_format::format_money;

pub type CellRender = Arc<dyn Fn(&Value) -> String + Send + Sync>;

#[derive(Clone)]
pub struct ColumnSpec {
    /// Ключ поля в строке ответа.
    pub data: String,
    pub label: String,
    pub sortable: bool,
    /// Чистая функция отображения; без неё значение показывается как есть.
    pub render: Option<CellRender>,
}

impl ColumnSpec {
    pub fn new(data: &str, label: &str) -> Self {
        Self {
            data: data.to_string(),
            label: label.to_string(),
            sortable: false,
            render: None,
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn with_render(
        mut self,
        render: impl Fn(&Value) -> String + Send + Sync + 'static,
    ) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Текст ячейки для данной строки.
    pub fn cell_text(&self, row: &Value) -> String {
        let raw = row.get(self.data.as_str()).unwrap_or(&Value::Null);
        match &self.render {
            Some(render) => render(raw),
            None => display_value(raw),
        }
    }
}

/// Отображение сырого JSON-значения без рендера.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(true) => "да".to_string(),
        Value::Bool(false) => "нет".to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// Рендер денежной колонки: число -> "1 234.56", не-число - как есть.
pub fn money_cell(value: &Value) -> String {
    match value.as_f64() {
        Some(number) => format_money(number),
        None => display_value(value),
    }
}

/// Рендер даты "YYYY-MM-DD" -> "DD.MM.YYYY"; нераспознанное - как есть.
pub fn date_cell(value: &Value) -> String {
    match value.as_str() {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(date) => date.format("%d.%m.%Y").to_string(),
            Err(_) => raw.to_string(),
        },
        None => display_value(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_value_variants() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!("текст")), "текст");
        assert_eq!(display_value(&json!(true)), "да");
        assert_eq!(display_value(&json!(false)), "нет");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(3.5)), "3.5");
    }

    #[test]
    fn test_cell_text_without_render_shows_raw_value() {
        let column = ColumnSpec::new("name", "Название");
        let row = json!({"name": "Основной счёт", "balance": 100.0});
        assert_eq!(column.cell_text(&row), "Основной счёт");
    }

    #[test]
    fn test_cell_text_missing_key_is_empty() {
        let column = ColumnSpec::new("absent", "Нет такого");
        let row = json!({"name": "x"});
        assert_eq!(column.cell_text(&row), "");
    }

    #[test]
    fn test_cell_text_applies_render() {
        let column = ColumnSpec::new("balance", "Остаток").with_render(money_cell);
        let row = json!({"balance": 1234567.891});
        assert_eq!(column.cell_text(&row), "1 234 567.89");
    }

    #[test]
    fn test_money_cell_non_number_passthrough() {
        assert_eq!(money_cell(&json!("n/a")), "n/a");
        assert_eq!(money_cell(&Value::Null), "");
    }

    #[test]
    fn test_date_cell() {
        assert_eq!(date_cell(&json!("2026-08-23")), "23.08.2026");
        assert_eq!(date_cell(&json!("not a date")), "not a date");
        assert_eq!(date_cell(&Value::Null), "");
    }
}
