//! Состояние запроса списочной таблицы.
//!
//! Чистая машина состояний: страница, размер страницы, сортировка, фильтры.
//! Компонент таблицы держит её в сигнале; каждая мутация приводит к новому
//! запросу на сервер.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Параметры текущего запроса таблицы.
///
/// `page` всегда >= 1. `sort_field` и `sort_direction` заполняются парой.
/// Фильтры хранятся упорядоченно, чтобы строка запроса была детерминированной.
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub page: usize,
    pub page_size: usize,
    pub sort_field: Option<String>,
    pub sort_direction: Option<SortDirection>,
    pub filters: Vec<(String, String)>,
}

pub const DEFAULT_PAGE_SIZE: usize = 50;

impl TableQuery {
    /// Начальное состояние: первая страница, первый из предложенных размеров.
    pub fn new(page_size_options: &[usize]) -> Self {
        Self {
            page: 1,
            page_size: page_size_options.first().copied().unwrap_or(DEFAULT_PAGE_SIZE),
            sort_field: None,
            sort_direction: None,
            filters: Vec::new(),
        }
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Смена размера страницы всегда возвращает на первую страницу,
    /// иначе можно запросить несуществующую.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    /// Клик по сортируемому заголовку: повторный клик по активному полю
    /// переключает направление, клик по новому полю сортирует по нему asc.
    pub fn toggle_sort(&mut self, field: &str) {
        if self.sort_field.as_deref() == Some(field) {
            let current = self.sort_direction.unwrap_or(SortDirection::Asc);
            self.sort_direction = Some(current.toggled());
        } else {
            self.sort_field = Some(field.to_string());
            self.sort_direction = Some(SortDirection::Asc);
        }
    }

    /// Пустое значение снимает фильтр, непустое - ставит или заменяет.
    pub fn set_filter(&mut self, key: &str, value: &str) {
        if value.is_empty() {
            self.filters.retain(|(k, _)| k != key);
            return;
        }
        match self.filters.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value.to_string(),
            None => self.filters.push((key.to_string(), value.to_string())),
        }
    }

    pub fn filter_value(&self, key: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Строка запроса по текущему состоянию.
    pub fn query_string(&self) -> String {
        self.query_string_with(&[])
    }

    /// То же, плюс фиксированные параметры страницы-владельца
    /// (например `account_id` или `year`).
    pub fn query_string_with(&self, extra: &[(String, String)]) -> String {
        let mut parts: Vec<String> = Vec::new();
        parts.push(format!("page={}", self.page));
        parts.push(format!("page_size={}", self.page_size));

        if let Some(field) = &self.sort_field {
            parts.push(format!("sort_field={}", urlencoding::encode(field)));
            let direction = self.sort_direction.unwrap_or(SortDirection::Asc);
            parts.push(format!("sort_direction={}", direction.as_str()));
        }

        for (key, value) in &self.filters {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }

        for (key, value) in extra {
            parts.push(format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            ));
        }

        parts.join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_seeds_first_option_and_page_1() {
        let query = TableQuery::new(&[25, 50, 100]);
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.sort_field, None);
        assert!(query.filters.is_empty());
    }

    #[test]
    fn test_new_with_empty_options_uses_default() {
        let query = TableQuery::new(&[]);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut query = TableQuery::new(&[50, 100]);
        query.set_page(7);
        assert_eq!(query.page, 7);

        query.set_page_size(100);
        assert_eq!(query.page_size, 100);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_set_page_clamps_to_one() {
        let mut query = TableQuery::new(&[50]);
        query.set_page(0);
        assert_eq!(query.page, 1);
    }

    #[test]
    fn test_toggle_sort_cycles_direction_on_same_field() {
        let mut query = TableQuery::new(&[50]);

        query.toggle_sort("name");
        assert_eq!(query.sort_field.as_deref(), Some("name"));
        assert_eq!(query.sort_direction, Some(SortDirection::Asc));

        query.toggle_sort("name");
        assert_eq!(query.sort_direction, Some(SortDirection::Desc));

        query.toggle_sort("name");
        assert_eq!(query.sort_direction, Some(SortDirection::Asc));
    }

    #[test]
    fn test_toggle_sort_new_field_starts_asc() {
        let mut query = TableQuery::new(&[50]);
        query.toggle_sort("name");
        query.toggle_sort("name"); // desc
        query.toggle_sort("balance");
        assert_eq!(query.sort_field.as_deref(), Some("balance"));
        assert_eq!(query.sort_direction, Some(SortDirection::Asc));
    }

    #[test]
    fn test_set_filter_upserts_and_removes() {
        let mut query = TableQuery::new(&[50]);
        query.set_filter("status", "active");
        query.set_filter("bank", "sber");
        query.set_filter("status", "closed");
        assert_eq!(query.filter_value("status"), Some("closed"));
        assert_eq!(query.filter_value("bank"), Some("sber"));

        query.set_filter("bank", "");
        assert_eq!(query.filter_value("bank"), None);
        assert_eq!(query.filters.len(), 1);
    }

    #[test]
    fn test_query_string_reflects_latest_state() {
        let mut query = TableQuery::new(&[50, 100]);
        assert_eq!(query.query_string(), "page=1&page_size=50");

        query.set_page(3);
        query.toggle_sort("opened_at");
        query.set_filter("status", "active");
        assert_eq!(
            query.query_string(),
            "page=3&page_size=50&sort_field=opened_at&sort_direction=asc&status=active"
        );

        // смена размера списка сбрасывает страницу, строка это отражает
        query.set_page_size(100);
        assert_eq!(
            query.query_string(),
            "page=1&page_size=100&sort_field=opened_at&sort_direction=asc&status=active"
        );
    }

    #[test]
    fn test_query_string_encodes_filter_values() {
        let mut query = TableQuery::new(&[50]);
        query.set_filter("name", "ООО Ромашка");
        let qs = query.query_string();
        assert!(qs.contains("name=%D0%9E%D0%9E%D0%9E%20%D0%A0%D0%BE%D0%BC%D0%B0%D1%88%D0%BA%D0%B0"));
        assert!(!qs.contains(' '));
    }

    #[test]
    fn test_query_string_with_extra_params() {
        let mut query = TableQuery::new(&[50]);
        query.set_page(2);
        let extra = vec![("year".to_string(), "2026".to_string())];
        assert_eq!(
            query.query_string_with(&extra),
            "page=2&page_size=50&year=2026"
        );
    }
}
