use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Стандартный конверт списочных ответов API.
///
/// Все списочные endpoints возвращают страницу элементов плюс полное
/// количество строк под текущими фильтрами.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total_count: i64,
}

/// Тело ответа 422: ошибки валидации по полям.
///
/// Ключ может быть вложенным ("details.email"); каждому полю соответствует
/// список сообщений, первое — основное.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: HashMap<String, Vec<String>>,
}

/// Элемент выпадающего списка (multi-select и другие селекторы).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionItemDto {
    /// Строка или число — как отдаёт endpoint.
    pub id: serde_json::Value,
    pub name: String,
    #[serde(flatten, default)]
    pub extra: HashMap<String, serde_json::Value>,
}
