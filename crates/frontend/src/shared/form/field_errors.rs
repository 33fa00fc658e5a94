//! Ошибки валидации по полям формы.
//!
//! Бэкенд отвечает 422 с картой `errors: {"поле.подполе": ["сообщение", ...]}`.
//! Ключи нормализуются (точки меняются на дефисы - так же именуются слоты
//! под полями), в слот попадает только первое сообщение, а перед применением
//! нового ответа все старые слоты очищаются.

use std::collections::HashMap;

use contracts::common::ValidationErrorResponse;
use leptos::prelude::*;

/// "account.currency_code" -> "account-currency_code"
pub fn normalize_field_key(field: &str) -> String {
    field.replace('.', "-")
}

/// Карта "слот - первое сообщение" из ответа валидации.
pub fn map_validation_errors(response: &ValidationErrorResponse) -> HashMap<String, String> {
    response
        .errors
        .iter()
        .filter_map(|(field, messages)| {
            messages
                .first()
                .map(|first| (normalize_field_key(field), first.clone()))
        })
        .collect()
}

/// Слоты ошибок одной формы. Копируемый, как остальные сервисы на сигналах;
/// страница создаёт свой экземпляр рядом с формой.
#[derive(Clone, Copy)]
pub struct FieldErrors {
    slots: RwSignal<HashMap<String, String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self {
            slots: RwSignal::new(HashMap::new()),
        }
    }

    /// Применить ответ 422: старые слоты очищаются целиком, затем
    /// записываются новые сообщения.
    pub fn apply(&self, response: &ValidationErrorResponse) {
        self.slots.set(map_validation_errors(response));
    }

    pub fn clear(&self) {
        self.slots.set(HashMap::new());
    }

    /// Сообщение слота; чтение трекается, спаны с ошибками перерисуются сами.
    pub fn message(&self, slot: &str) -> Option<String> {
        self.slots.with(|slots| slots.get(slot).cloned())
    }

    pub fn is_empty(&self) -> bool {
        self.slots.with(|slots| slots.is_empty())
    }
}

impl Default for FieldErrors {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(pairs: &[(&str, &[&str])]) -> ValidationErrorResponse {
        ValidationErrorResponse {
            errors: pairs
                .iter()
                .map(|(field, messages)| {
                    (
                        field.to_string(),
                        messages.iter().map(|m| m.to_string()).collect(),
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_normalize_replaces_dots_with_dashes() {
        assert_eq!(normalize_field_key("field.sub"), "field-sub");
        assert_eq!(normalize_field_key("account.bank.bic"), "account-bank-bic");
        assert_eq!(normalize_field_key("username"), "username");
    }

    #[test]
    fn test_only_first_message_lands_in_slot() {
        let mapped = map_validation_errors(&response(&[(
            "field.sub",
            &["message1", "message2"],
        )]));
        assert_eq!(mapped.len(), 1);
        assert_eq!(mapped.get("field-sub").map(String::as_str), Some("message1"));
    }

    #[test]
    fn test_field_without_messages_gets_no_slot() {
        let mapped = map_validation_errors(&response(&[("email", &[])]));
        assert!(mapped.is_empty());
    }

    #[test]
    fn test_apply_clears_previous_slots() {
        let errors = FieldErrors::new();
        errors.apply(&response(&[("username", &["Обязательное поле"])]));
        assert_eq!(
            errors.message("username"),
            Some("Обязательное поле".to_string())
        );

        errors.apply(&response(&[("password", &["Слишком короткий пароль"])]));
        assert_eq!(errors.message("username"), None);
        assert_eq!(
            errors.message("password"),
            Some("Слишком короткий пароль".to_string())
        );
    }

    #[test]
    fn test_clear_empties_all_slots() {
        let errors = FieldErrors::new();
        errors.apply(&response(&[("email", &["Некорректный адрес"])]));
        errors.clear();
        assert!(errors.is_empty());
        assert_eq!(errors.message("email"), None);
    }
}
