//! Привязка полей формы к состоянию.
//!
//! Поля не знают, где живут их значения: они работают через узкий интерфейс
//! `FormBinding` (прочитать поле, записать поле). Адаптеры - простое
//! состояние на сигнале для одной формы и глобальное хранилище форм
//! из `AppGlobalContext`.

use std::collections::HashMap;
use std::sync::Arc;

use leptos::prelude::*;
use serde_json::Value;

use crate::layout::global_context::AppGlobalContext;

pub trait FormBinding {
    fn get_field(&self, field: &str) -> Option<Value>;
    fn set_field(&self, field: &str, value: Value);
}

/// Хэндл для передачи привязки в компоненты полей.
pub type FormBindingHandle = Arc<dyn FormBinding + Send + Sync>;

/// Состояние одной формы: плоская карта "поле - значение" на сигнале.
/// Чтение трекается, поэтому поля перерисовываются при записи.
#[derive(Clone, Copy)]
pub struct SignalFormState {
    fields: RwSignal<HashMap<String, Value>>,
}

impl SignalFormState {
    pub fn new() -> Self {
        Self {
            fields: RwSignal::new(HashMap::new()),
        }
    }

    pub fn handle(&self) -> FormBindingHandle {
        Arc::new(*self)
    }
}

impl Default for SignalFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl FormBinding for SignalFormState {
    fn get_field(&self, field: &str) -> Option<Value> {
        self.fields.with(|fields| fields.get(field).cloned())
    }

    fn set_field(&self, field: &str, value: Value) {
        self.fields.update(|fields| {
            fields.insert(field.to_string(), value);
        });
    }
}

/// Привязка к глобальному хранилищу форм: поля одной формы лежат объектом
/// под её ключом в `AppGlobalContext::form_states` и переживают уход со
/// страницы.
#[derive(Clone)]
pub struct GlobalFormState {
    ctx: AppGlobalContext,
    form_key: String,
}

impl GlobalFormState {
    pub fn new(ctx: AppGlobalContext, form_key: impl Into<String>) -> Self {
        Self {
            ctx,
            form_key: form_key.into(),
        }
    }

    pub fn handle(self) -> FormBindingHandle {
        Arc::new(self)
    }
}

impl FormBinding for GlobalFormState {
    fn get_field(&self, field: &str) -> Option<Value> {
        self.ctx
            .form_field(&self.form_key, field)
    }

    fn set_field(&self, field: &str, value: Value) {
        self.ctx.set_form_field(&self.form_key, field, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_signal_form_state_roundtrip() {
        let state = SignalFormState::new();
        assert_eq!(state.get_field("currency"), None);

        state.set_field("currency", json!(["RUB", "USD"]));
        assert_eq!(state.get_field("currency"), Some(json!(["RUB", "USD"])));

        state.set_field("currency", json!([]));
        assert_eq!(state.get_field("currency"), Some(json!([])));
    }

    #[test]
    fn test_signal_form_state_keeps_other_fields() {
        let state = SignalFormState::new();
        state.set_field("name", json!("ООО Ромашка"));
        state.set_field("year", json!(2025));

        state.set_field("year", json!(2026));

        assert_eq!(state.get_field("name"), Some(json!("ООО Ромашка")));
        assert_eq!(state.get_field("year"), Some(json!(2026)));
    }

    #[test]
    fn test_global_form_state_is_namespaced_by_form() {
        let ctx = AppGlobalContext::new();
        let filters = GlobalFormState::new(ctx, "balance-filters");
        let report = GlobalFormState::new(ctx, "report-settings");

        filters.set_field("accounts", json!([1, 2]));
        report.set_field("accounts", json!([3]));

        assert_eq!(filters.get_field("accounts"), Some(json!([1, 2])));
        assert_eq!(report.get_field("accounts"), Some(json!([3])));
    }

    #[test]
    fn test_binding_handle_is_object_safe() {
        let state = SignalFormState::new();
        let handle: FormBindingHandle = state.handle();

        handle.set_field("email", json!("user@example.com"));
        assert_eq!(handle.get_field("email"), Some(json!("user@example.com")));
    }
}
