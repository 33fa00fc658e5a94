use leptos::prelude::*;
use std::collections::HashMap;

/// Глобальное состояние оболочки: раскрыт ли сайдбар и сохранённые
/// состояния форм. Кладётся в контекст один раз при старте приложения.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    form_states: RwSignal<HashMap<String, serde_json::Value>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            form_states: RwSignal::new(HashMap::new()),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Одно поле формы; чтение трекается, чтобы привязанные поля
    /// перерисовывались.
    pub fn form_field(&self, form_key: &str, field: &str) -> Option<serde_json::Value> {
        self.form_states.with(|states| {
            states
                .get(form_key)
                .and_then(|state| state.get(field))
                .cloned()
        })
    }

    pub fn set_form_field(&self, form_key: &str, field: &str, value: serde_json::Value) {
        self.form_states.update(|states| {
            let state = states
                .entry(form_key.to_string())
                .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
            if let Some(object) = state.as_object_mut() {
                object.insert(field.to_string(), value);
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found in component tree")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_field_roundtrip() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.form_field("filters", "year"), None);

        ctx.set_form_field("filters", "year", json!(2025));
        assert_eq!(ctx.form_field("filters", "year"), Some(json!(2025)));
    }

    #[test]
    fn test_set_form_field_keeps_siblings() {
        let ctx = AppGlobalContext::new();
        ctx.set_form_field("filters", "year", json!(2025));
        ctx.set_form_field("filters", "accounts", json!([1, 2, 3]));

        ctx.set_form_field("filters", "year", json!(2026));

        assert_eq!(ctx.form_field("filters", "year"), Some(json!(2026)));
        assert_eq!(ctx.form_field("filters", "accounts"), Some(json!([1, 2, 3])));
    }

    #[test]
    fn test_forms_do_not_collide() {
        let ctx = AppGlobalContext::new();
        ctx.set_form_field("balances", "accounts", json!([1]));
        ctx.set_form_field("loans", "accounts", json!([2]));

        assert_eq!(ctx.form_field("balances", "accounts"), Some(json!([1])));
        assert_eq!(ctx.form_field("loans", "accounts"), Some(json!([2])));
    }
}
