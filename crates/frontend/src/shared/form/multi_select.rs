//! Поле множественного выбора со строкой поиска.
//!
//! Значение живёт либо во внешних пропсах (контролируемый режим), либо в
//! привязке формы (`FormBinding` из пропса или из контекста), либо в
//! локальном сигнале, если поле ни к чему не привязано. Варианты грузятся
//! с `api_route`; без маршрута поле работает по резервному списку, при
//! ошибке сети пишет предупреждение в лог и тоже подставляет резервный
//! список. Поиск перезагружает варианты только после паузы в наборе.

use std::sync::Arc;

use contracts::common::OptionItemDto;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::shared::api_client::get_json;

use super::binding::{FormBindingHandle, SignalFormState};

/// Пауза тишины после набора, по истечении которой уходит запрос.
pub const SEARCH_DEBOUNCE_MS: u32 = 300;

/// Откуда поле читает и куда пишет выбранные значения.
#[derive(Clone)]
pub enum SelectionSource {
    Props {
        value: Signal<Vec<Value>>,
        on_change: Option<Callback<Vec<Value>>>,
    },
    Form {
        binding: FormBindingHandle,
        field: String,
    },
    Local(RwSignal<Vec<Value>>),
}

impl SelectionSource {
    pub fn read(&self) -> Vec<Value> {
        match self {
            SelectionSource::Props { value, .. } => value.get(),
            SelectionSource::Form { binding, field } => binding
                .get_field(field)
                .and_then(|value| value.as_array().cloned())
                .unwrap_or_default(),
            SelectionSource::Local(signal) => signal.get(),
        }
    }

    pub fn write(&self, selected: Vec<Value>) {
        match self {
            SelectionSource::Props { on_change, .. } => {
                if let Some(on_change) = on_change {
                    on_change.run(selected);
                }
            }
            SelectionSource::Form { binding, field } => {
                binding.set_field(field, Value::Array(selected));
            }
            SelectionSource::Local(signal) => signal.set(selected),
        }
    }
}

/// Явные пропсы сильнее привязки, привязка сильнее локального состояния.
pub fn resolve_source(
    value: Option<Signal<Vec<Value>>>,
    on_change: Option<Callback<Vec<Value>>>,
    field: Option<String>,
    binding: Option<FormBindingHandle>,
) -> SelectionSource {
    if let Some(value) = value {
        return SelectionSource::Props { value, on_change };
    }
    if let (Some(field), Some(binding)) = (field, binding) {
        return SelectionSource::Form { binding, field };
    }
    SelectionSource::Local(RwSignal::new(Vec::new()))
}

/// Без маршрута поле сразу показывает резервный список и не ходит в сеть.
pub fn initial_options(api_route: Option<&str>, fallback: &[OptionItemDto]) -> Vec<OptionItemDto> {
    if api_route.is_none() {
        fallback.to_vec()
    } else {
        Vec::new()
    }
}

/// Результат загрузки: успешный список как есть, ошибка - резервный список
/// плюс текст предупреждения для лога.
pub fn resolve_options(
    result: Result<Vec<OptionItemDto>, String>,
    fallback: &[OptionItemDto],
) -> (Vec<OptionItemDto>, Option<String>) {
    match result {
        Ok(options) => (options, None),
        Err(err) => (
            fallback.to_vec(),
            Some(format!(
                "Не удалось загрузить варианты: {}. Используется резервный список",
                err
            )),
        ),
    }
}

pub fn toggle_selection(selected: &[Value], id: &Value) -> Vec<Value> {
    let mut next: Vec<Value> = selected.to_vec();
    if let Some(pos) = next.iter().position(|existing| existing == id) {
        next.remove(pos);
    } else {
        next.push(id.clone());
    }
    next
}

pub fn filter_options(options: &[OptionItemDto], term: &str) -> Vec<OptionItemDto> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return options.to_vec();
    }
    options
        .iter()
        .filter(|item| item.name.to_lowercase().contains(&term))
        .cloned()
        .collect()
}

pub fn option_key(id: &Value) -> String {
    match id {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Выбранные значения как "1,5,9" для параметра запроса; None - пусто.
pub fn join_selected(selected: &[Value]) -> Option<String> {
    let joined: Vec<String> = selected
        .iter()
        .filter_map(|id| match id {
            Value::Number(number) => Some(number.to_string()),
            Value::String(text) => Some(text.clone()),
            _ => None,
        })
        .collect();
    if joined.is_empty() {
        None
    } else {
        Some(joined.join(","))
    }
}

pub fn options_url(route: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        route.to_string()
    } else {
        format!("{}?search={}", route, urlencoding::encode(term))
    }
}

#[component]
pub fn MultiSelectField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    /// Маршрут списка вариантов; без него поле живёт на резервном списке.
    #[prop(optional, into)]
    api_route: Option<String>,
    #[prop(optional)] fallback_options: Vec<OptionItemDto>,
    /// Контролируемый режим: значение и обработчик приходят снаружи.
    #[prop(optional, into)]
    value: Option<Signal<Vec<Value>>>,
    #[prop(optional, into)] on_change: Option<Callback<Vec<Value>>>,
    /// Имя поля в привязке формы.
    #[prop(optional, into)]
    field: Option<String>,
    #[prop(optional)] binding: Option<FormBindingHandle>,
) -> impl IntoView {
    let binding = binding.or_else(|| {
        use_context::<SignalFormState>().map(|state| state.handle())
    });
    let source = StoredValue::new(resolve_source(value, on_change, field, binding));

    let options = RwSignal::new(initial_options(api_route.as_deref(), &fallback_options));
    let loading = RwSignal::new(false);
    let search = RwSignal::new(String::new());
    let load_generation = StoredValue::new(0u64);
    let route = StoredValue::new(api_route);
    let fallback = StoredValue::new(fallback_options);

    let load_options = move |term: String, delay_ms: u32| {
        let Some(route) = route.get_value() else {
            return;
        };
        let generation = load_generation.get_value() + 1;
        load_generation.set_value(generation);
        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
                if load_generation.get_value() != generation {
                    // за время паузы набрали дальше
                    return;
                }
            }
            loading.set(true);
            let result = get_json::<Vec<OptionItemDto>>(&options_url(&route, &term)).await;
            if load_generation.get_value() != generation {
                return;
            }
            let (resolved, warning) = fallback.with_value(|fallback| resolve_options(result, fallback));
            if let Some(warning) = warning {
                log::warn!("{}", warning);
            }
            options.set(resolved);
            loading.set(false);
        });
    };

    // первый прогон - загрузка на монтировании, дальше - отложенный поиск
    Effect::new(move |prev: Option<()>| {
        let term = search.get();
        if prev.is_none() {
            load_options(term, 0);
        } else {
            load_options(term, SEARCH_DEBOUNCE_MS);
        }
    });

    let visible = move || filter_options(&options.get(), &search.get());
    let toggle = move |id: Value| {
        source.with_value(|source| {
            let next = toggle_selection(&source.read(), &id);
            source.write(next);
        });
    };

    let placeholder = Arc::new(placeholder.unwrap_or_else(|| "Поиск...".to_string()));
    let label_view = label.map(|text| view! { <div class="field-label">{text}</div> });

    view! {
        <div class="multi-select-field">
            {label_view}
            <input
                class="multi-select-search"
                prop:value=move || search.get()
                placeholder={
                    let placeholder = placeholder.clone();
                    move || {
                        if loading.get() {
                            "Загрузка...".to_string()
                        } else {
                            placeholder.as_ref().clone()
                        }
                    }
                }
                on:input=move |ev| search.set(event_target_value(&ev))
            />
            <div class="multi-select-options">
                <Show
                    when=move || !loading.get()
                    fallback=|| view! { <div class="multi-select-loading">"Загрузка вариантов..."</div> }
                >
                    <For
                        each=visible
                        key=|item| option_key(&item.id)
                        children=move |item: OptionItemDto| {
                            let id = item.id.clone();
                            let checked = {
                                let id = id.clone();
                                move || source.with_value(|source| source.read()).contains(&id)
                            };
                            view! {
                                <label class="multi-select-option">
                                    <input
                                        type="checkbox"
                                        prop:checked=checked
                                        on:change=move |_| toggle(id.clone())
                                    />
                                    <span>{item.name.clone()}</span>
                                </label>
                            }
                        }
                    />
                    <Show when=move || visible().is_empty()>
                        <div class="multi-select-empty">"Ничего не найдено"</div>
                    </Show>
                </Show>
            </div>
            <div class="multi-select-summary">
                {move || format!("Выбрано: {}", source.with_value(|source| source.read()).len())}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn option(id: serde_json::Value, name: &str) -> OptionItemDto {
        OptionItemDto {
            id,
            name: name.to_string(),
            extra: Default::default(),
        }
    }

    fn fallback() -> Vec<OptionItemDto> {
        vec![option(json!("RUB"), "Рубль"), option(json!("USD"), "Доллар")]
    }

    #[test]
    fn test_no_route_renders_fallback_without_fetch() {
        let initial = initial_options(None, &fallback());
        assert_eq!(initial.len(), 2);
        assert_eq!(initial[0].name, "Рубль");
    }

    #[test]
    fn test_route_starts_with_empty_options() {
        assert!(initial_options(Some("/api/currencies/options"), &fallback()).is_empty());
    }

    #[test]
    fn test_failed_fetch_substitutes_fallback_and_warns() {
        let (resolved, warning) =
            resolve_options(Err("Request failed: 500".to_string()), &fallback());
        assert_eq!(resolved.len(), 2);
        assert_eq!(resolved[1].name, "Доллар");
        let warning = warning.unwrap();
        assert!(warning.contains("Request failed: 500"));
        assert!(warning.contains("резервный список"));
    }

    #[test]
    fn test_successful_fetch_replaces_fallback() {
        let fetched = vec![option(json!("EUR"), "Евро")];
        let (resolved, warning) = resolve_options(Ok(fetched), &fallback());
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].name, "Евро");
        assert!(warning.is_none());
    }

    #[test]
    fn test_toggle_adds_and_removes() {
        let selected = vec![json!(1)];
        let with_two = toggle_selection(&selected, &json!(2));
        assert_eq!(with_two, vec![json!(1), json!(2)]);

        let without_first = toggle_selection(&with_two, &json!(1));
        assert_eq!(without_first, vec![json!(2)]);
    }

    #[test]
    fn test_filter_is_case_insensitive_and_keeps_all_on_empty_term() {
        let options = fallback();
        assert_eq!(filter_options(&options, "").len(), 2);
        assert_eq!(filter_options(&options, "  ").len(), 2);

        let matched = filter_options(&options, "дол");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Доллар");

        assert!(filter_options(&options, "тенге").is_empty());
    }

    #[test]
    fn test_join_selected_mixes_numbers_and_strings() {
        assert_eq!(
            join_selected(&[json!(1), json!("RUB"), json!(9)]),
            Some("1,RUB,9".to_string())
        );
        assert_eq!(join_selected(&[]), None);
        assert_eq!(join_selected(&[json!({"obj": 1})]), None);
    }

    #[test]
    fn test_options_url_appends_encoded_search() {
        assert_eq!(
            options_url("/api/bank-accounts/options", ""),
            "/api/bank-accounts/options"
        );
        assert_eq!(
            options_url("/api/bank-accounts/options", "основной счёт"),
            "/api/bank-accounts/options?search=%D0%BE%D1%81%D0%BD%D0%BE%D0%B2%D0%BD%D0%BE%D0%B9%20%D1%81%D1%87%D1%91%D1%82"
        );
    }

    #[test]
    fn test_explicit_props_win_over_binding() {
        let state = SignalFormState::new();
        let value: Signal<Vec<Value>> = RwSignal::new(vec![json!(7)]).into();
        let source = resolve_source(
            Some(value),
            None,
            Some("accounts".to_string()),
            Some(state.handle()),
        );
        assert!(matches!(source, SelectionSource::Props { .. }));
        assert_eq!(source.read(), vec![json!(7)]);
    }

    #[test]
    fn test_binding_used_when_no_props() {
        let state = SignalFormState::new();
        let source = resolve_source(None, None, Some("accounts".to_string()), Some(state.handle()));
        assert!(matches!(source, SelectionSource::Form { .. }));

        source.write(vec![json!(1), json!(2)]);
        assert_eq!(
            state.handle().get_field("accounts"),
            Some(json!([1, 2]))
        );
        assert_eq!(source.read(), vec![json!(1), json!(2)]);
    }

    #[test]
    fn test_unbound_field_keeps_local_state() {
        let source = resolve_source(None, None, None, None);
        assert!(matches!(source, SelectionSource::Local(_)));
        assert!(source.read().is_empty());

        source.write(vec![json!("a")]);
        assert_eq!(source.read(), vec![json!("a")]);
    }
}
