use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::table::number_format::{
    format_money_with_currency, format_number_int, format_number_with_decimals,
};

/// Как показывать число на карточке.
#[derive(Debug, Clone, PartialEq)]
pub enum ValueFormat {
    Money { currency: String },
    Integer,
    Percent,
}

pub fn format_value(value: f64, format: &ValueFormat) -> String {
    match format {
        ValueFormat::Money { currency } => format_money_with_currency(value, currency),
        ValueFormat::Integer => format_number_int(value),
        ValueFormat::Percent => format!("{}%", format_number_with_decimals(value, 1)),
    }
}

#[component]
pub fn StatCard(
    /// Заголовок над значением
    label: String,
    /// Имя иконки из icon()
    icon_name: String,
    /// Значение; None - ещё грузится
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: ValueFormat,
    /// Изменение к прошлому периоду, в процентах
    #[prop(into, optional)]
    change_percent: Signal<Option<f64>>,
    #[prop(into, optional)] subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let format_clone = format.clone();

    let formatted = move || match value.get() {
        Some(value) => format_value(value, &format_clone),
        None => "—".to_string(),
    };

    let change_view = move || {
        change_percent.get().map(|pct| {
            let (arrow, cls) = if pct > 0.5 {
                ("\u{2191}", "stat-card__change stat-card__change--up")
            } else if pct < -0.5 {
                ("\u{2193}", "stat-card__change stat-card__change--down")
            } else {
                ("", "stat-card__change stat-card__change--flat")
            };
            let text = format!("{}{:.1}%", arrow, pct.abs());
            view! { <span class=cls>{text}</span> }
        })
    };

    let subtitle_view = move || {
        subtitle.get().map(|text| {
            view! { <div class="stat-card__subtitle">{text}</div> }
        })
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">
                {icon(&icon_name)}
            </div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {formatted}
                    {change_view}
                </div>
                {subtitle_view}
            </div>
        </div>
    }
}
