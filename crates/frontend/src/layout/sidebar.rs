//! Боковая навигация: ссылки на разделы, сгруппированные по смыслу.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{
    ACCOUNT_BALANCES, BANK_ACCOUNTS, BUILDINGS, CREDITS, DASHBOARD, LAND_PARCELS, LOANS, VEHICLES,
};
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    label: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            label: "Финансы",
            items: vec![
                (BANK_ACCOUNTS, "Банковские счета", "bank-accounts"),
                (ACCOUNT_BALANCES, "Остатки по счетам", "balances"),
                (LOANS, "Займы выданные", "loans"),
                (CREDITS, "Кредиты полученные", "credits"),
            ],
        },
        MenuGroup {
            label: "Имущество",
            items: vec![
                (BUILDINGS, "Здания и помещения", "buildings"),
                (VEHICLES, "Транспорт", "vehicles"),
                (LAND_PARCELS, "Земельные участки", "land-parcels"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let groups = get_menu_groups();

    view! {
        <div class="app-sidebar__content">
            <A href=DASHBOARD attr:class="app-sidebar__item">
                <div class="app-sidebar__item-content">
                    {icon("dashboard")}
                    <span>"Сводка"</span>
                </div>
            </A>

            {groups.into_iter().map(|group| {
                view! {
                    <div class="app-sidebar__group">
                        <div class="app-sidebar__group-label">{group.label}</div>
                        {group.items.into_iter().map(|(path, label, icon_name)| {
                            view! {
                                <A href=path attr:class="app-sidebar__item">
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </A>
                            }
                        }).collect_view()}
                    </div>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_paths_are_unique() {
        let mut paths: Vec<&str> = get_menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|(path, _, _)| *path))
            .collect();
        paths.push(DASHBOARD);
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
    }

    #[test]
    fn test_menu_covers_every_section() {
        let paths: Vec<&str> = get_menu_groups()
            .iter()
            .flat_map(|g| g.items.iter().map(|(path, _, _)| *path))
            .collect();
        for expected in [
            BANK_ACCOUNTS,
            ACCOUNT_BALANCES,
            LOANS,
            CREDITS,
            BUILDINGS,
            VEHICLES,
            LAND_PARCELS,
        ] {
            assert!(paths.contains(&expected), "нет пункта меню для {expected}");
        }
    }
}
