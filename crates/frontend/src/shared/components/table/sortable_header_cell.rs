//! Компонент сортируемой ячейки заголовка таблицы
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_key="name"
//!     sort=Signal::derive(move || state.with(|s| s.sort.clone()))
//!     on_sort=Callback::new(move |key| state.update(|s| s.set_sort(&key)))
//! />
//! ```

use contracts::shared::data_table::SortState;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    /// Текст заголовка
    #[prop(into)]
    label: String,

    /// Поле для сортировки
    #[prop(into)]
    sort_key: String,

    /// Текущая сортировка таблицы
    #[prop(into)]
    sort: Signal<SortState>,

    /// Callback при клике на заголовок
    on_sort: Callback<String>,

    /// Минимальная ширина колонки
    #[prop(optional, default = 100.0)]
    min_width: f64,

    /// Inline-стиль ячейки (ширина колонки)
    #[prop(optional, into)]
    style: MaybeProp<String>,
) -> impl IntoView {
    let key_for_click = sort_key.clone();
    let key_for_class = sort_key.clone();

    view! {
        <TableHeaderCell min_width=min_width attr:style=move || style.get()>
            <div
                class="table__sortable-header"
                style="cursor: pointer; padding-right: 12px;"
                on:click=move |_| on_sort.run(key_for_click.clone())
            >
                {label}
                <span class=move || {
                    if sort.with(|s| s.is_sorted_by(&key_for_class)) {
                        "table__sort-indicator table__sort-indicator--active"
                    } else {
                        "table__sort-indicator"
                    }
                }>
                    {move || sort.with(|s| s.indicator(&sort_key))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
