//! FilterableTable: поиск по колонкам, сортировка по одному полю, действия
//! над строкой и подпись «Showing N of M records».
//!
//! Коллекция строк принадлежит странице; компонент хранит только своё
//! UI-состояние (`DataTableState`) и ничего не подтверждает сам.

use crate::shared::components::table::SortableHeaderCell;
use crate::shared::config::ui_config;
use contracts::shared::data_table::{ColumnSpec, DataTableState, EmptyState};
use contracts::shared::record::Record;
use leptos::prelude::*;
use thaw::*;

/// Готовое к отрисовке представление (владеет строками)
#[derive(Clone, PartialEq)]
struct RenderedView {
    rows: Vec<Record>,
    empty: Option<EmptyState>,
    footer: Option<String>,
}

/// Полосатые строки включаются явно
const STRIPED_BY_DEFAULT: bool = false;

fn table_class(striped: bool, hoverable: bool) -> String {
    let mut class = String::from("table__data");
    if striped {
        class.push_str(" table--striped");
    }
    if hoverable {
        class.push_str(" table--hoverable");
    }
    class
}

#[component]
pub fn FilterableTable(
    /// Строки таблицы
    #[prop(into)]
    rows: Signal<Vec<Record>>,
    /// Описание колонок
    columns: Vec<ColumnSpec>,
    /// Редактирование: (id, строка)
    #[prop(optional)]
    on_edit: Option<Callback<(String, Record)>>,
    /// Удаление: (id, строка); подтверждение делает владелец
    #[prop(optional)]
    on_delete: Option<Callback<(String, Record)>>,
    #[prop(optional)]
    on_row_click: Option<Callback<Record>>,
    /// Вместо тела таблицы показывается индикатор загрузки
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional, default = true)]
    searchable: bool,
    #[prop(optional, into)]
    search_placeholder: MaybeProp<String>,
    /// Сообщение для пустой исходной коллекции
    #[prop(optional, into)]
    empty_message: MaybeProp<String>,
    /// Колонка действий (при наличии on_edit / on_delete)
    #[prop(optional, default = true)]
    actions: bool,
    #[prop(optional, default = STRIPED_BY_DEFAULT)]
    striped: bool,
    #[prop(optional, default = true)]
    hoverable: bool,
) -> impl IntoView {
    let state = RwSignal::new(DataTableState::default());
    let columns = StoredValue::new(columns);
    let has_actions = actions && (on_edit.is_some() || on_delete.is_some());
    let placeholder = ui_config().table.placeholder.clone();
    let placeholder = StoredValue::new(placeholder);

    let view_memo = Memo::new(move |_| {
        rows.with(|rows| {
            state.with(|s| {
                columns.with_value(|columns| {
                    let view = s.view(rows, columns);
                    RenderedView {
                        empty: view.empty_state(),
                        footer: view.footer(),
                        rows: view.rows.into_iter().cloned().collect(),
                    }
                })
            })
        })
    });

    let sort = Signal::derive(move || state.with(|s| s.sort.clone()));
    let on_sort = Callback::new(move |key: String| {
        let column = columns.with_value(|cols| cols.iter().find(|c| c.key == key).cloned());
        if let Some(column) = column {
            state.update(|s| {
                s.header_click(&column);
            });
        }
    });

    let table_class = table_class(striped, hoverable);

    let empty_text = move |empty: EmptyState| {
        let fallback = ui_config().table.empty_message.clone();
        let configured = empty_message.get().unwrap_or(fallback);
        empty.message(&configured).to_string()
    };

    let column_count = columns.with_value(|c| c.len()) + usize::from(has_actions);

    view! {
        <div class="data-table">
            {searchable.then(|| {
                let placeholder_text = search_placeholder
                    .get_untracked()
                    .unwrap_or_else(|| "Search...".to_string());
                view! {
                    <div class="data-table__search">
                        <input
                            type="text"
                            class="data-table__search-input"
                            placeholder=placeholder_text
                            prop:value=move || state.with(|s| s.search_text.clone())
                            on:input=move |ev| {
                                let text = event_target_value(&ev);
                                state.update(|s| s.set_search_text(text));
                            }
                        />
                    </div>
                }
            })}

            <div class="table-container">
                <Table attr:class=table_class>
                    <TableHeader>
                        <TableRow>
                            {columns.with_value(|cols| {
                                cols.iter()
                                    .map(|column| {
                                        if column.sortable {
                                            view! {
                                                <SortableHeaderCell
                                                    label=column.label.clone()
                                                    sort_key=column.key.clone()
                                                    sort=sort
                                                    on_sort=on_sort
                                                    style=column.header_style()
                                                />
                                            }
                                            .into_any()
                                        } else {
                                            let label = column.label.clone();
                                            let style = column.header_style();
                                            view! {
                                                <TableHeaderCell min_width=100.0 attr:style=style>
                                                    {label}
                                                </TableHeaderCell>
                                            }
                                            .into_any()
                                        }
                                    })
                                    .collect_view()
                            })}
                            {has_actions.then(|| view! { <TableHeaderCell>"Actions"</TableHeaderCell> })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get().unwrap_or(false) {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count.to_string()>
                                            <div class="data-table__loading">"Loading..."</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            let current = view_memo.get();
                            if let Some(empty) = current.empty {
                                return view! {
                                    <TableRow>
                                        <TableCell attr:colspan=column_count.to_string()>
                                            <div class="data-table__empty">{empty_text(empty)}</div>
                                        </TableCell>
                                    </TableRow>
                                }
                                .into_any();
                            }

                            current
                                .rows
                                .into_iter()
                                .map(|row| {
                                    let row_id = row.id().unwrap_or_default();
                                    let row = StoredValue::new(row);
                                    let cells = columns.with_value(|cols| {
                                        placeholder.with_value(|placeholder| {
                                            row.with_value(|r| {
                                                cols.iter()
                                                    .map(|c| c.cell_text_or(r, placeholder))
                                                    .collect::<Vec<_>>()
                                            })
                                        })
                                    });
                                    let edit_id = row_id.clone();
                                    let delete_id = row_id;

                                    view! {
                                        <TableRow
                                            attr:class="table__row"
                                            on:click=move |_| {
                                                if let Some(cb) = on_row_click {
                                                    cb.run(row.get_value());
                                                }
                                            }
                                        >
                                            {cells
                                                .into_iter()
                                                .map(|text| view! {
                                                    <TableCell>
                                                        <TableCellLayout truncate=true>{text}</TableCellLayout>
                                                    </TableCell>
                                                })
                                                .collect_view()}
                                            {has_actions.then(|| view! {
                                                <TableCell>
                                                    <div class="data-table__actions">
                                                        {on_edit.map(|cb| {
                                                            let id = edit_id.clone();
                                                            view! {
                                                                <Button
                                                                    size=ButtonSize::Small
                                                                    on_click=move |ev: leptos::ev::MouseEvent| {
                                                                        ev.stop_propagation();
                                                                        cb.run((id.clone(), row.get_value()));
                                                                    }
                                                                >
                                                                    "Edit"
                                                                </Button>
                                                            }
                                                        })}
                                                        {on_delete.map(|cb| {
                                                            let id = delete_id.clone();
                                                            view! {
                                                                <Button
                                                                    size=ButtonSize::Small
                                                                    appearance=ButtonAppearance::Subtle
                                                                    on_click=move |ev: leptos::ev::MouseEvent| {
                                                                        ev.stop_propagation();
                                                                        cb.run((id.clone(), row.get_value()));
                                                                    }
                                                                >
                                                                    "Delete"
                                                                </Button>
                                                            }
                                                        })}
                                                    </div>
                                                </TableCell>
                                            })}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || {
                if loading.get().unwrap_or(false) {
                    return None;
                }
                view_memo
                    .with(|v| v.footer.clone())
                    .map(|text| view! { <div class="data-table__footer">{text}</div> })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_class_is_not_striped_by_default() {
        assert_eq!(table_class(STRIPED_BY_DEFAULT, true), "table__data table--hoverable");
        assert_eq!(table_class(true, false), "table__data table--striped");
    }
}
