//! AsyncSearchSelect: поле ввода с выпадающим списком опций.
//!
//! Владелец формы получает только идентификатор в виде события
//! `{ target: { name, value } }`. Опции либо фильтруются на клиенте,
//! либо приходят снаружи (`on_query` + хук поиска с задержкой).

use contracts::shared::record::Record;
use contracts::shared::search_select::{
    ChangeEvent, Dropdown, SearchSelectConfig, SearchSelectState, NO_OPTIONS_MESSAGE,
};
use leptos::html::Div;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Clone)]
enum DropdownItems {
    Hidden,
    Options(Vec<(String, Record)>),
    NoResults,
}

#[component]
pub fn AsyncSearchSelect(
    /// Опции для выбора
    #[prop(into)]
    options: Signal<Vec<Record>>,
    /// Текущее значение владельца (id или пустая строка)
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<ChangeEvent>,
    config: SearchSelectConfig,
    /// Текст запроса для внешнего источника опций
    #[prop(optional)]
    on_query: Option<Callback<String>>,
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    #[prop(optional, into)]
    loading: MaybeProp<bool>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    disabled: MaybeProp<bool>,
    /// Ошибка валидации владельца формы
    #[prop(optional, into)]
    error: MaybeProp<String>,
) -> impl IntoView {
    let state = RwSignal::new(SearchSelectState::new(config));
    let container = NodeRef::<Div>::new();

    // Синхронизация с внешним значением и пришедшими опциями
    Effect::new(move |_| {
        let current = value.get();
        options.with(|opts| state.update(|s| s.sync_value(&current, opts)));
    });

    let handle = window_event_listener(leptos::ev::mousedown, move |ev| {
        let Some(root) = container.get_untracked() else {
            return;
        };
        let inside = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside && state.with_untracked(|s| s.is_open()) {
            state.update(|s| s.click_outside());
        }
    });
    on_cleanup(move || handle.remove());

    let handle_input = move |text: String| {
        let event = state.try_update(|s| s.input(text.clone())).flatten();
        if let Some(event) = event {
            on_change.run(event);
        }
        if let Some(on_query) = on_query {
            on_query.run(text);
        }
    };

    let handle_select = move |option: Record| {
        if let Some(event) = state.try_update(|s| s.select(&option)) {
            on_change.run(event);
        }
    };

    let handle_clear = move |_| {
        if let Some(event) = state.try_update(|s| s.clear()) {
            on_change.run(event);
        }
        if let Some(on_query) = on_query {
            on_query.run(String::new());
        }
    };

    let dropdown_items = move || {
        options.with(|opts| {
            state.with(|s| match s.dropdown(opts) {
                Dropdown::Hidden => DropdownItems::Hidden,
                Dropdown::NoResults => DropdownItems::NoResults,
                Dropdown::Options(list) => DropdownItems::Options(
                    list.into_iter()
                        .map(|r| (s.config().display_text(r), r.clone()))
                        .collect(),
                ),
            })
        })
    };

    let is_disabled = move || disabled.get().unwrap_or(false);
    let placeholder_text = placeholder.get_untracked().unwrap_or_else(|| "Search...".to_string());

    view! {
        <div class="search-select" node_ref=container>
            {move || label.get().map(|l| view! {
                <label class="search-select__label">
                    {l}
                    {required.then(|| view! { <span class="search-select__required">" *"</span> })}
                </label>
            })}
            <div class="search-select__control">
                <input
                    type="text"
                    class="search-select__input"
                    placeholder=placeholder_text
                    required=required
                    prop:disabled=move || is_disabled()
                    prop:value=move || state.with(|s| s.search_text().to_string())
                    on:input=move |ev| handle_input(event_target_value(&ev))
                    on:focus=move |_| {
                        options.with_untracked(|opts| state.update(|s| s.focus(opts)));
                    }
                />
                {move || (!is_disabled() && !state.with(|s| s.search_text().is_empty())).then(|| view! {
                    <button class="search-select__clear" title="Clear" on:click=handle_clear>
                        "×"
                    </button>
                })}
            </div>
            {move || error.get().map(|e| view! { <div class="search-select__error">{e}</div> })}

            {move || {
                if loading.get().unwrap_or(false) && state.with(|s| s.is_open()) {
                    return view! {
                        <ul class="search-select__dropdown">
                            <li class="search-select__message">"Searching..."</li>
                        </ul>
                    }
                    .into_any();
                }
                match dropdown_items() {
                    DropdownItems::Hidden => ().into_any(),
                    DropdownItems::NoResults => view! {
                        <ul class="search-select__dropdown">
                            <li class="search-select__message">{NO_OPTIONS_MESSAGE}</li>
                        </ul>
                    }
                    .into_any(),
                    DropdownItems::Options(items) => view! {
                        <ul class="search-select__dropdown">
                            {items
                                .into_iter()
                                .map(|(text, option)| {
                                    let option = StoredValue::new(option);
                                    view! {
                                        <li
                                            class="search-select__option"
                                            on:click=move |_| handle_select(option.get_value())
                                        >
                                            {text}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                    .into_any(),
                }
            }}
        </div>
    }
}
