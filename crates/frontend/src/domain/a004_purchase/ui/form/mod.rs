//! Форма регистрации покупки: поставщик, шапка документа, товары.

use crate::domain::a001_product::api::search_products;
use crate::domain::a002_supplier::api::search_suppliers;
use crate::domain::a004_purchase::api::create_purchase;
use crate::shared::components::AsyncSearchSelect;
use crate::shared::hooks::use_debounced_search;
use contracts::domain::a001_product::ProductSearchItem;
use contracts::domain::a002_supplier::Supplier;
use contracts::domain::a004_purchase::{PurchaseDraft, PurchaseLineField, PURCHASE_DOCUMENT_TYPES};
use contracts::shared::search_select::{ChangeEvent, SearchSelectConfig};
use leptos::prelude::*;
use thaw::*;

const SUPPLIER_FIELD: &str = "supplierId";

#[component]
#[allow(non_snake_case)]
pub fn PurchaseForm() -> impl IntoView {
    let draft = RwSignal::new(PurchaseDraft::default());
    let (message, set_message) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let supplier_search = use_debounced_search(|q: String| async move { search_suppliers(&q).await });
    let product_search = use_debounced_search(|q: String| async move { search_products(&q).await });

    let supplier_options = Signal::derive(move || {
        supplier_search
            .state
            .with(|s| s.results().iter().map(Supplier::to_record).collect::<Vec<_>>())
    });
    let supplier_value = Signal::derive(move || draft.with(|d| d.header.supplier_id.clone()));
    let on_supplier_change = Callback::new(move |event: ChangeEvent| {
        if event.target.name == SUPPLIER_FIELD {
            draft.update(|d| d.header.supplier_id = event.target.value);
        }
    });

    let add_product = move |item: ProductSearchItem| {
        draft.update(|d| d.add_product(&item));
        product_search.set_query.run(String::new());
    };

    let update_line = move |index: usize, field: PurchaseLineField, raw: String| {
        draft.update(|d| {
            if let Err(e) = d.update_line(index, field, &raw) {
                log::warn!("purchase: {}", e);
            }
        });
    };

    let remove_line = move |index: usize| {
        draft.update(|d| {
            if let Err(e) = d.remove_line(index) {
                log::warn!("purchase: {}", e);
            }
        });
    };

    let handle_submit = move |_: leptos::ev::MouseEvent| {
        let dto = match draft.with_untracked(|d| d.to_create_dto()) {
            Ok(dto) => dto,
            Err(e) => {
                set_message.set(Some(e.to_string()));
                return;
            }
        };
        set_saving.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match create_purchase(&dto).await {
                Ok(()) => {
                    draft.update(|d| d.reset());
                    set_message.set(Some("Purchase registered".to_string()));
                }
                Err(e) => set_message.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Register purchase"}</h2>
            </div>

            {move || message.get().map(|m| view! { <div class="form__message">{m}</div> })}

            <div class="form__section">
                <AsyncSearchSelect
                    options=supplier_options
                    value=supplier_value
                    on_change=on_supplier_change
                    config=SearchSelectConfig::new(SUPPLIER_FIELD).search_keys(["name", "documentNumber"])
                    on_query=supplier_search.set_query
                    loading=Signal::derive(move || supplier_search.loading())
                    label="Supplier"
                    placeholder="Search supplier..."
                />

                <div class="form__row">
                    <label>"Purchase number"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.header.purchase_number.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.purchase_number = v);
                        }
                    />
                </div>
                <div class="form__row">
                    <label>"Date"</label>
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.header.date.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.date = v);
                        }
                    />
                </div>
                <div class="form__row">
                    <label>"Document type"</label>
                    <select
                        prop:value=move || draft.with(|d| d.header.document_type_id.clone())
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.document_type_id = v);
                        }
                    >
                        <option value="">"Select..."</option>
                        {PURCHASE_DOCUMENT_TYPES
                            .iter()
                            .map(|t| view! { <option value=t.id.clone()>{t.name.clone()}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="form__row">
                    <label>"Document number"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.header.document_number.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.document_number = v);
                        }
                    />
                </div>
            </div>

            <div class="form__section">
                <div class="product-search">
                    <input
                        type="text"
                        class="product-search__input"
                        placeholder="Search product by name, SKU or barcode..."
                        prop:value=move || product_search.query()
                        on:input=move |ev| product_search.set_query.run(event_target_value(&ev))
                    />
                    {move || {
                        if product_search.loading() {
                            return view! { <div class="product-search__status">"Searching..."</div> }.into_any();
                        }
                        if let Some(e) = product_search.error() {
                            return view! { <div class="error">{e}</div> }.into_any();
                        }
                        let results = product_search.results();
                        if results.is_empty() {
                            return ().into_any();
                        }
                        view! {
                            <ul class="product-search__results">
                                {results
                                    .into_iter()
                                    .map(|item| {
                                        let caption = match &item.sku {
                                            Some(sku) => format!("{} ({})", item.name, sku),
                                            None => item.name.clone(),
                                        };
                                        let item = StoredValue::new(item);
                                        view! {
                                            <li
                                                class="product-search__option"
                                                on:click=move |_| add_product(item.get_value())
                                            >
                                                {caption}
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                        .into_any()
                    }}
                </div>

                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Product"</TableHeaderCell>
                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                            <TableHeaderCell>"Purchase price"</TableHeaderCell>
                            <TableHeaderCell>"Sale price"</TableHeaderCell>
                            <TableHeaderCell>"Amount"</TableHeaderCell>
                            <TableHeaderCell>""</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || draft.with(|d| d.lines.clone().into_iter().enumerate().collect::<Vec<_>>())
                            key=|(index, line)| (*index, line.line_id.clone())
                            children=move |(index, line)| {
                                let line_id = line.line_id.clone();
                                let amount = move || {
                                    draft.with(|d| {
                                        d.lines
                                            .iter()
                                            .find(|l| l.line_id == line_id)
                                            .map(|l| format!("{:.2}", l.amount()))
                                            .unwrap_or_default()
                                    })
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{line.name.clone()}</TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                min="0"
                                                value=line.quantity.to_string()
                                                on:input=move |ev| update_line(index, PurchaseLineField::Quantity, event_target_value(&ev))
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                step="0.01"
                                                value=line.purchase_price.to_string()
                                                on:input=move |ev| update_line(index, PurchaseLineField::PurchasePrice, event_target_value(&ev))
                                            />
                                        </TableCell>
                                        <TableCell>
                                            <input
                                                type="number"
                                                step="0.01"
                                                value=line.sale_price.to_string()
                                                on:input=move |ev| update_line(index, PurchaseLineField::SalePrice, event_target_value(&ev))
                                            />
                                        </TableCell>
                                        <TableCell>{amount}</TableCell>
                                        <TableCell>
                                            <Button
                                                size=ButtonSize::Small
                                                appearance=ButtonAppearance::Subtle
                                                on_click=move |_| remove_line(index)
                                            >
                                                "Remove"
                                            </Button>
                                        </TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>

                <div class="form__total">
                    {move || format!("Total: {:.2}", draft.with(|d| d.total()))}
                </div>
            </div>

            <div class="form__actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=saving
                    on_click=handle_submit
                >
                    {move || if saving.get() { "Saving..." } else { "Register purchase" }}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        draft.update(|d| d.reset());
                        set_message.set(None);
                    }
                >
                    "Clear"
                </Button>
            </div>
        </div>
    }
}
