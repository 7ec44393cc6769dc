//! Форма регистрации продажи.
//!
//! Товары ищутся локально по загруженному каталогу, клиент ищется на
//! сервере с задержкой ввода или вводится вручную.

use crate::domain::a001_product::api::fetch_products;
use crate::domain::a003_customer::api::search_customers;
use crate::shared::components::AsyncSearchSelect;
use crate::shared::hooks::use_debounced_search;
use contracts::domain::a001_product::Product;
use contracts::domain::a003_customer::Customer;
use contracts::domain::a005_sale::{
    format_total, search_products, SaleDraft, PAYMENT_METHODS, SALE_DOCUMENT_TYPES,
};
use contracts::shared::lookup::LookupItem;
use contracts::shared::search_select::ChangeEvent;
use leptos::prelude::*;
use thaw::*;

const CUSTOMER_FIELD: &str = "customerId";

fn lookup_options(items: &[LookupItem]) -> impl IntoView {
    items
        .iter()
        .map(|item| view! { <option value=item.id.clone()>{item.name.clone()}</option> })
        .collect_view()
}

#[component]
#[allow(non_snake_case)]
pub fn SaleForm() -> impl IntoView {
    let draft = RwSignal::new(SaleDraft::default());
    let (products, set_products) = signal::<Vec<Product>>(Vec::new());
    let (customer_id, set_customer_id) = signal(String::new());
    let (product_query, set_product_query) = signal(String::new());
    let (message, set_message) = signal::<Option<String>>(None);

    wasm_bindgen_futures::spawn_local(async move {
        match fetch_products().await {
            Ok(v) => set_products.set(v),
            Err(e) => set_message.set(Some(e)),
        }
    });

    let customer_search = use_debounced_search(|q: String| async move { search_customers(&q).await });
    let customer_options = Signal::derive(move || {
        customer_search
            .state
            .with(|s| s.results().iter().map(Customer::to_record).collect::<Vec<_>>())
    });

    // Выбор клиента заполняет поля документа
    let on_customer_change = Callback::new(move |event: ChangeEvent| {
        if event.target.name != CUSTOMER_FIELD {
            return;
        }
        let id = event.target.value;
        let customer = customer_search
            .state
            .with_untracked(|s| s.results().iter().find(|c| c.id == id).cloned());
        set_customer_id.set(id);
        if let Some(customer) = customer {
            draft.update(|d| {
                d.header.client_name = if customer.full_name.trim().is_empty() {
                    customer.company_name.clone().unwrap_or_default()
                } else {
                    customer.full_name.clone()
                };
                d.header.client_dni = customer.document_number.clone();
                d.header.client_phone = customer.phone_number.clone().unwrap_or_default();
            });
        }
    });

    let found_products = move || {
        products.with(|all| {
            product_query.with(|q| {
                search_products(all, q)
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    };

    let add_product = move |product: Product| {
        let result = draft.try_update(|d| d.add_product(&product));
        if let Some(Err(e)) = result {
            set_message.set(Some(e.to_string()));
        } else {
            set_message.set(None);
        }
        set_product_query.set(String::new());
    };

    let confirm_client = move |_: leptos::ev::MouseEvent| {
        match draft.with_untracked(|d| d.validate_client()) {
            Ok(()) => set_message.set(Some("Client added".to_string())),
            Err(e) => set_message.set(Some(e.to_string())),
        }
    };

    let handle_submit = move |_: leptos::ev::MouseEvent| {
        if let Err(e) = draft.with_untracked(|d| d.validate()) {
            set_message.set(Some(e.to_string()));
            return;
        }
        let total = draft.with_untracked(|d| format_total(d.total()));
        log::info!("sale registered, total {}", total);
        draft.update(|d| d.reset());
        set_customer_id.set(String::new());
        set_message.set(Some(format!("Sale registered. Total: S/ {}", total)));
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Register sale"}</h2>
            </div>

            {move || message.get().map(|m| view! { <div class="form__message">{m}</div> })}

            <div class="product-search">
                <input
                    type="text"
                    class="product-search__input"
                    placeholder="Search product by name..."
                    prop:value=move || product_query.get()
                    on:input=move |ev| set_product_query.set(event_target_value(&ev))
                />
                {move || {
                    let found = found_products();
                    if found.is_empty() {
                        let typed = product_query.with(|q| q.chars().count() >= 2);
                        return typed.then(|| view! {
                            <div class="product-search__status">"No products found"</div>
                        }.into_any());
                    }
                    Some(view! {
                        <ul class="product-search__results">
                            {found
                                .into_iter()
                                .map(|product| {
                                    let caption = format!(
                                        "{} | stock {} | S/ {}",
                                        product.name,
                                        product.stock,
                                        format_total(product.sale_price)
                                    );
                                    let product = StoredValue::new(product);
                                    view! {
                                        <li
                                            class="product-search__option"
                                            on:click=move |_| add_product(product.get_value())
                                        >
                                            {caption}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }.into_any())
                }}
            </div>

            <div class="form__section">
                <div class="form__row">
                    <label>"Document type"</label>
                    <select
                        prop:value=move || draft.with(|d| d.header.document_type.clone())
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.document_type = v);
                        }
                    >
                        {lookup_options(&SALE_DOCUMENT_TYPES)}
                    </select>
                </div>
                <div class="form__row">
                    <label>"Sale number"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.header.sale_number.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.sale_number = v);
                        }
                    />
                </div>
                <div class="form__row">
                    <label>"Payment method"</label>
                    <select
                        prop:value=move || draft.with(|d| d.header.payment_method.clone())
                        on:change=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.payment_method = v);
                        }
                    >
                        {lookup_options(&PAYMENT_METHODS)}
                    </select>
                </div>
                <div class="form__row">
                    <label>"Date"</label>
                    <input
                        type="date"
                        prop:value=move || draft.with(|d| d.header.sale_date.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.sale_date = v);
                        }
                    />
                </div>
                <div class="form__row">
                    <label>"Seller"</label>
                    <input type="text" readonly=true prop:value=move || draft.with(|d| d.header.user_name.clone()) />
                </div>
            </div>

            <div class="form__section">
                <AsyncSearchSelect
                    options=customer_options
                    value=customer_id
                    on_change=on_customer_change
                    config=Customer::select_config(CUSTOMER_FIELD)
                    on_query=customer_search.set_query
                    loading=Signal::derive(move || customer_search.loading())
                    label="Customer"
                    placeholder="Search customer by name or document..."
                />
                <div class="form__row">
                    <label>"DNI"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.header.client_dni.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.client_dni = v);
                        }
                    />
                </div>
                <div class="form__row">
                    <label>"Name"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.header.client_name.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.client_name = v);
                        }
                    />
                </div>
                <div class="form__row">
                    <label>"Phone"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|d| d.header.client_phone.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            draft.update(|d| d.header.client_phone = v);
                        }
                    />
                </div>
                <Button appearance=ButtonAppearance::Secondary on_click=confirm_client>
                    "Confirm client"
                </Button>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Product"</TableHeaderCell>
                        <TableHeaderCell>"Stock"</TableHeaderCell>
                        <TableHeaderCell>"Quantity"</TableHeaderCell>
                        <TableHeaderCell>"Price"</TableHeaderCell>
                        <TableHeaderCell>"Total"</TableHeaderCell>
                        <TableHeaderCell>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    <For
                        each=move || draft.with(|d| d.lines.clone())
                        key=|line| line.product_id.clone()
                        children=move |line| {
                            let id_for_qty = line.product_id.clone();
                            let id_for_total = line.product_id.clone();
                            let id_for_remove = line.product_id.clone();
                            let total = move || {
                                draft.with(|d| {
                                    d.lines
                                        .iter()
                                        .find(|l| l.product_id == id_for_total)
                                        .map(|l| format_total(l.total()))
                                        .unwrap_or_default()
                                })
                            };
                            view! {
                                <TableRow>
                                    <TableCell>{line.name.clone()}</TableCell>
                                    <TableCell>{line.stock}</TableCell>
                                    <TableCell>
                                        <input
                                            type="number"
                                            min="1"
                                            value=line.quantity.to_string()
                                            on:input=move |ev| {
                                                let raw = event_target_value(&ev);
                                                draft.update(|d| {
                                                    d.set_quantity(&id_for_qty, &raw);
                                                });
                                            }
                                        />
                                    </TableCell>
                                    <TableCell>{format_total(line.sale_price)}</TableCell>
                                    <TableCell>{total}</TableCell>
                                    <TableCell>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| draft.update(|d| d.remove_line(&id_for_remove))
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
                {move || format!("Total: S/ {}", draft.with(|d| format_total(d.total())))}
            </div>

            <div class="form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=handle_submit>
                    "Register sale"
                </Button>
            </div>
        </div>
    }
}
