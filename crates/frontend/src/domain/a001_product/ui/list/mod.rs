use crate::domain::a001_product::api::{delete_product, fetch_products};
use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::FilterableTable;
use contracts::domain::a001_product::Product;
use contracts::shared::data_table::{ColumnSpec, CELL_PLACEHOLDER};
use contracts::shared::form::FormMode;
use contracts::shared::record::Record;
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

fn money(value: Option<&Value>, _row: &Record) -> String {
    value
        .and_then(Value::as_f64)
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| CELL_PLACEHOLDER.to_string())
}

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").sortable().width("28%"),
        ColumnSpec::new("sku", "SKU").sortable().width("120px"),
        ColumnSpec::new("barcode", "Barcode"),
        ColumnSpec::new("stock", "Stock").sortable(),
        ColumnSpec::new("purchasePrice", "Purchase price").sortable().render(money),
        ColumnSpec::new("salePrice", "Sale price").sortable().render(money),
        ColumnSpec::new("active", "Status").render(|value, _| {
            match value.and_then(Value::as_bool) {
                Some(false) => "Inactive".to_string(),
                _ => "Active".to_string(),
            }
        }),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Product>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details = RwSignal::new(None::<FormMode>);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_products().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let rows = Signal::derive(move || items.with(|v| v.iter().map(Product::to_record).collect::<Vec<_>>()));

    let on_delete = Callback::new(move |(id, row): (String, Record)| {
        let name = row.text("name").unwrap_or_default();
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete product '{}'?", name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_product(&id).await {
                Ok(()) => fetch(),
                Err(e) => set_error.set(Some(e)),
            }
        });
    });

    let on_edit = Callback::new(move |(id, _row): (String, Record)| {
        details.set(Some(FormMode::Edit(id)));
    });
    let on_saved = Callback::new(move |_: ()| {
        details.set(None);
        fetch();
    });
    let on_cancel = Callback::new(move |_: ()| details.set(None));

    fetch();

    view! {
        <div class="content">
            <div class="header">
                <h2>{"Products"}</h2>
                <div class="header__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| details.set(Some(FormMode::Create))
                    >
                        "New"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| fetch()>
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <div class="error">{e}</div> })}

            {move || match details.get() {
                Some(mode) => view! {
                    <ProductDetails mode=mode on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                None => view! {
                    <FilterableTable
                        rows=rows
                        columns=columns()
                        loading=loading
                        on_edit=on_edit
                        on_delete=on_delete
                        search_placeholder="Search by name, SKU or barcode..."
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
