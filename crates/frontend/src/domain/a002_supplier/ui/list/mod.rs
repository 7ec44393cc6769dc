use crate::domain::a002_supplier::api::{delete_supplier, fetch_suppliers};
use crate::domain::a002_supplier::ui::details::SupplierDetails;
use crate::shared::components::FilterableTable;
use contracts::domain::a002_supplier::Supplier;
use contracts::shared::data_table::ColumnSpec;
use contracts::shared::form::FormMode;
use contracts::shared::record::Record;
use leptos::prelude::*;
use thaw::*;

fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("name", "Name").sortable(),
        ColumnSpec::new("documentType", "Document"),
        ColumnSpec::new("documentNumber", "Number").sortable(),
        ColumnSpec::new("phone", "Phone"),
        ColumnSpec::new("email", "Email").sortable(),
        ColumnSpec::new("address", "Address"),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn SupplierList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Supplier>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details = RwSignal::new(None::<FormMode>);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_suppliers().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let rows = Signal::derive(move || items.with(|v| v.iter().map(Supplier::to_record).collect::<Vec<_>>()));

    let on_delete = Callback::new(move |(id, row): (String, Record)| {
        let name = row.text("name").unwrap_or_default();
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete supplier '{}'?", name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_supplier(&id).await {
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
                <h2>{"Suppliers"}</h2>
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
                    <SupplierDetails mode=mode on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                None => view! {
                    <FilterableTable
                        rows=rows
                        columns=columns()
                        loading=loading
                        on_edit=on_edit
                        on_delete=on_delete
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
