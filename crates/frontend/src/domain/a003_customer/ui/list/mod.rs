use crate::domain::a003_customer::api::{delete_customer, fetch_customers};
use crate::domain::a003_customer::ui::details::CustomerDetails;
use crate::shared::components::FilterableTable;
use contracts::domain::a003_customer::Customer;
use contracts::shared::data_table::{ColumnSpec, CELL_PLACEHOLDER};
use contracts::shared::form::FormMode;
use contracts::shared::record::Record;
use leptos::prelude::*;
use thaw::*;

/// Колонки списка; компания показывается, если имя не заполнено
fn columns() -> Vec<ColumnSpec> {
    vec![
        ColumnSpec::new("fullName", "Customer").sortable().render(|_, row| {
            row.text("fullName")
                .filter(|s| !s.trim().is_empty())
                .or_else(|| row.text("companyName"))
                .unwrap_or_else(|| CELL_PLACEHOLDER.to_string())
        }),
        ColumnSpec::new("documentType", "Document"),
        ColumnSpec::new("documentNumber", "Number").sortable(),
        ColumnSpec::new("phoneNumber", "Phone"),
        ColumnSpec::new("email", "Email").sortable(),
    ]
}

#[component]
#[allow(non_snake_case)]
pub fn CustomerList() -> impl IntoView {
    let (items, set_items) = signal::<Vec<Customer>>(Vec::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let details = RwSignal::new(None::<FormMode>);

    let fetch = move || {
        set_loading.set(true);
        wasm_bindgen_futures::spawn_local(async move {
            match fetch_customers().await {
                Ok(v) => {
                    set_items.set(v);
                    set_error.set(None);
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_loading.set(false);
        });
    };

    let rows = Signal::derive(move || items.with(|v| v.iter().map(Customer::to_record).collect::<Vec<_>>()));

    let on_delete = Callback::new(move |(id, row): (String, Record)| {
        let name = row.text("fullName").unwrap_or_default();
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message(&format!("Delete customer '{}'?", name)).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }
        wasm_bindgen_futures::spawn_local(async move {
            match delete_customer(&id).await {
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
                <h2>{"Customers"}</h2>
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
                    <CustomerDetails mode=mode on_saved=on_saved on_cancel=on_cancel />
                }
                .into_any(),
                None => view! {
                    <FilterableTable
                        rows=rows
                        columns=columns()
                        loading=loading
                        on_edit=on_edit
                        on_delete=on_delete
                        empty_message="No customers registered yet"
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
