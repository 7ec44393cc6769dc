//! Форма клиента: для RUC вводится компания, для DNI/CEX полное имя

use super::view_model::CustomerDetailsViewModel;
use contracts::shared::form::{DocumentKind, FormMode};
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn CustomerDetails(mode: FormMode, on_saved: Callback<()>, on_cancel: Callback<()>) -> impl IntoView {
    let vm = CustomerDetailsViewModel::new();
    vm.load_if_needed(&mode);

    let handle_cancel = move |_: leptos::ev::MouseEvent| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("All entered data will be lost. Cancel?").ok())
            .unwrap_or(false);
        if confirmed {
            on_cancel.run(());
        }
    };

    // Memo: поле имени пересоздаётся только при смене типа документа
    let is_company = Memo::new(move |_| vm.form.with(|f| f.is_company()));

    let number_placeholder = move || {
        vm.form.with(|f| {
            DocumentKind::parse(&f.document_type)
                .map(DocumentKind::placeholder)
                .unwrap_or("Select a document type first")
        })
    };

    view! {
        <div class="details-container customer-details">
            <div class="details-header">
                <h3>{move || if vm.is_edit_mode() { "Edit customer" } else { "New customer" }}</h3>
            </div>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="document_type">"Document type" <span class="required">" *"</span></label>
                    <select
                        id="document_type"
                        prop:value=move || vm.form.with(|f| f.document_type.clone())
                        on:change=move |ev| {
                            vm.form.update(|f| {
                                f.document_type = event_target_value(&ev);
                                f.document_number.clear();
                            })
                        }
                    >
                        <option value="">"-- Select --"</option>
                        {DocumentKind::ALL
                            .into_iter()
                            .map(|k| view! { <option value=k.code()>{k.code()}</option> })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="document_number">"Document number" <span class="required">" *"</span></label>
                    <input
                        type="text"
                        id="document_number"
                        placeholder=number_placeholder
                        prop:value=move || vm.form.with(|f| f.document_number.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| {
                                f.set_document_number(event_target_value(&ev));
                            })
                        }
                    />
                </div>

                {move || {
                    if is_company.get() {
                        view! {
                            <div class="form-group">
                                <label for="company_name">"Company name" <span class="required">" *"</span></label>
                                <input
                                    type="text"
                                    id="company_name"
                                    prop:value=move || vm.form.with(|f| f.company_name.clone())
                                    on:input=move |ev| vm.form.update(|f| f.company_name = event_target_value(&ev))
                                />
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="form-group">
                                <label for="full_name">"Full name" <span class="required">" *"</span></label>
                                <input
                                    type="text"
                                    id="full_name"
                                    prop:value=move || vm.form.with(|f| f.full_name.clone())
                                    on:input=move |ev| vm.form.update(|f| f.full_name = event_target_value(&ev))
                                />
                            </div>
                        }
                        .into_any()
                    }
                }}

                <div class="form-group">
                    <label for="phone_number">"Phone"</label>
                    <input
                        type="text"
                        id="phone_number"
                        prop:value=move || vm.form.with(|f| f.phone_number.clone())
                        on:input=move |ev| {
                            vm.form.update(|f| {
                                f.set_phone_number(event_target_value(&ev));
                            })
                        }
                    />
                </div>

                <div class="form-group form-group--inline">
                    <input
                        type="checkbox"
                        id="active"
                        prop:checked=move || vm.form.with(|f| f.active)
                        on:change=move |ev| vm.form.update(|f| f.active = event_target_checked(&ev))
                    />
                    <label for="active">"Active"</label>
                </div>
            </div>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=vm.saving
                    on_click=move |_| vm.save_command(on_saved)
                >
                    {move || if vm.is_edit_mode() { "Save" } else { "Create" }}
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=handle_cancel>
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}
