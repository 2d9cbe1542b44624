//! Organization edit/create form, shown inside a modal.
//!
//! Validation runs in `OrgFormState::submit` before `on_save` fires; the
//! parent owns the network call and the `saving` flag.

use leptos::prelude::*;
use records::OrgField;

use crate::components::ui::button::{Button, ButtonVariant};
use crate::components::ui::card::{Card, CardContent, CardHeader, CardTitle};
use crate::components::ui::cn;
use crate::state::org_form::{OrgFormState, Submission, placeholder};

const SECTIONS: [(&str, &[OrgField]); 4] = [
    ("Basic Information", &[OrgField::Name, OrgField::Industry, OrgField::Description]),
    ("Contact Information", &[OrgField::Email, OrgField::PhoneNumber, OrgField::Website]),
    (
        "Address Information",
        &[
            OrgField::AddressLine1,
            OrgField::AddressLine2,
            OrgField::City,
            OrgField::StateProvince,
            OrgField::PostalCode,
            OrgField::Country,
        ],
    ),
    ("Additional Information", &[OrgField::FoundedDate, OrgField::NumberOfEmployees]),
];

fn input_type(field: OrgField) -> &'static str {
    match field {
        OrgField::Email => "email",
        OrgField::FoundedDate => "date",
        OrgField::NumberOfEmployees => "number",
        _ => "text",
    }
}

fn label_text(field: OrgField) -> String {
    match field {
        OrgField::Name | OrgField::Email => format!("{} *", field.label()),
        _ => field.label().to_owned(),
    }
}

#[component]
pub fn OrganizationEditForm(
    form: RwSignal<OrgFormState>,
    #[prop(into)] saving: Signal<bool>,
    on_save: Callback<Submission>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut submission = None;
        form.update(|f| submission = f.submit());
        if let Some(submission) = submission {
            on_save.run(submission);
        }
    };

    view! {
        <form class="org-form" on:submit=on_submit>
            {SECTIONS
                .iter()
                .map(|(title, fields)| {
                    view! {
                        <Card>
                            <CardHeader>
                                <CardTitle>{*title}</CardTitle>
                            </CardHeader>
                            <CardContent class="org-form__grid">
                                {fields.iter().map(|field| view! { <FormField form=form field=*field /> }).collect_view()}
                            </CardContent>
                        </Card>
                    }
                })
                .collect_view()}
            <div class="org-form__actions">
                <Button variant=ButtonVariant::Outline disabled=saving on_click=Callback::new(move |_| on_cancel.run(()))>
                    "✕ Cancel"
                </Button>
                <Button kind="submit" disabled=saving>
                    {move || form.with(|f| f.submit_label(saving.get()))}
                </Button>
            </div>
        </form>
    }
}

#[component]
fn FormField(form: RwSignal<OrgFormState>, field: OrgField) -> impl IntoView {
    let id = field.column();
    let value = move || form.with(|f| f.value(field));
    let error = move || form.with(|f| f.error(field).map(str::to_owned));
    let on_input = move |ev: leptos::ev::Event| {
        let next = event_target_value(&ev);
        form.update(|f| f.set(field, &next));
    };
    let class = move || cn(&["input", if error().is_some() { "input--invalid" } else { "" }]);

    let control = if field == OrgField::Description {
        view! {
            <textarea id=id class=class placeholder=placeholder(field) rows="3" prop:value=value on:input=on_input></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                id=id
                type=input_type(field)
                class=class
                min=(field == OrgField::NumberOfEmployees).then_some("0")
                placeholder=placeholder(field)
                prop:value=value
                on:input=on_input
            />
        }
        .into_any()
    };

    view! {
        <div class=if field == OrgField::Description { "org-form__field org-form__field--wide" } else { "org-form__field" }>
            <label class="label" for=id>{label_text(field)}</label>
            {control}
            {move || error().map(|e| view! { <p class="field-error">{e}</p> })}
        </div>
    }
}
