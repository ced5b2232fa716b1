//! Schema-driven form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders any `FormSchema` and runs `FormState` validation on submit. Only
//! a fully valid value map reaches `on_submit`; invalid submits leave their
//! messages under the offending fields until those fields are edited.

use crudview::form::submit_label;
use crudview::{FieldKind, FieldSchema, FormData, FormSchema, FormState};
use leptos::prelude::*;

#[component]
pub fn DynamicForm(
    schema: FormSchema,
    #[prop(optional)] initial: Option<FormData>,
    on_submit: Callback<FormData>,
    #[prop(into, default = Signal::stored(false))] loading: Signal<bool>,
    /// Render without the surrounding card.
    #[prop(optional)]
    bare: bool,
) -> impl IntoView {
    let state = RwSignal::new(FormState::new(&schema.fields, initial.as_ref()));
    let schema = StoredValue::new(schema);

    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        let result = schema.with_value(|s| {
            let mut outcome = None;
            state.update(|form| outcome = Some(form.submit(&s.fields)));
            outcome
        });
        if let Some(Ok(data)) = result {
            on_submit.run(data);
        }
    };

    let fields = schema.with_value(|s| s.fields.iter().cloned().map(|f| field_view(f, state)).collect_view());
    let submit_text = schema.with_value(|s| s.submit_text.clone());
    let title = schema.with_value(|s| s.title.clone());

    let form = view! {
        <form class="dynamic-form" on:submit=on_form_submit novalidate=true>
            {fields}
            <button class="btn btn--primary btn--block" type="submit" disabled=move || loading.get()>
                {move || submit_label(&submit_text, loading.get()).to_owned()}
            </button>
        </form>
    };

    if bare {
        return form.into_any();
    }
    view! {
        <div class="card">
            <div class="card__header">
                <h2 class="card__title">{title}</h2>
            </div>
            <div class="card__content">{form}</div>
        </div>
    }
    .into_any()
}

fn field_view(field: FieldSchema, state: RwSignal<FormState>) -> impl IntoView {
    let name = StoredValue::new(field.name.clone());
    let id = format!("field-{}", field.name);
    let error = move || name.with_value(|n| state.with(|f| f.error(n).map(str::to_owned)));
    let text = move || name.with_value(|n| state.with(|f| f.value(n).map(|v| v.as_text().into_owned()).unwrap_or_default()));
    let set_text = move |value: String| name.with_value(|n| state.update(|f| f.set_value(n, value)));

    let label = view! {
        <label class="dynamic-form__label" for=id.clone()>
            {field.label.clone()}
            {field.required.then(|| view! { <span class="dynamic-form__required">"*"</span> })}
        </label>
    };
    let placeholder = field.placeholder.clone().unwrap_or_default();

    let control = match field.kind {
        FieldKind::LongText => view! {
            <textarea
                id=id.clone()
                class="input input--area"
                class:input--invalid=move || error().is_some()
                placeholder=placeholder
                prop:value=text
                on:input=move |ev| set_text(event_target_value(&ev))
            ></textarea>
        }
        .into_any(),
        FieldKind::SingleSelect => {
            let options = field
                .options
                .iter()
                .map(|o| {
                    let value = o.value.clone();
                    let selected_value = value.clone();
                    view! {
                        <option value=value selected=move || text() == selected_value>{o.label.clone()}</option>
                    }
                })
                .collect_view();
            let prompt = if placeholder.is_empty() { format!("Select {}", field.label.to_lowercase()) } else { placeholder };
            view! {
                <select
                    id=id.clone()
                    class="input"
                    class:input--invalid=move || error().is_some()
                    on:change=move |ev| set_text(event_target_value(&ev))
                >
                    <option value="" selected=move || text().is_empty()>{prompt}</option>
                    {options}
                </select>
            }
            .into_any()
        }
        FieldKind::Checkbox => {
            let checked = move || name.with_value(|n| state.with(|f| f.value(n).is_some_and(|v| v.as_flag())));
            return view! {
                <div class="dynamic-form__field dynamic-form__field--inline">
                    <input
                        id=id
                        type="checkbox"
                        prop:checked=checked
                        on:change=move |ev| {
                            let on = event_target_checked(&ev);
                            name.with_value(|n| state.update(|f| f.set_value(n, on)));
                        }
                    />
                    {label}
                    {move || error().map(|e| view! { <p class="dynamic-form__error">{e}</p> })}
                </div>
            }
            .into_any();
        }
        kind => view! {
            <input
                id=id.clone()
                class="input"
                class:input--invalid=move || error().is_some()
                type=kind.input_type()
                placeholder=placeholder
                prop:value=text
                on:input=move |ev| set_text(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="dynamic-form__field">
            {label}
            {control}
            {move || error().map(|e| view! { <p class="dynamic-form__error">{e}</p> })}
        </div>
    }
    .into_any()
}
