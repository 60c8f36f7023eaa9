//! Labelled numeric input for one activity quantity.

use crate::state::AppState;
use cfc_core::activity::ActivityField;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ActivityInputProps {
    pub field: ActivityField,
}

/// Number input bound to one field of the shared `InputCollector`.
/// Every edit is coerced immediately; invalid text becomes 0.
#[component]
pub fn ActivityInput(props: ActivityInputProps) -> Element {
    let mut state = use_context::<AppState>();
    let field = props.field;
    let value = state.collector.read().display_value(field);
    let input_id = format!("{}-input", field.key());
    let icon = field.icon();
    let label_text = field.label();
    let placeholder = field.placeholder();

    let on_input = move |evt: Event<FormData>| {
        state.set_field(field, &evt.value());
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            label {
                r#for: "{input_id}",
                style: "font-size: 16px; font-weight: 600; color: #1B3A2A;",
                span { style: "margin-right: 8px;", "{icon}" }
                "{label_text}"
            }
            input {
                id: "{input_id}",
                r#type: "number",
                min: "0",
                step: "any",
                placeholder,
                value: "{value}",
                style: "font-size: 16px; padding: 10px 12px; border: 1px solid #C8D6CC; border-radius: 6px;",
                oninput: on_input,
            }
        }
    }
}
