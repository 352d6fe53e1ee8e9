use dioxus::prelude::*;

use crate::common::style::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct TextInputProps {
    /// Forwarded as the `type` attribute.
    #[props(default = String::from("text"))]
    input_type: String,
    #[props(default)]
    placeholder: Option<String>,
    #[props(default)]
    disabled: bool,
    #[props(default)]
    class: Option<String>,
}

#[component]
pub fn TextInput(props: TextInputProps) -> Element {
    let class = join_classes(&[Some("form-input"), props.class.as_deref()]);

    rsx! {
        input {
            class: "{class}",
            r#type: "{props.input_type}",
            placeholder: props.placeholder,
            disabled: props.disabled,
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct TextAreaProps {
    #[props(default)]
    placeholder: Option<String>,
    #[props(default)]
    disabled: bool,
    #[props(default)]
    class: Option<String>,
}

#[component]
pub fn TextArea(props: TextAreaProps) -> Element {
    let class = join_classes(&[Some("form-textarea"), props.class.as_deref()]);

    rsx! {
        textarea {
            class: "{class}",
            placeholder: props.placeholder,
            disabled: props.disabled,
        }
    }
}
