use dioxus::prelude::*;

use crate::common::style::join_classes;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Solid,
    Outline,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        ButtonVariant::Solid
    }
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Solid => "btn-solid",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    variant: ButtonVariant,
    /// Extra classes appended after the variant classes.
    #[props(default)]
    class: Option<String>,
    #[props(default)]
    disabled: bool,
    #[props(default)]
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let onclick = props.onclick;
    let class = join_classes(&[
        Some("btn"),
        Some(props.variant.class()),
        props.class.as_deref(),
    ]);

    rsx! {
        button {
            class: "{class}",
            disabled: props.disabled,
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            {props.children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn solid_is_the_default_look() {
        fn app() -> Element {
            rsx! {
                Button { "Download PDF" }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"class="btn btn-solid""#));
        assert!(html.contains("Download PDF"));
    }

    #[test]
    fn caller_classes_merge_after_the_variant() {
        fn app() -> Element {
            rsx! {
                Button {
                    variant: ButtonVariant::Outline,
                    class: "btn-cta",
                    "Read a Sample"
                }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"class="btn btn-outline btn-cta""#));
    }

    #[test]
    fn disabled_reaches_the_element() {
        fn app() -> Element {
            rsx! {
                Button { disabled: true, "Unavailable" }
            }
        }
        assert!(render(app).contains("disabled"));
    }
}
