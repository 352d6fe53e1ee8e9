use dioxus::prelude::*;

use crate::common::style::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct BadgeProps {
    #[props(default)]
    class: Option<String>,
    children: Element,
}

#[component]
pub fn Badge(props: BadgeProps) -> Element {
    let class = join_classes(&[Some("badge"), props.class.as_deref()]);

    rsx! {
        span { class: "{class}", {props.children} }
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
    fn renders_a_badge_span() {
        fn app() -> Element {
            rsx! {
                Badge { "Hardcover" }
            }
        }
        let html = render(app);
        assert!(html.contains(r#"<span class="badge">Hardcover</span>"#));
    }

    #[test]
    fn caller_class_lands_after_the_default() {
        fn app() -> Element {
            rsx! {
                Badge { class: "press-badge", "Press Kit" }
            }
        }
        assert!(render(app).contains(r#"class="badge press-badge""#));
    }
}
