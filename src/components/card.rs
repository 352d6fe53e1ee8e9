use dioxus::prelude::*;

use crate::common::style::join_classes;

#[derive(Clone, PartialEq, Props)]
pub struct CardProps {
    #[props(default)]
    class: Option<String>,
    children: Element,
}

#[component]
pub fn Card(props: CardProps) -> Element {
    let class = join_classes(&[Some("card"), props.class.as_deref()]);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardHeaderProps {
    children: Element,
}

#[component]
pub fn CardHeader(props: CardHeaderProps) -> Element {
    rsx! {
        div { class: "card-header", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardTitleProps {
    #[props(default)]
    class: Option<String>,
    children: Element,
}

#[component]
pub fn CardTitle(props: CardTitleProps) -> Element {
    let class = join_classes(&[Some("card-title"), props.class.as_deref()]);

    rsx! {
        h3 { class: "{class}", {props.children} }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct CardContentProps {
    #[props(default)]
    class: Option<String>,
    children: Element,
}

#[component]
pub fn CardContent(props: CardContentProps) -> Element {
    let class = join_classes(&[Some("card-content"), props.class.as_deref()]);

    rsx! {
        div { class: "{class}", {props.children} }
    }
}
