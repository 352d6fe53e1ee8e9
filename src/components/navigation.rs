use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::Route;
use crate::common::content::{BOOK_TITLE, NAV_LINKS, SECTION_HOME};

#[component]
pub fn NavBarInner() -> Element {
    rsx! {
        header { class: "site-header",
            div { class: "container",
                div { class: "nav-container",
                    a { class: "brand-link", href: "#{SECTION_HOME}", "{BOOK_TITLE}" }
                    nav { class: "nav-links",
                        for link in NAV_LINKS {
                            a { class: "nav-link", href: "#{link.target}", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
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
    fn brand_link_jumps_to_the_hero_anchor() {
        let html = render(NavBarInner);
        assert!(html.contains(r#"class="brand-link""#));
        assert!(html.contains(r##"href="#home""##));
    }

    #[test]
    fn header_menu_lists_every_nav_link_in_order() {
        let html = render(NavBarInner);
        let mut last = 0;
        for link in NAV_LINKS {
            let needle = format!(r##"href="#{}""##, link.target);
            let at = html[last..]
                .find(&needle)
                .unwrap_or_else(|| panic!("missing or out-of-order link {}", link.label));
            last += at + needle.len();
            assert!(html.contains(link.label));
        }
    }
}
