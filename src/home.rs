use dioxus::prelude::*;

use crate::common::assets::{
    AUTHOR_PORTRAIT_URL, BOOK_PDF_DEPLOY_PATH, BOOK_PDF_FILE, BOOK_PDF_PATH, BOOK_PDF_VIEWER_SRC,
    COVER_IMAGE_URL,
};
use crate::common::content::{
    ABOUT_CLOSE, ABOUT_LEAD, AUTHOR_BADGES, AUTHOR_BIO, BOOK_TITLE, EXCERPT_BODY,
    EXCERPT_EPIGRAPH, FOOTER_LINKS, FORMAT_BADGES, FULLBOOK_BLURB, SECTION_ABOUT, SECTION_AUTHOR,
    SECTION_EXCERPT, SECTION_FULLBOOK, SECTION_HOME, TAGLINE,
};
use crate::common::copyright_line;
use crate::components::{Badge, Button, ButtonVariant, Card, CardContent};

/// The whole page: a fixed run of anchorable sections. Rendered once, static
/// afterwards; the hero heading and cover play their entrance animations on
/// first paint and never again.
#[component]
pub fn Home() -> Element {
    rsx! {
        div { class: "home-container",
            Hero {}
            About {}
            Excerpt {}
            FullBook {}
            AuthorBio {}
            HomeFooter {}
        }
    }
}

#[component]
fn Hero() -> Element {
    rsx! {
        section { id: SECTION_HOME, class: "hero",
            div { class: "container",
                div { class: "hero-layout",
                    div {
                        h1 { class: "hero-title", "{BOOK_TITLE}" }
                        p { class: "hero-tagline", "{TAGLINE}" }
                        div { class: "hero-badges",
                            for badge in FORMAT_BADGES {
                                Badge { "{badge}" }
                            }
                        }
                        div { class: "hero-actions",
                            a { href: "#{SECTION_EXCERPT}",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    class: "btn-cta",
                                    "Read a Sample"
                                }
                            }
                            a { href: "#{SECTION_FULLBOOK}",
                                Button {
                                    variant: ButtonVariant::Outline,
                                    class: "btn-cta",
                                    "Read Full Book"
                                }
                            }
                        }
                    }
                    img {
                        class: "hero-cover",
                        src: COVER_IMAGE_URL,
                        alt: "Book cover",
                    }
                }
            }
        }
    }
}

#[component]
fn About() -> Element {
    rsx! {
        section { id: SECTION_ABOUT,
            div { class: "container",
                div { class: "about-layout",
                    div {
                        h2 { class: "section-heading", "About the Book" }
                        p { class: "section-copy", "{ABOUT_LEAD}" }
                        p { class: "section-copy", "{ABOUT_CLOSE}" }
                    }
                }
            }
        }
    }
}

#[component]
fn Excerpt() -> Element {
    rsx! {
        section { id: SECTION_EXCERPT,
            div { class: "container",
                h2 { class: "section-heading", "Read a Sample" }
                Card { class: "excerpt-card",
                    CardContent {
                        p {
                            em { "{EXCERPT_EPIGRAPH}" }
                        }
                        p { class: "excerpt-body", "{EXCERPT_BODY}" }
                    }
                }
            }
        }
    }
}

#[component]
fn FullBook() -> Element {
    rsx! {
        section { id: SECTION_FULLBOOK,
            div { class: "container",
                h2 { class: "section-heading", "Read the Full Book" }
                p { class: "section-copy", "{FULLBOOK_BLURB}" }
                div { class: "reader-frame",
                    iframe {
                        src: BOOK_PDF_VIEWER_SRC,
                        title: "{BOOK_TITLE} — Full Book",
                    }
                }
                div { class: "reader-actions",
                    a { href: BOOK_PDF_PATH, download: BOOK_PDF_FILE,
                        Button { class: "btn-cta", "Download PDF" }
                    }
                    a { href: "#{SECTION_EXCERPT}",
                        Button {
                            variant: ButtonVariant::Outline,
                            class: "btn-cta",
                            "Jump to Sample"
                        }
                    }
                }
                p { class: "reader-hint",
                    "Place your PDF at "
                    code { "{BOOK_PDF_DEPLOY_PATH}" }
                    " when deploying."
                }
            }
        }
    }
}

#[component]
fn AuthorBio() -> Element {
    rsx! {
        section { id: SECTION_AUTHOR, class: "author-section",
            div { class: "container",
                div { class: "author-layout",
                    img {
                        class: "author-portrait",
                        src: AUTHOR_PORTRAIT_URL,
                        alt: "Author portrait",
                    }
                    div { class: "author-bio",
                        h2 { class: "section-heading", "About the Author" }
                        p { class: "section-copy", "{AUTHOR_BIO}" }
                        div { class: "author-badges",
                            for badge in AUTHOR_BADGES {
                                Badge { "{badge}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HomeFooter() -> Element {
    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-inner",
                    p { class: "footer-note", "{copyright_line()}" }
                    nav { class: "footer-links",
                        for link in FOOTER_LINKS {
                            a { href: "#{link.target}", "{link.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::content::{NAV_LINKS, SECTION_IDS};
    use crate::common::current_year;

    fn render_home() -> String {
        let mut dom = VirtualDom::new(Home);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn each_section_id_appears_exactly_once() {
        let html = render_home();
        for id in SECTION_IDS {
            let needle = format!(r#"id="{id}""#);
            assert_eq!(
                html.matches(&needle).count(),
                1,
                "expected exactly one element with id {id}"
            );
        }
    }

    #[test]
    fn every_link_target_resolves_to_a_rendered_section() {
        let html = render_home();
        for link in NAV_LINKS.iter().chain(FOOTER_LINKS.iter()) {
            let anchor = format!(r##"href="#{}""##, link.target);
            let section = format!(r#"id="{}""#, link.target);
            assert!(html.contains(&section), "no section for {}", link.label);
            // The footer links render on the page itself; header links are
            // covered by the navigation tests.
            if FOOTER_LINKS.contains(link) {
                assert!(html.contains(&anchor), "no anchor for {}", link.label);
            }
        }
    }

    #[test]
    fn hero_ctas_jump_to_sample_and_full_book() {
        let html = render_home();
        assert!(html.contains(r##"href="#excerpt""##));
        assert!(html.contains(r##"href="#fullbook""##));
        assert!(html.contains("Read a Sample"));
        assert!(html.contains("Read Full Book"));
    }

    #[test]
    fn viewer_and_download_point_at_the_same_file() {
        let html = render_home();
        assert!(html.contains(&format!(r#"src="{BOOK_PDF_VIEWER_SRC}""#)));
        assert!(html.contains(&format!(r#"href="{BOOK_PDF_PATH}""#)));
        assert!(html.contains(&format!(r#"download="{BOOK_PDF_FILE}""#)));
    }

    #[test]
    fn footer_shows_the_clock_year() {
        let html = render_home();
        assert!(html.contains(&current_year().to_string()));
    }

    #[test]
    fn entrance_animated_elements_are_present() {
        let html = render_home();
        assert!(html.contains(r#"class="hero-title""#));
        assert!(html.contains(r#"class="hero-cover""#));
    }
}
