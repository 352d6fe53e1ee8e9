//! Fixed marketing copy and the in-page navigation tables. Everything on the
//! page renders from these constants; nothing is fetched or computed at
//! runtime except the footer year.

pub const BOOK_TITLE: &str = "Moonlight & Gunpowder";

pub const TAGLINE: &str =
    "A post‑Napoleonic romance of grief, honor, and the dangerous spark of first love.";

pub const ABOUT_LEAD: &str = "In the uneasy calm after Napoleon’s fall, war‑made Duke Séverin de Derbois retreats to Château de Meslay—until a wedding draws him back into society and into the orbit of Bethania Lenoir, a luminous seventeen‑year‑old whose wit and quiet courage unsettle the veteran’s guarded heart. What begins as a charged encounter becomes a correspondence of souls: faith, philosophy, and music thread their letters as Séverin rediscovers hope beyond the battlefield. But family turmoil, sharp‑eyed sisters, and a single hasty letter from a wounded pride threaten to shatter a bond that feels providential. From Loire Valley salons to the training floor where he tempers fear into resolve, Séverin must learn a harder discipline than war—patience, humility, and the bravery to love again.";

pub const ABOUT_CLOSE: &str = "A sweeping, intimate tale of dignity and desire, Moonlight & Gunpowder kindles a slow‑burn romance against the embers of empire—where a man haunted by loss meets a young woman strong enough to see him clearly, and a single evening may alter two destinies.";

pub const EXCERPT_EPIGRAPH: &str = "“It is a truth universally acknowledged, that a gentleman returned from war and blessed with the fortune of noble recognition must soon find himself the subject of all manner of social scrutiny.”";

pub const EXCERPT_BODY: &str = "So it is with the Duc de Derbois—Séverin—whose laurels mean little beside the ache of widowhood. Drawn to a wedding in the Loire, he intends merely to endure the evening—until a young woman in a dark‑blue gown passes like a sudden chord in a silent room. Bethania Lenoir does not simper, nor shrink. In a brief exchange by the grand staircase—barefoot on cool marble, candles wavering—something unnamed takes root. He leaves resolved to forget it. Fate does not oblige.";

pub const FULLBOOK_BLURB: &str = "Free full-text access. Read inline or download the PDF.";

// Placeholder until the author supplies a real bio
pub const AUTHOR_BIO: &str = "Replace with a concise 90–150 word bio written in third person. Mention previous works, awards, a human detail (city, hobby), and your best social link.";

pub const FORMAT_BADGES: [&str; 3] = ["Hardcover", "eBook", "Audiobook"];

pub const AUTHOR_BADGES: [&str; 3] = ["@yourhandle", "#MoonlightAndGunpowder", "Press Kit"];

/// Anchor ids for the five addressable page regions. The header, footer, and
/// call-to-action links may only ever point at these.
pub const SECTION_HOME: &str = "home";
pub const SECTION_ABOUT: &str = "about";
pub const SECTION_EXCERPT: &str = "excerpt";
pub const SECTION_FULLBOOK: &str = "fullbook";
pub const SECTION_AUTHOR: &str = "author";

pub const SECTION_IDS: [&str; 5] = [
    SECTION_HOME,
    SECTION_ABOUT,
    SECTION_EXCERPT,
    SECTION_FULLBOOK,
    SECTION_AUTHOR,
];

/// One entry in the in-page navigation. `target` is a bare section id; the
/// rendering side prepends the `#`.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub target: &'static str,
}

/// Header menu, in display order.
pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "About",
        target: SECTION_ABOUT,
    },
    NavLink {
        label: "Sample",
        target: SECTION_EXCERPT,
    },
    NavLink {
        label: "Full Book",
        target: SECTION_FULLBOOK,
    },
    NavLink {
        label: "Author",
        target: SECTION_AUTHOR,
    },
];

/// Footer repeats a shorter run of the same links.
pub const FOOTER_LINKS: [NavLink; 3] = [
    NavLink {
        label: "About",
        target: SECTION_ABOUT,
    },
    NavLink {
        label: "Full Book",
        target: SECTION_FULLBOOK,
    },
    NavLink {
        label: "Author",
        target: SECTION_AUTHOR,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_ids_are_distinct() {
        for (i, a) in SECTION_IDS.iter().enumerate() {
            for b in SECTION_IDS.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn nav_targets_are_known_sections() {
        for link in NAV_LINKS {
            assert!(
                SECTION_IDS.contains(&link.target),
                "nav link {:?} points at a missing section",
                link
            );
        }
    }

    #[test]
    fn footer_targets_are_known_sections() {
        for link in FOOTER_LINKS {
            assert!(
                SECTION_IDS.contains(&link.target),
                "footer link {:?} points at a missing section",
                link
            );
        }
    }

    #[test]
    fn menu_order_is_about_sample_fullbook_author() {
        let labels: Vec<_> = NAV_LINKS.iter().map(|link| link.label).collect();
        assert_eq!(labels, vec!["About", "Sample", "Full Book", "Author"]);
    }
}
