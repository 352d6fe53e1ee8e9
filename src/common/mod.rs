pub mod assets;
pub mod content;
pub mod style;

use chrono::{Datelike, Local};

use content::BOOK_TITLE;

/// Year shown in the footer, read from the local clock at render time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Copyright line for a fixed year, split out so tests can pin the clock.
pub fn copyright_line_for(year: i32) -> String {
    format!("© {year} {BOOK_TITLE}. All rights reserved.")
}

pub fn copyright_line() -> String {
    copyright_line_for(current_year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line_interpolates_the_given_year() {
        assert_eq!(
            copyright_line_for(1815),
            "© 1815 Moonlight & Gunpowder. All rights reserved."
        );
    }

    #[test]
    fn displayed_copyright_uses_the_clock_year() {
        let year = current_year().to_string();
        assert!(copyright_line().contains(&year));
    }
}
