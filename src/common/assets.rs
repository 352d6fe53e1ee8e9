//! Media and document references. The PDF family is derived from one base
//! constant so the inline viewer, the download link, and the deployment hint
//! can never point at different files.

use constcat::concat;

pub const COVER_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1544937950-fa07a98d237f?q=80&w=1200&auto=format&fit=crop";

pub const AUTHOR_PORTRAIT_URL: &str =
    "https://images.unsplash.com/photo-1544005313-94ddf0286df2?q=80&w=800&auto=format&fit=crop";

pub const BOOK_ASSET_ROOT: &str = "/book";
pub const BOOK_PDF_FILE: &str = "Moonlight-and-Gunpowder.pdf";

/// Served path of the full-text PDF; the deployment places the file here.
pub const BOOK_PDF_PATH: &str = concat!(BOOK_ASSET_ROOT, "/", BOOK_PDF_FILE);

/// Same document as [`BOOK_PDF_PATH`], plus the fit-to-width viewer hint.
pub const BOOK_PDF_VIEWER_SRC: &str = concat!(BOOK_PDF_PATH, "#view=FitH");

/// Repository location shown in the page hint; the build copies everything
/// under `public/` to the served root, landing the PDF at [`BOOK_PDF_PATH`].
pub const BOOK_PDF_DEPLOY_PATH: &str = concat!("/public", BOOK_PDF_PATH);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_and_download_share_one_path() {
        let viewer_path = BOOK_PDF_VIEWER_SRC
            .split('#')
            .next()
            .expect("split always yields at least one part");
        assert_eq!(viewer_path, BOOK_PDF_PATH);
    }

    #[test]
    fn viewer_src_only_adds_the_display_fragment() {
        assert_eq!(
            BOOK_PDF_VIEWER_SRC,
            format!("{BOOK_PDF_PATH}#view=FitH")
        );
    }

    #[test]
    fn deploy_path_is_the_public_copy_of_the_served_path() {
        assert_eq!(BOOK_PDF_DEPLOY_PATH, format!("/public{BOOK_PDF_PATH}"));
        assert!(BOOK_PDF_PATH.ends_with(BOOK_PDF_FILE));
    }
}
