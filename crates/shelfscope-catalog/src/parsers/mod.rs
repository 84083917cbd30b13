//! HTML → record extraction for the holdings and full-record pages.

pub mod availability;
pub mod title;

pub use availability::AvailabilityParser;
pub use title::TitleDetailsParser;

use scraper::{ElementRef, Selector};

/// Raw text of one element, descendants included, exactly as the page renders it.
pub(crate) fn element_text(el: &ElementRef<'_>) -> String {
    el.text().collect()
}

/// Concatenated text of every match of `selector` under `root`, in document order.
pub(crate) fn matched_text(root: &ElementRef<'_>, selector: &Selector) -> String {
    root.select(selector).map(|el| element_text(&el)).collect()
}
