use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use shelfscope_core::TitleDetails;

use crate::error::{CatalogError, Result};
use crate::parsers::element_text;

static CARD_TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".card-title").expect("valid selector"));
static RECORD_DETAILS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(".recdetails").expect("valid selector"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").expect("valid selector"));
static LABEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("valid selector"));

/// Full record page (`XFULL`) → title and first listed author.
pub struct TitleDetailsParser;

impl TitleDetailsParser {
    pub fn parse(html: &str) -> Result<TitleDetails> {
        let document = Html::parse_document(html);

        let title_name = document
            .select(&CARD_TITLE_SELECTOR)
            .next()
            .and_then(|card| card.select(&LINK_SELECTOR).next())
            .map(|link| element_text(&link))
            .unwrap_or_default();

        let author = document
            .select(&RECORD_DETAILS_SELECTOR)
            .next()
            .and_then(|details| details.select(&LABEL_SELECTOR).next())
            .map(|label| element_text(&label))
            .unwrap_or_default();

        let details = TitleDetails { title_name, author };
        if !details.is_complete() {
            return Err(CatalogError::NotFound(
                "title details could not be found, bid likely invalid".to_string(),
            ));
        }
        Ok(details)
    }
}
