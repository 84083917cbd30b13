use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use shelfscope_core::{AvailabilityDraft, AvailabilityField, AvailabilityRecord};
use tracing::warn;

use crate::error::{CatalogError, Result};
use crate::parsers::{element_text, matched_text};

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tbody tr").expect("valid selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("valid selector"));
static BRANCH_LABEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a span").expect("valid selector"));
static LOCATION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("book-location").expect("valid selector"));
static LABEL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span").expect("valid selector"));

const CAPTION_ATTR: &str = "data-caption";

struct CaptionRule {
    caption: &'static str,
    field: AvailabilityField,
    extract: fn(&ElementRef<'_>) -> String,
}

// One entry per recognised `data-caption`; cells with any other caption are skipped.
static CAPTION_RULES: [CaptionRule; 4] = [
    CaptionRule {
        caption: "Library",
        field: AvailabilityField::BranchName,
        extract: extract_branch_name,
    },
    CaptionRule {
        caption: "Section/Shelf Location",
        field: AvailabilityField::ShelfLocation,
        extract: extract_shelf_location,
    },
    CaptionRule {
        caption: "Call Number",
        field: AvailabilityField::CallNumber,
        extract: extract_call_number,
    },
    CaptionRule {
        caption: "Item Status",
        field: AvailabilityField::StatusDesc,
        extract: extract_status_desc,
    },
];

fn rule_for(caption: &str) -> Option<&'static CaptionRule> {
    CAPTION_RULES.iter().find(|rule| rule.caption == caption)
}

fn extract_branch_name(cell: &ElementRef<'_>) -> String {
    matched_text(cell, &BRANCH_LABEL_SELECTOR)
}

fn extract_shelf_location(cell: &ElementRef<'_>) -> String {
    matched_text(cell, &LOCATION_SELECTOR)
}

/// Call numbers are rendered as several spans ("English", "005.133", "KLA").
fn extract_call_number(cell: &ElementRef<'_>) -> String {
    cell.select(&LABEL_SELECTOR)
        .map(|el| element_text(&el))
        .collect::<Vec<_>>()
        .join(" ")
}

fn extract_status_desc(cell: &ElementRef<'_>) -> String {
    matched_text(cell, &LABEL_SELECTOR)
}

/// Holdings page (`XHLD`) → one record per copy, in the order the table lists them.
pub struct AvailabilityParser;

impl AvailabilityParser {
    pub fn parse(html: &str) -> Result<Vec<AvailabilityRecord>> {
        let document = Html::parse_document(html);

        let records = document
            .select(&ROW_SELECTOR)
            .enumerate()
            .filter_map(|(index, row)| {
                let draft = Self::parse_row(&row);
                let missing = draft
                    .missing_fields()
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>();
                let record = draft.finish();
                if record.is_none() {
                    warn!(row = index, ?missing, "skipping holdings row with missing fields");
                }
                record
            })
            .collect::<Vec<_>>();

        // Incomplete rows were dropped above, so a table of only partial rows
        // ends up here too.
        if records.is_empty() {
            return Err(CatalogError::NotFound(
                "availabilities could not be found, bid likely invalid".to_string(),
            ));
        }
        Ok(records)
    }

    fn parse_row(row: &ElementRef<'_>) -> AvailabilityDraft {
        let mut draft = AvailabilityDraft::new();
        for cell in row.select(&CELL_SELECTOR) {
            let Some(rule) = cell.value().attr(CAPTION_ATTR).and_then(rule_for) else {
                continue;
            };
            draft.set(rule.field, (rule.extract)(&cell));
        }
        draft
    }
}
