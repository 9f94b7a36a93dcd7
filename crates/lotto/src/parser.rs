use scraper::{ElementRef, Html, Selector};

use crate::types::{Draw, DrawHeader, DrawRow, NUMBERS_PER_WHEEL};

pub(crate) const UNKNOWN_NUMBER: &str = "N. ESTRAZIONE SCONOSCIUTO";
pub(crate) const UNKNOWN_DATE: &str = "DATA SCONOSCIUTA";

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Missing draw container: {0}")]
    MissingContainer(String),
}

fn elem_text(element: ElementRef) -> String {
    element.text().collect::<String>()
}

fn first_text(scope: ElementRef, selector: &Selector) -> Option<String> {
    scope
        .select(selector)
        .next()
        .map(|e| elem_text(e).trim().to_string())
}

fn parse_row(row: ElementRef, cell_sel: &Selector) -> Option<DrawRow> {
    let cells: Vec<ElementRef> = row.select(cell_sel).collect();
    if cells.len() <= NUMBERS_PER_WHEEL {
        return None;
    }

    let wheel = elem_text(cells[0]).trim().to_string();
    let numbers = std::array::from_fn(|i| elem_text(cells[i + 1]).trim().to_string());

    Some(DrawRow { wheel, numbers })
}

/// Extracts the latest draw from the results page.
///
/// Only a missing `div.tabellaLotto` container is fatal. Missing header
/// fields fall back to placeholders and a missing results table yields a
/// draw without rows.
pub fn parse_draw(html: &str) -> Result<Draw, ParseError> {
    let document = Html::parse_document(html);

    let container_sel = Selector::parse("div.tabellaLotto").unwrap();
    let number_sel = Selector::parse("span.estr-n").unwrap();
    let date_sel = Selector::parse("span.datetime").unwrap();
    let table_sel = Selector::parse("table.tabellaEstrazioni").unwrap();
    let tbody_sel = Selector::parse("tbody").unwrap();
    let row_sel = Selector::parse("tr").unwrap();
    let cell_sel = Selector::parse("td").unwrap();

    let container = document
        .select(&container_sel)
        .next()
        .ok_or_else(|| ParseError::MissingContainer("div.tabellaLotto".to_string()))?;

    let header = DrawHeader {
        number: first_text(container, &number_sel).unwrap_or_else(|| UNKNOWN_NUMBER.to_string()),
        date: first_text(container, &date_sel).unwrap_or_else(|| UNKNOWN_DATE.to_string()),
    };

    let tbody = container
        .select(&table_sel)
        .next()
        .and_then(|table| table.select(&tbody_sel).next());

    let rows = match tbody {
        Some(tbody) => tbody
            .select(&row_sel)
            .enumerate()
            .filter_map(|(i, row)| {
                let parsed = parse_row(row, &cell_sel);
                if parsed.is_none() {
                    log::debug!("Skipping row {} with fewer than six cells", i + 1);
                }
                parsed
            })
            .collect(),
        None => {
            log::warn!("No results table found in draw container");
            Vec::new()
        }
    };

    Ok(Draw { header, rows })
}
