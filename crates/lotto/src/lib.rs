mod parser;
pub mod output;
pub mod render;
pub mod scraper;
pub mod types;

pub use parser::{ParseError, parse_draw};
pub use scraper::{ScraperError, WebScraper};

pub(crate) const BASE_URL: &str = "https://www.estrazionedellotto.it/";
