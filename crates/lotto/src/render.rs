use crate::types::{Draw, DrawRow, NUMBERS_PER_WHEEL};

pub const PAGE_TITLE: &str = "Estrazioni Lotto Anno Corrente";
pub const STRIPED_ROW_CLASS: &str = "trNumero-arch";
pub const GOLD_CLASS: &str = "oro";

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn render_row(position: usize, row: &DrawRow) -> String {
    let mut lines = Vec::with_capacity(NUMBERS_PER_WHEEL + 3);

    // Every second row of the output table is striped.
    if position % 2 == 1 {
        lines.push(format!("<tr class=\"{}\">", STRIPED_ROW_CLASS));
    } else {
        lines.push("<tr>".to_string());
    }
    lines.push(format!(
        "<td class=\"nomeRuota-arch estratto-arch\">{}</td>",
        escape_html(&row.wheel)
    ));
    for number in &row.numbers[..NUMBERS_PER_WHEEL - 1] {
        lines.push(format!("<td><span>{}</span></td>", escape_html(number)));
    }
    lines.push(format!(
        "<td><span class=\"{}\">{}</span></td>",
        GOLD_CLASS,
        escape_html(row.gold())
    ));
    lines.push("</tr>".to_string());

    lines.join("\n")
}

fn render_head_cells() -> String {
    let mut cells = vec!["<th class=\"nomeRuota-arch thRuota-arch\">RUOTA</th>".to_string()];
    cells.extend(
        (1..=NUMBERS_PER_WHEEL)
            .map(|n| format!("<th class=\"thEstratto-arch\">{}<sup>o</sup> estr.</th>", n)),
    );
    cells.join("\n")
}

/// Renders the draw as a standalone archive page.
pub fn render_html(draw: &Draw) -> String {
    let rows = draw
        .rows
        .iter()
        .enumerate()
        .map(|(i, row)| render_row(i, row))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<html>
<head>
<title>{title}</title>
</head>
<body>
<table class=\"tabellaEstrazioni-arch\">
<thead>
<tr class=\"rif-estr-arch\">
<td class=\"estr-n-arch\" colspan=\"3\">{number}</td>
<td class=\"datetime-arch\" colspan=\"3\">del {date}</td>
</tr>
<tr>
{head_cells}
</tr>
</thead>
<tbody>
{rows}
</tbody>
</table>
</body>
</html>",
        title = PAGE_TITLE,
        number = escape_html(&draw.header.number),
        date = escape_html(&draw.header.date),
        head_cells = render_head_cells(),
        rows = rows,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DrawHeader;

    fn row(wheel: &str, numbers: [&str; NUMBERS_PER_WHEEL]) -> DrawRow {
        DrawRow {
            wheel: wheel.to_string(),
            numbers: numbers.map(String::from),
        }
    }

    fn draw(rows: Vec<DrawRow>) -> Draw {
        Draw {
            header: DrawHeader {
                number: "Estrazione n. 165".to_string(),
                date: "Martedì 14 ottobre 2025".to_string(),
            },
            rows,
        }
    }

    #[test]
    fn test_render_full_document() {
        let html = render_html(&draw(vec![row("Bari", ["12", "45", "3", "78", "90"])]));

        let expected = r#"<html>
<head>
<title>Estrazioni Lotto Anno Corrente</title>
</head>
<body>
<table class="tabellaEstrazioni-arch">
<thead>
<tr class="rif-estr-arch">
<td class="estr-n-arch" colspan="3">Estrazione n. 165</td>
<td class="datetime-arch" colspan="3">del Martedì 14 ottobre 2025</td>
</tr>
<tr>
<th class="nomeRuota-arch thRuota-arch">RUOTA</th>
<th class="thEstratto-arch">1<sup>o</sup> estr.</th>
<th class="thEstratto-arch">2<sup>o</sup> estr.</th>
<th class="thEstratto-arch">3<sup>o</sup> estr.</th>
<th class="thEstratto-arch">4<sup>o</sup> estr.</th>
<th class="thEstratto-arch">5<sup>o</sup> estr.</th>
</tr>
</thead>
<tbody>
<tr>
<td class="nomeRuota-arch estratto-arch">Bari</td>
<td><span>12</span></td>
<td><span>45</span></td>
<td><span>3</span></td>
<td><span>78</span></td>
<td><span class="oro">90</span></td>
</tr>
</tbody>
</table>
</body>
</html>"#;
        assert_eq!(html, expected);
    }

    #[test]
    fn test_rows_alternate_striping() {
        let html = render_html(&draw(vec![
            row("Bari", ["1", "2", "3", "4", "5"]),
            row("Cagliari", ["6", "7", "8", "9", "10"]),
            row("Firenze", ["11", "12", "13", "14", "15"]),
        ]));

        assert_eq!(html.matches("<tr class=\"trNumero-arch\">").count(), 1);
        let striped = html
            .find("<tr class=\"trNumero-arch\">\n<td class=\"nomeRuota-arch estratto-arch\">Cagliari")
            .is_some();
        assert!(striped, "Second row should be striped");
    }

    #[test]
    fn test_empty_draw_renders_empty_body() {
        let html = render_html(&draw(Vec::new()));

        assert!(html.contains("<tbody>\n\n</tbody>"));
    }

    #[test]
    fn test_text_is_escaped() {
        let html = render_html(&draw(vec![row("A&B <x>", ["1", "2", "3", "4", "\"5\""])]));

        assert!(html.contains(">A&amp;B &lt;x&gt;</td>"));
        assert!(html.contains("<span class=\"oro\">&quot;5&quot;</span>"));
    }
}
