//! Screen rendering functions for the TUI.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use desk_report::report::Report;

use crate::app::FieldLine;

/// Draw header
pub fn draw_header(frame: &mut Frame, area: Rect, title: &str) {
    let text = format!(" DerivDesk - {} ", title);
    let header = Paragraph::new(text)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw the instrument selector
pub fn draw_instrument_list(frame: &mut Frame, area: Rect, titles: &[&str], active: usize) {
    let items: Vec<ListItem> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| {
            let style = if index == active {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(format!(" {title} ")).style(style)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Instruments ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(list, area);
}

/// Draw the active module's form with inline field errors
pub fn draw_form(
    frame: &mut Frame,
    area: Rect,
    fields: &[FieldLine],
    focus: usize,
    in_flight: bool,
) {
    let label_width = fields.iter().map(|f| f.label.len()).max().unwrap_or(0);

    let mut content = Vec::with_capacity(fields.len() + 2);
    for (index, field) in fields.iter().enumerate() {
        let marker = if index == focus { "> " } else { "  " };
        let value = if field.choice {
            format!("< {} >", field.value)
        } else {
            field.value.clone()
        };

        let mut spans = vec![
            Span::styled(marker.to_string(), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("{:<label_width$}  ", field.label),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(value),
        ];
        if let Some(error) = &field.error {
            spans.push(Span::styled(
                format!("  {error}"),
                Style::default().fg(Color::Red),
            ));
        }
        content.push(Line::from(spans));
    }

    content.push(Line::from(""));
    let status = if in_flight {
        Span::styled("Calculating...", Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            "Press [Enter] to calculate",
            Style::default().fg(Color::DarkGray),
        )
    };
    content.push(Line::from(status));

    let form = Paragraph::new(content).block(
        Block::default()
            .title(" Parameters ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(form, area);
}

/// Draw the latest report, or a placeholder when there is none
pub fn draw_report(frame: &mut Frame, area: Rect, report: Option<&Report>, scroll: u16) {
    let content = match report {
        Some(report) => report_lines(report),
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                "No result",
                Style::default().fg(Color::DarkGray),
            )),
        ],
    };

    let paragraph = Paragraph::new(content).scroll((scroll, 0)).block(
        Block::default()
            .title(" Result ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    frame.render_widget(paragraph, area);
}

/// Draw footer with keybindings
pub fn draw_footer(frame: &mut Frame, area: Rect) {
    let footer_text = " [Tab]Instrument [Up/Down]Field [Space]Cycle [Enter]Calculate [PgUp/PgDn]Scroll [Esc]Quit ";
    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(footer, area);
}

/// Flatten a report into display lines.
fn report_lines(report: &Report) -> Vec<Line<'_>> {
    let mut lines = Vec::new();

    let mut title_spans = vec![Span::styled(
        report.title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    if let Some(badge) = &report.badge {
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            format!("[{badge}]"),
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(title_spans));
    lines.push(Line::from(""));

    for headline in &report.headlines {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{:<12}", headline.label),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(
                headline.value.clone(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]));
    }

    if let Some(interval) = &report.interval {
        lines.push(Line::from(vec![
            Span::styled(
                "95% Confidence Interval  ",
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(interval.clone()),
        ]));
    }

    if !report.inputs.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Input Parameters",
            Style::default().fg(Color::Cyan),
        )));
        let label_width = report
            .inputs
            .iter()
            .map(|row| row.label.chars().count())
            .max()
            .unwrap_or(0);
        for row in &report.inputs {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<label_width$}  ", row.label),
                    Style::default().fg(Color::Yellow),
                ),
                Span::raw(row.value.clone()),
            ]));
        }
    }

    for table in &report.tables {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            table.title,
            Style::default().fg(Color::Cyan),
        )));
        let widths = column_widths(&table.rows);
        for row in &table.rows {
            let mut spans = vec![Span::raw("  ")];
            for (column, cell) in row.iter().enumerate() {
                let width = widths.get(column).copied().unwrap_or(0);
                if column == 0 {
                    spans.push(Span::raw(format!("{cell:<width$}  ")));
                } else {
                    spans.push(Span::raw(format!("{cell:>width$}  ")));
                }
            }
            lines.push(Line::from(spans));
        }
    }

    lines
}

/// Widest cell per column, for alignment.
fn column_widths(rows: &[Vec<String>]) -> Vec<usize> {
    let mut widths = Vec::new();
    for row in rows {
        for (column, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if column >= widths.len() {
                widths.push(len);
            } else if widths[column] < len {
                widths[column] = len;
            }
        }
    }
    widths
}

#[cfg(test)]
mod tests {
    use super::*;
    use desk_report::report::{EchoRow, Headline, TableSection};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn create_test_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(100, 40);
        Terminal::new(backend).unwrap()
    }

    fn sample_report() -> Report {
        Report {
            title: "KIKO Put Option (Quasi-Monte Carlo)",
            badge: Some("PUT OPTION WITH BARRIERS".to_string()),
            headlines: vec![
                Headline {
                    label: "Price",
                    value: "2.500000".to_string(),
                },
                Headline {
                    label: "Delta",
                    value: "-0.400000".to_string(),
                },
            ],
            interval: Some("2.300000 — 2.700000".to_string()),
            inputs: vec![EchoRow::new("Spot Price (S)", "100")],
            tables: Vec::new(),
        }
    }

    #[test]
    fn test_draw_report_with_data() {
        let mut terminal = create_test_terminal();
        let report = sample_report();

        terminal
            .draw(|frame| {
                let area = frame.size();
                draw_report(frame, area, Some(&report), 0);
            })
            .unwrap();
    }

    #[test]
    fn test_draw_report_without_data() {
        let mut terminal = create_test_terminal();

        terminal
            .draw(|frame| {
                let area = frame.size();
                draw_report(frame, area, None, 0);
            })
            .unwrap();
    }

    #[test]
    fn test_draw_form_with_errors() {
        let mut terminal = create_test_terminal();
        let fields = vec![
            FieldLine {
                label: "Spot Price",
                value: "abc".to_string(),
                choice: false,
                error: Some("Spot price must be a number".to_string()),
            },
            FieldLine {
                label: "Option Type",
                value: "call".to_string(),
                choice: true,
                error: None,
            },
        ];

        terminal
            .draw(|frame| {
                let area = frame.size();
                draw_form(frame, area, &fields, 0, false);
            })
            .unwrap();
    }

    #[test]
    fn test_draw_instrument_list() {
        let mut terminal = create_test_terminal();
        let titles = ["European Option", "Implied Volatility"];

        terminal
            .draw(|frame| {
                let area = frame.size();
                draw_instrument_list(frame, area, &titles, 1);
            })
            .unwrap();
    }

    #[test]
    fn report_lines_include_tables_in_order() {
        let report = Report {
            title: "Interest Rate Swap Valuation",
            badge: None,
            headlines: Vec::new(),
            interval: None,
            inputs: Vec::new(),
            tables: vec![TableSection {
                title: "NPV Summary",
                rows: vec![
                    vec!["Total NPV".to_string(), "1234.57".to_string()],
                    vec!["Fixed Leg NPV".to_string(), "-170000.12".to_string()],
                ],
            }],
        };
        let lines = report_lines(&report);
        let rendered: Vec<String> = lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect();
        let npv_index = rendered.iter().position(|l| l == "NPV Summary").unwrap();
        assert!(rendered[npv_index + 1].contains("Total NPV"));
        assert!(rendered[npv_index + 2].contains("-170000.12"));
    }

    #[test]
    fn column_widths_track_the_widest_cell() {
        let rows = vec![
            vec!["2025-12-04".to_string(), "17500.00".to_string()],
            vec!["2026-06-04".to_string(), "1.00".to_string()],
        ];
        assert_eq!(column_widths(&rows), vec![10, 8]);
    }
}
