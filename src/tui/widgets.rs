//! TUI widget rendering: search bar, result card grid, status line.
//!
//! Pure state-to-view mapping: everything here is recomputed from the
//! composer and controller on every frame, nothing is stored.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::BookSummary;
use crate::query::QueryComposer;
use crate::search::{FetchStatus, SearchController};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

/// Total card height including its border.
const CARD_HEIGHT: u16 = 7;

/// Main TUI layout rendering.
pub fn render(frame: &mut Frame, composer: &QueryComposer, controller: &SearchController) {
    let [header_area, search_area, grid_area, status_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    // Header.
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " tomescout ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Tab filter :: Enter search :: \u{2190}/\u{2192} pages :: Esc quit ",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(header, header_area);

    // Search bar with the active field filter in the title.
    let search_bar = Paragraph::new(composer.text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" search by {} ", composer.filter().label())),
        )
        .style(Style::default().fg(Color::White));
    frame.render_widget(search_bar, search_area);

    render_grid(frame, grid_area, controller);
    render_status(frame, status_area, controller);
}

/// The card grid: one card per summary, once a page has been fetched.
///
/// The last fetched page stays on screen through Loading and Failed
/// states; only a successful cycle replaces it.
fn render_grid(frame: &mut Frame, area: Rect, controller: &SearchController) {
    let Some(page) = controller.current_page() else {
        return;
    };

    let max_rows = (area.height / CARD_HEIGHT) as usize;
    for (row, chunk) in page.books.chunks(GRID_COLUMNS).take(max_rows).enumerate() {
        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16 * CARD_HEIGHT,
            width: area.width,
            height: CARD_HEIGHT,
        };
        let cells = Layout::horizontal(vec![
            Constraint::Ratio(1, GRID_COLUMNS as u32);
            GRID_COLUMNS
        ])
        .split(row_area);
        for (col, book) in chunk.iter().enumerate() {
            frame.render_widget(card(book), cells[col]);
        }
    }
}

/// One bordered result card.
fn card(book: &BookSummary) -> Paragraph<'static> {
    let image_line = match &book.thumbnail {
        Some(url) => Line::from(Span::styled(
            url.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        None => Line::from(Span::styled(
            "[ No Image ]",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
    };

    let mut lines = vec![
        Line::from(Span::styled(
            book.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            book.authors.clone(),
            Style::default().fg(Color::Gray),
        )),
    ];
    if !book.categories.is_empty() {
        lines.push(Line::from(Span::styled(
            book.categories.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(image_line);
    lines.push(Line::from(Span::styled(
        book.info_link.clone(),
        Style::default().fg(Color::Blue),
    )));

    Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: true })
}

/// Status line: loading indicator while a fetch is in flight, error
/// line after a failure, otherwise the result summary and pagination
/// affordances.
fn render_status(frame: &mut Frame, area: Rect, controller: &SearchController) {
    let line = match controller.status() {
        FetchStatus::Loading => Line::from(Span::styled(
            " Loading results...",
            Style::default().fg(Color::Yellow),
        )),
        FetchStatus::Failed(message) => Line::from(Span::styled(
            format!(" Error: {message}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        _ => match controller.query() {
            Some(query) => summary_line(controller, &query.to_string()),
            None => Line::from(Span::styled(
                " Type a query and press Enter.",
                Style::default().fg(Color::DarkGray),
            )),
        },
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// "Showing N of M results" plus prev/next affordances when there is
/// anything to page through.
fn summary_line(controller: &SearchController, query: &str) -> Line<'static> {
    let shown = controller
        .current_page()
        .map(|p| p.books.len())
        .unwrap_or(0);
    let total = controller.total();

    let mut spans = vec![Span::raw(format!(
        " Showing {shown} of {total} results for "
    ))];
    spans.push(Span::styled(
        format!("\"{query}\""),
        Style::default().add_modifier(Modifier::BOLD),
    ));

    if total > 0 {
        let page_number = controller.offset() / controller.page_size() + 1;
        spans.push(Span::styled(
            format!(" :: page {page_number} "),
            Style::default().fg(Color::DarkGray),
        ));
        spans.push(pager_span("\u{2190} prev", controller.has_prev()));
        spans.push(Span::raw(" "));
        spans.push(pager_span("next \u{2192}", controller.has_next()));
    }

    Line::from(spans)
}

/// A pagination affordance, dimmed when its gate is closed.
fn pager_span(label: &str, enabled: bool) -> Span<'static> {
    let style = if enabled {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
    };
    Span::styled(label.to_string(), style)
}
