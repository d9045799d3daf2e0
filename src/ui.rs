use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::constants::{
    grid::ROW_WIDTH,
    messages::EMPTY_PAGE,
    ui::{CARD_HEIGHT, MIN_HEIGHT, MIN_WIDTH, TITLE},
};
use crate::favorites::Favorites;
use crate::theme::ColorScheme;
use crate::types::CharacterRecord;
use crate::util_text::{ellipsize, normalize_image_url};

// ===============================
// Top-level draw
// ===============================
pub fn draw(f: &mut Frame, app: &mut App) {
    app.tick_spinner();

    let area = f.area();
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small!\n\nMinimum size: {MIN_WIDTH}×{MIN_HEIGHT}\nCurrent size: {}×{}\n\nPlease resize your terminal.",
            area.width, area.height
        ))
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme().toast_error).add_modifier(Modifier::BOLD));
        f.render_widget(warning, area);
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Length(1), // navigation
            Constraint::Min(0),    // grid
            Constraint::Length(1), // footer
        ])
        .split(area);

    header(f, chunks[0], app);
    navigation(f, chunks[1], app);
    grid(f, chunks[2], app);
    footer(f, chunks[3], app);

    if app.toast_message().is_some() {
        draw_toast(f, app);
    }
}

// ===============================
// Header / Navigation
// ===============================
fn header(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let mut page = vec![Span::styled(
        format!("Page: {}", app.current_page()),
        Style::default().fg(theme.text),
    )];
    if app.loading().is_some() {
        page.push(Span::styled(
            format!("  {} loading", app.spinner_char()),
            Style::default().fg(theme.text_dim),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(theme.title).add_modifier(Modifier::BOLD),
        )),
        Line::from(page),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM).border_type(BorderType::Plain));
    f.render_widget(paragraph, area);
}

fn navigation(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let prev_style = if app.current_page() > 1 {
        Style::default().fg(theme.text)
    } else {
        Style::default().fg(theme.text_dim).add_modifier(Modifier::DIM)
    };
    let line = Line::from(vec![
        Span::styled("[p] Prev Page", prev_style),
        Span::raw("    "),
        Span::styled("[n] Next Page", Style::default().fg(theme.text)),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ===============================
// Grid
// ===============================
fn grid(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let rows = app.rows();
    if rows.is_empty() {
        let text = if app.loading().is_some() { "Loading…" } else { EMPTY_PAGE };
        let empty = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text_dim));
        f.render_widget(empty, area);
        return;
    }

    // Scroll so the selected row stays on screen
    let visible = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = app.cursor().row(ROW_WIDTH);
    let first = selected_row.saturating_sub(visible - 1);

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); visible])
        .split(area);

    let selected = app.cursor().index();
    for (slot, (row_idx, row)) in rows.iter().enumerate().skip(first).take(visible).enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, ROW_WIDTH as u32); ROW_WIDTH])
            .split(row_areas[slot]);

        for (col, character) in row.iter().enumerate() {
            let is_selected = row_idx * ROW_WIDTH + col == selected;
            card(f, cols[col], character, app.favorites(), &theme, is_selected);
        }
    }
}

fn card(
    f: &mut Frame,
    area: Rect,
    character: &CharacterRecord,
    favorites: &Favorites,
    theme: &ColorScheme,
    selected: bool,
) {
    let inner_width = area.width.saturating_sub(2) as usize;
    let is_favorite = favorites.is_favorite(character.id);

    let label_style = if is_favorite {
        Style::default().fg(theme.favorite).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text_dim)
    };
    let image = normalize_image_url(character.image_url.as_deref());

    let lines = vec![
        Line::from(Span::styled(
            ellipsize(&character.name, inner_width).into_owned(),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(favorites.label(character.id), label_style)),
        Line::from(Span::styled(
            ellipsize(&image, inner_width).into_owned(),
            Style::default().fg(theme.text_dim),
        )),
    ];

    let border = if selected { theme.focus_border } else { theme.unfocused_border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected { BorderType::Thick } else { BorderType::Rounded })
        .border_style(Style::default().fg(border));

    f.render_widget(Paragraph::new(lines).block(block), area);
}

// ===============================
// Footer / Toast
// ===============================
fn footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = app.theme();
    let mut spans = vec![
        Span::styled(
            "←↑↓→ select  Enter favourite  c copy URL  q quit",
            Style::default().fg(theme.text_dim),
        ),
        Span::raw("  │  "),
        Span::styled(favorites_summary(app.favorites()), Style::default().fg(theme.favorite)),
        Span::raw(format!("  │  {} fps", app.fps())),
    ];
    if let Some(err) = app.last_error() {
        spans.push(Span::raw("  │  "));
        spans.push(Span::styled(
            ellipsize(err, 60).into_owned(),
            Style::default().fg(theme.toast_error).add_modifier(Modifier::DIM),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// `★ N` plus the favourite ids, shortened to fit the footer.
fn favorites_summary(favorites: &Favorites) -> String {
    if favorites.is_empty() {
        return "★ 0".to_string();
    }
    let ids = favorites
        .sorted_ids()
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(",");
    format!("★ {} [{}]", favorites.len(), ellipsize(&ids, 24))
}

fn draw_toast(f: &mut Frame, app: &App) {
    let Some((msg, is_error)) = app.toast_message() else {
        return;
    };
    let theme = app.theme();
    let color = if is_error { theme.toast_error } else { theme.toast_info };

    let area = f.area();
    let width = (msg.chars().count() as u16 + 4).min(area.width);
    let rect = Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(3) / 2,
        width,
        height: 3.min(area.height),
    };

    let toast = Paragraph::new(msg)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(color)),
        );
    f.render_widget(Clear, rect);
    f.render_widget(toast, rect);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use crate::types::AppEvent;
    use ratatui::{backend::TestBackend, Terminal};

    fn render_sized(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render(app: &mut App) -> String {
        render_sized(app, 120, 30)
    }

    fn load(app: &mut App, characters: Vec<CharacterRecord>) {
        app.mount();
        let request = app.pending_request().unwrap();
        app.on_event(AppEvent::PageLoaded { request, characters });
    }

    #[test]
    fn renders_title_page_and_cards() {
        let mut app = App::new(1, Favorites::seeded([25]), 30, vec![30], Theme::Nord, None);
        load(
            &mut app,
            vec![
                CharacterRecord::new(6, "'Olu Mel", None),
                CharacterRecord::new(25, "Abu", Some("https://img/abu.png/revision/latest")),
            ],
        );
        let screen = render(&mut app);
        assert!(screen.contains("The World of Disney"));
        assert!(screen.contains("Page: 1"));
        assert!(screen.contains("'Olu Mel"));
        assert!(screen.contains("Favourited"));
        assert!(screen.contains("https://img/abu.png"));
        assert!(!screen.contains("revision"));
    }

    #[test]
    fn empty_page_renders_message() {
        let mut app = App::new(4, Favorites::new(), 30, vec![30], Theme::Nord, None);
        load(&mut app, Vec::new());
        let screen = render(&mut app);
        assert!(screen.contains(EMPTY_PAGE));
        assert!(screen.contains("Page: 4"));
    }

    #[test]
    fn footer_lists_favourite_ids_in_order() {
        let mut app = App::new(1, Favorites::seeded([25, 7]), 30, vec![30], Theme::Nord, None);
        load(&mut app, Vec::new());
        let screen = render(&mut app);
        assert!(screen.contains("★ 2 [7,25]"));
    }

    #[test]
    fn warns_below_minimum_size_and_renders_at_it() {
        let mut app = App::new(1, Favorites::new(), 30, vec![30], Theme::Nord, None);
        load(&mut app, vec![CharacterRecord::new(1, "Abu", None)]);

        let small = render_sized(&mut app, MIN_WIDTH, MIN_HEIGHT - 1);
        assert!(small.contains("Terminal too small!"));
        assert!(!small.contains("Page: 1"));

        let exact = render_sized(&mut app, MIN_WIDTH, MIN_HEIGHT);
        assert!(!exact.contains("Terminal too small!"));
        assert!(exact.contains("Abu"));
    }
}
