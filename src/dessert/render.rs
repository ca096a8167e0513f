//! Dessert Clicker rendering.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::ClickableLines;

use super::actions::DessertAction;
use super::DessertGame;

/// Dessert art, 5 lines.
const DESSERT_ART: &[&str] = &[
    "   .-\"\"\"-.   ",
    "  / o  o  \\  ",
    " |~~~~~~~~~| ",
    " |_________| ",
    "  \\_______/  ",
];

/// Art while the click flash is active.
const DESSERT_PRESSED_ART: &[&str] = &[
    "             ",
    "   .-\"\"\"-.   ",
    "  /~~~~~~~\\  ",
    " |_________| ",
    "  \\_______/  ",
];

pub fn render(game: &DessertGame, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let has_notice = game.notices.borrow().current().is_some();

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(if has_notice { 3 } else { 0 }),
            Constraint::Length(3),
        ])
        .split(area);

    render_title(f, main_chunks[0]);

    if is_narrow_layout(area.width) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9),
                Constraint::Length(9),
                Constraint::Min(3),
            ])
            .split(main_chunks[1]);
        render_dessert(game, f, chunks[0], click_state);
        render_stats(game, f, chunks[1], click_state);
        render_log(game, f, chunks[2]);
    } else {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(main_chunks[1]);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(6)])
            .split(columns[0]);
        render_dessert(game, f, left[0], click_state);
        render_stats(game, f, left[1], click_state);
        render_log(game, f, columns[1]);
    }

    if has_notice {
        render_notice(game, f, main_chunks[2]);
    }
    render_help(f, main_chunks[3], click_state);
}

fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Dessert Clicker",
        Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(title, area);
}

/// The dessert itself. The whole panel is a sell target.
fn render_dessert(game: &DessertGame, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let state = game.store.state();
    let pressed = game.click_flash_ms > 0.0;
    let art = if pressed { DESSERT_PRESSED_ART } else { DESSERT_ART };
    let art_style = if pressed {
        Style::default().fg(Color::LightYellow)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let mut lines: Vec<Line> = art
        .iter()
        .map(|row| Line::from(Span::styled(*row, art_style)))
        .collect();
    lines.push(Line::from(Span::styled(
        format!("${} each", format_number(state.current_dessert.price)),
        Style::default().fg(Color::Green),
    )));

    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Magenta))
                .title(format!(" {} ", state.current_dessert.name)),
        );
    f.render_widget(widget, area);

    click_state
        .borrow_mut()
        .add_click_target(area, DessertAction::Sell);
}

fn render_stats(game: &DessertGame, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let state = game.store.state();
    let catalog = game.store.catalog();
    let label = Style::default().fg(Color::Gray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut cl = ClickableLines::new();
    cl.push(Line::from(vec![
        Span::styled(" Desserts sold: ", label),
        Span::styled(format_number(state.desserts_sold), value),
    ]));
    cl.push(Line::from(vec![
        Span::styled(" Revenue:       ", label),
        Span::styled(format!("${}", format_number(state.revenue)), value),
    ]));
    let next_line = match catalog.next_unlock(state.desserts_sold) {
        Some(next) => format!(
            " Next: {} in {} sales",
            next.name,
            format_number(next.start_threshold - state.desserts_sold)
        ),
        None => " Every dessert unlocked!".to_string(),
    };
    cl.push(Line::from(Span::styled(next_line, Style::default().fg(Color::Cyan))));
    cl.push(Line::from(""));
    cl.push_clickable(action_line("[C]", "Sell dessert"), DessertAction::Sell);
    cl.push_clickable(action_line("[S]", "Share sales"), DessertAction::Share);

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1);

    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green))
            .title(" Sales "),
    );
    f.render_widget(widget, area);
}

fn action_line(hint: &'static str, label: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!(" {hint} "),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(label.to_string()),
    ])
}

fn render_log(game: &DessertGame, f: &mut Frame, area: Rect) {
    let log = game.sales_log.borrow();
    let visible = area.height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = log
        .entries
        .iter()
        .rev()
        .take(visible)
        .map(|entry| {
            let style = if entry.is_important {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(Span::styled(entry.text.clone(), style)))
        })
        .collect();

    let widget = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Bakery log "),
    );
    f.render_widget(widget, area);
}

fn render_notice(game: &DessertGame, f: &mut Frame, area: Rect) {
    let notices = game.notices.borrow();
    let Some(notice) = notices.current() else {
        return;
    };
    let widget = Paragraph::new(Line::from(Span::styled(
        notice.text.clone(),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(widget, area);
}

/// Help bar: left half sells, right half shares.
fn render_help(f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    let key_style = Style::default().fg(Color::Yellow);
    let help = Line::from(vec![
        Span::styled("[C]", key_style),
        Span::raw(" Sell    "),
        Span::styled("[S]", key_style),
        Span::raw(" Share"),
    ]);
    let widget = Paragraph::new(help)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(widget, area);

    let half = area.width / 2;
    let mut cs = click_state.borrow_mut();
    cs.add_click_target(Rect::new(area.x, area.y, half, area.height), DessertAction::Sell);
    cs.add_click_target(
        Rect::new(area.x + half, area.y, area.width - half, area.height),
        DessertAction::Share,
    );
}

/// Format an integer with thousands separators.
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dessert::catalog::small_catalog;
    use ratzilla::ratatui::backend::TestBackend;
    use ratzilla::ratatui::Terminal;

    /// Draw one frame and return the click targets it registered.
    fn draw_frame(game: &DessertGame, width: u16, height: u16) -> Rc<RefCell<ClickState>> {
        let click_state = Rc::new(RefCell::new(ClickState::new()));
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| {
                let size = f.area();
                click_state.borrow_mut().reset(size.width, size.height);
                game.render(f, size, &click_state);
            })
            .unwrap();
        click_state
    }

    #[test]
    fn wide_layout_registers_dessert_and_help_targets() {
        let game = DessertGame::new(small_catalog());
        let click_state = draw_frame(&game, 80, 30);
        let cs = click_state.borrow();
        // dessert panel: rows 3..12, left column
        assert_eq!(cs.hit_test(20, 7), Some(DessertAction::Sell));
        // help bar: rows 27..30, split at column 40
        assert_eq!(cs.hit_test(10, 28), Some(DessertAction::Sell));
        assert_eq!(cs.hit_test(60, 28), Some(DessertAction::Share));
        // stats panel action lines
        assert_eq!(cs.hit_test(5, 17), Some(DessertAction::Sell));
        assert_eq!(cs.hit_test(5, 18), Some(DessertAction::Share));
        // log panel is not clickable
        assert_eq!(cs.hit_test(70, 10), None);
    }

    #[test]
    fn narrow_layout_registers_dessert_and_help_targets() {
        let game = DessertGame::new(small_catalog());
        let click_state = draw_frame(&game, 40, 40);
        let cs = click_state.borrow();
        assert_eq!(cs.hit_test(20, 5), Some(DessertAction::Sell));
        assert_eq!(cs.hit_test(5, 38), Some(DessertAction::Sell));
        assert_eq!(cs.hit_test(30, 38), Some(DessertAction::Share));
    }

    #[test]
    fn clicking_rendered_dessert_panel_sells() {
        let mut game = DessertGame::new(small_catalog());
        let action = draw_frame(&game, 80, 30).borrow().hit_test(20, 7);
        let action = action.unwrap();
        game.handle_input(&crate::input::InputEvent::Click(action));
        assert_eq!(game.store.state().desserts_sold, 1);
        assert_eq!(game.store.state().revenue, 5);
    }

    #[test]
    fn format_number_basic() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1234), "1,234");
        assert_eq!(format_number(1234567), "1,234,567");
        assert_eq!(format_number(100000), "100,000");
    }

    #[test]
    fn art_frames_have_equal_height() {
        assert_eq!(DESSERT_ART.len(), DESSERT_PRESSED_ART.len());
    }
}
