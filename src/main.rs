use std::{cell::Cell, cell::RefCell, io, rc::Rc};

use dessert_clicker::dessert::catalog::Catalog;
use dessert_clicker::dessert::DessertGame;
use dessert_clicker::input::{pixel_to_cell, ClickState, InputEvent};
use dessert_clicker::logging;
use ratzilla::event::{KeyCode, MouseButton, MouseEventKind};
use ratzilla::ratatui::Terminal;
use ratzilla::{DomBackend, WebRenderer};

/// Map a mouse position to a terminal cell using the grid container's
/// bounding rect.
fn dom_pixel_to_cell(mouse_x: u32, mouse_y: u32, cs: &ClickState) -> Option<(u16, u16)> {
    let window = web_sys::window()?;
    let document = window.document()?;

    // DomBackend creates a <div> as the grid container inside <body>.
    let grid = document.query_selector("body > div").ok()??;
    let rect = grid.get_bounding_client_rect();

    let col = pixel_to_cell(mouse_x as f64 - rect.left(), rect.width(), cs.terminal_cols)?;
    let row = pixel_to_cell(mouse_y as f64 - rect.top(), rect.height(), cs.terminal_rows)?;
    Some((col, row))
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn main() -> io::Result<()> {
    console_error_panic_hook::set_once();

    let catalog = Catalog::builtin().map_err(|e| {
        logging::warn(&e.to_string());
        io::Error::new(io::ErrorKind::InvalidData, e)
    })?;
    logging::info(&format!("loaded {} desserts", catalog.len()));

    let game = Rc::new(RefCell::new(DessertGame::new(catalog)));
    let click_state = Rc::new(RefCell::new(ClickState::new()));
    let backend = DomBackend::new()?;
    let terminal = Terminal::new(backend)?;

    // Mouse/touch click handler
    terminal.on_mouse_event({
        let game = game.clone();
        let click_state = click_state.clone();
        move |mouse_event| {
            if mouse_event.event != MouseEventKind::Pressed
                || mouse_event.button != MouseButton::Left
            {
                return;
            }

            let action = {
                let cs = click_state.borrow();
                if cs.terminal_rows == 0 || cs.terminal_cols == 0 {
                    return;
                }
                dom_pixel_to_cell(mouse_event.x, mouse_event.y, &cs)
                    .and_then(|(col, row)| cs.hit_test(col, row))
            };

            if let Some(action) = action {
                game.borrow_mut().handle_input(&InputEvent::Click(action));
            }
        }
    });

    // Keyboard handler
    terminal.on_key_event({
        let game = game.clone();
        move |key_event| {
            if let KeyCode::Char(c) = key_event.code {
                game.borrow_mut().handle_input(&InputEvent::Key(c));
            }
        }
    });

    terminal.draw_web({
        let last_frame: Cell<Option<f64>> = Cell::new(None);
        move |f| {
            let now = now_ms();
            // Clamp so a backgrounded tab doesn't skip a whole notice at once.
            let elapsed = last_frame
                .replace(Some(now))
                .map(|prev| (now - prev).clamp(0.0, 500.0))
                .unwrap_or(0.0);
            game.borrow_mut().tick(elapsed);

            let size = f.area();
            click_state.borrow_mut().reset(size.width, size.height);
            game.borrow().render(f, size, &click_state);
        }
    });

    Ok(())
}
