/// Dessert Clicker: sell desserts, unlock pricier ones, share the totals.

pub mod actions;
pub mod catalog;
pub mod notice;
pub mod render;
pub mod share;
pub mod state;
pub mod store;

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::Rect;
use ratzilla::ratatui::Frame;

use crate::input::{ClickState, InputEvent};
use crate::logging;

use actions::DessertAction;
use catalog::Catalog;
use notice::NoticeBoard;
use share::{ShareError, ShareOutcome, SharePlatform};
use state::SalesLog;
use store::DessertStore;

/// How long the dessert art stays in its "pressed" frame after a sale.
pub const CLICK_FLASH_MS: f64 = 150.0;

/// Share capability backed by the browser: `navigator.share` for the
/// chooser, the on-screen notice line for fallbacks.
pub struct BrowserShare {
    notices: Rc<RefCell<NoticeBoard>>,
}

fn post_notice(notices: &RefCell<NoticeBoard>, message: &str) {
    logging::warn(message);
    notices.borrow_mut().show(message);
}

impl SharePlatform for BrowserShare {
    /// A promise that later rejects (other than a dismissal) posts the
    /// same notice as a missing handler.
    fn present_share_chooser(&self, text: &str) -> Result<(), ShareError> {
        let promise = share::navigator_share(text)?;
        let notices = self.notices.clone();
        share::watch_share(promise, move |_| {
            post_notice(&notices, share::SHARING_NOT_AVAILABLE)
        });
        Ok(())
    }

    fn show_notice(&self, message: &str) {
        post_notice(&self.notices, message);
    }
}

pub struct DessertGame {
    pub store: DessertStore,
    /// Unlock history, appended by a store observer.
    pub sales_log: Rc<RefCell<SalesLog>>,
    pub notices: Rc<RefCell<NoticeBoard>>,
    platform: BrowserShare,
    /// Remaining "pressed" time for the dessert art.
    pub click_flash_ms: f64,
}

impl DessertGame {
    pub fn new(catalog: Catalog) -> Self {
        let mut store = DessertStore::new(catalog);
        let sales_log = Rc::new(RefCell::new(SalesLog::new(store.state())));
        store.subscribe({
            let sales_log = sales_log.clone();
            move |state| {
                if sales_log.borrow_mut().record(state) {
                    logging::info(&format!(
                        "unlocked {} at {} sold",
                        state.current_dessert.name, state.desserts_sold
                    ));
                }
            }
        });
        let notices = Rc::new(RefCell::new(NoticeBoard::new()));
        Self {
            store,
            sales_log,
            platform: BrowserShare {
                notices: notices.clone(),
            },
            notices,
            click_flash_ms: 0.0,
        }
    }

    /// Handle an input event. Returns true if the event was consumed.
    pub fn handle_input(&mut self, event: &InputEvent) -> bool {
        let action = match event {
            InputEvent::Key(c) => match DessertAction::from_key(*c) {
                Some(a) => a,
                None => return false,
            },
            InputEvent::Click(a) => *a,
        };
        match action {
            DessertAction::Sell => {
                self.store.on_dessert_clicked();
                self.click_flash_ms = CLICK_FLASH_MS;
            }
            DessertAction::Share => {
                if share::share_sold_desserts(self.store.state(), &self.platform)
                    == ShareOutcome::Presented
                {
                    logging::info("share sheet presented");
                }
            }
        }
        true
    }

    /// Advance timers by `elapsed_ms` of wall-clock time.
    pub fn tick(&mut self, elapsed_ms: f64) {
        self.click_flash_ms = (self.click_flash_ms - elapsed_ms).max(0.0);
        self.notices.borrow_mut().tick(elapsed_ms);
    }

    pub fn render(&self, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
        render::render(self, f, area, click_state);
    }
}
