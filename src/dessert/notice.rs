/// Transient one-line notices (toasts).

/// How long a notice stays on screen.
pub const NOTICE_DURATION_MS: f64 = 3_500.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub text: String,
    /// Time left before the notice disappears.
    pub remaining_ms: f64,
}

/// Holds at most one notice; a new one replaces the old.
#[derive(Default)]
pub struct NoticeBoard {
    current: Option<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, text: &str) {
        self.current = Some(Notice {
            text: text.to_string(),
            remaining_ms: NOTICE_DURATION_MS,
        });
    }

    pub fn tick(&mut self, elapsed_ms: f64) {
        if let Some(notice) = &mut self.current {
            notice.remaining_ms -= elapsed_ms;
            if notice.remaining_ms <= 0.0 {
                self.current = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}
