use std::time::Duration;

use crate::view_model::{AppViewModel, ProgressView, PurgeButtonView, ToastView};

/// Interval between simulated-progress ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(1000);

/// How long a toast stays visible once shown.
pub const TOAST_HIDE_DELAY: Duration = Duration::from_millis(4000);

/// Prefix of the toast shown when the purge call fails in transport.
pub const PURGE_ERROR_PREFIX: &str = "Erreur purge: ";

/// Progress label set when a submission is accepted, before the first tick.
pub const START_LABEL: &str = "⏳ Démarrage du traitement...";

/// Progress label and log line for a settled, completed submission.
pub const DONE_LABEL: &str = "✅ Traitement terminé";

/// Progress label for a submission that failed in transport.
pub const ERROR_LABEL: &str = "❌ Erreur";

/// One entry of the fixed simulated-progress sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    pub percent: u8,
    pub label: &'static str,
}

/// The fixed simulated-progress sequence, consumed one entry per tick.
///
/// The labels name the stages of the server-side dubbing pipeline the
/// animation stands in for; the animation itself never reflects the real
/// job's state.
pub const PROGRESS_STEPS: [ProgressStep; 6] = [
    ProgressStep {
        percent: 10,
        label: "📥 Téléchargement de la vidéo",
    },
    ProgressStep {
        percent: 30,
        label: "🎧 Transcription audio",
    },
    ProgressStep {
        percent: 60,
        label: "🌐 Traduction des segments",
    },
    ProgressStep {
        percent: 80,
        label: "🔊 Génération de la voix",
    },
    ProgressStep {
        percent: 95,
        label: "🎬 Fusion audio/vidéo",
    },
    ProgressStep {
        percent: 100,
        label: "📦 Finalisation",
    },
];

/// Which optional affordances exist on the mounted page.
///
/// The submission form, progress panel, and log are owned by the controller
/// and always exist; only the purge button and the toast region are optional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChrome {
    pub purge_button: bool,
    pub toast: bool,
}

impl Default for PageChrome {
    fn default() -> Self {
        Self {
            purge_button: true,
            toast: true,
        }
    }
}

/// Visual tone of a toast message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastTone {
    Success,
    Error,
}

/// Terminal outcome of one HTTP call as seen by the controller.
///
/// Any completed response counts as `Completed`, whatever its status code;
/// the server embeds its own errors in the body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallResult {
    /// The call completed and its body was read as text.
    Completed(String),
    /// The call could not complete; the payload is a displayable description.
    TransportFailed(String),
}

/// One captured form field, submitted verbatim. Field content is not
/// validated here; that is the server's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ToastSlot {
    message: String,
    tone: ToastTone,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct ProgressPanel {
    visible: bool,
    percent: u8,
    label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    chrome: PageChrome,
    purge_busy: bool,
    toast: Option<ToastSlot>,
    toast_generation: u64,
    panel: ProgressPanel,
    log_visible: bool,
    log: Vec<String>,
    submitting: bool,
    next_step: usize,
    ticker_running: bool,
    completed_page: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_chrome(PageChrome::default())
    }
}

impl AppState {
    /// Controller for a page carrying the full chrome.
    pub fn new() -> Self {
        Self::default()
    }

    /// Controller for a page where some optional affordances are absent.
    pub fn with_chrome(chrome: PageChrome) -> Self {
        Self {
            chrome,
            purge_busy: false,
            toast: None,
            toast_generation: 0,
            panel: ProgressPanel::default(),
            log_visible: false,
            log: Vec::new(),
            submitting: false,
            next_step: 0,
            ticker_running: false,
            completed_page: None,
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            purge_button: self.chrome.purge_button.then(|| PurgeButtonView {
                enabled: !self.purge_busy,
            }),
            toast: self.toast.as_ref().map(|toast| ToastView {
                message: toast.message.clone(),
                tone: toast.tone,
            }),
            progress: self.panel.visible.then(|| ProgressView {
                percent: self.panel.percent,
                label: self.panel.label.clone(),
            }),
            log: self.log_visible.then(|| self.log.clone()),
            accepts_submission: !self.submitting && self.completed_page.is_none(),
            completed_page: self.completed_page.clone(),
        }
    }

    /// True once the page content has been replaced by a server response.
    pub fn page_replaced(&self) -> bool {
        self.completed_page.is_some()
    }

    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn chrome(&self) -> PageChrome {
        self.chrome
    }

    pub(crate) fn purge_busy(&self) -> bool {
        self.purge_busy
    }

    pub(crate) fn begin_purge(&mut self) {
        self.purge_busy = true;
        self.dirty = true;
    }

    pub(crate) fn settle_purge(&mut self) {
        self.purge_busy = false;
        self.dirty = true;
    }

    /// Overwrites the toast slot and returns the generation a hide must be
    /// scheduled for, or `None` when the page has no toast region.
    pub(crate) fn show_toast(&mut self, message: String, tone: ToastTone) -> Option<u64> {
        if !self.chrome.toast {
            return None;
        }
        self.toast_generation += 1;
        self.toast = Some(ToastSlot {
            message,
            tone,
            generation: self.toast_generation,
        });
        self.dirty = true;
        Some(self.toast_generation)
    }

    /// Hides the toast only while `generation` still matches the displayed one.
    pub(crate) fn hide_toast(&mut self, generation: u64) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| toast.generation == generation)
        {
            self.toast = None;
            self.dirty = true;
        }
    }

    pub(crate) fn submitting(&self) -> bool {
        self.submitting
    }

    pub(crate) fn begin_submission(&mut self) {
        self.submitting = true;
        self.panel = ProgressPanel {
            visible: true,
            percent: 0,
            label: START_LABEL.to_string(),
        };
        self.log_visible = true;
        self.log.clear();
        self.next_step = 0;
        self.ticker_running = true;
        self.dirty = true;
    }

    pub(crate) fn ticker_running(&self) -> bool {
        self.ticker_running
    }

    /// Advances one simulated step; true when the sequence is now exhausted.
    pub(crate) fn advance_step(&mut self) -> bool {
        // ticker_running holds only while next_step is in bounds.
        let step = PROGRESS_STEPS[self.next_step];
        self.panel.percent = step.percent;
        self.panel.label = step.label.to_string();
        self.log.push(step.label.to_string());
        self.next_step += 1;
        let exhausted = self.next_step == PROGRESS_STEPS.len();
        if exhausted {
            self.ticker_running = false;
        }
        self.dirty = true;
        exhausted
    }

    /// Clears the running flag; true when a stop must actually be issued.
    pub(crate) fn halt_ticker(&mut self) -> bool {
        std::mem::replace(&mut self.ticker_running, false)
    }

    pub(crate) fn finish_submission(&mut self, page: String) {
        self.panel.percent = 100;
        self.panel.label = DONE_LABEL.to_string();
        self.log.push(DONE_LABEL.to_string());
        self.completed_page = Some(page);
        self.submitting = false;
        self.dirty = true;
    }

    pub(crate) fn fail_submission(&mut self, describe: &str) {
        self.panel.label = ERROR_LABEL.to_string();
        self.log.push(format!("❌ {describe}"));
        self.submitting = false;
        self.dirty = true;
    }
}
