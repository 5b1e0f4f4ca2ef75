//! Pure rendering of the controller view-model into console lines.

use dubdesk_core::{AppViewModel, ToastTone};

use super::constants::BAR_WIDTH;

/// Renders one frame. Once a completed page has replaced the document, the
/// frame is exactly that page content and nothing else.
pub fn render(view: &AppViewModel) -> Vec<String> {
    if let Some(page) = &view.completed_page {
        return vec![page.clone()];
    }

    let mut lines = Vec::new();

    if let Some(button) = &view.purge_button {
        if !button.enabled {
            lines.push("(purge running...)".to_string());
        }
    }

    if let Some(toast) = &view.toast {
        let marker = match toast.tone {
            ToastTone::Success => "✅",
            ToastTone::Error => "❌",
        };
        lines.push(format!("[{marker}] {}", toast.message));
    }

    if let Some(progress) = &view.progress {
        lines.push(format!(
            "[{}] {:>3}% {}",
            bar(progress.percent),
            progress.percent,
            progress.label
        ));
    }

    if let Some(log) = &view.log {
        for entry in log {
            lines.push(format!("  {entry}"));
        }
    }

    lines
}

fn bar(percent: u8) -> String {
    let filled = usize::from(percent).min(100) * BAR_WIDTH / 100;
    let mut bar = String::with_capacity(BAR_WIDTH);
    for index in 0..BAR_WIDTH {
        bar.push(if index < filled { '#' } else { '.' });
    }
    bar
}
