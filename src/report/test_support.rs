use std::sync::Mutex;

use super::Console;

/// Collects report lines in write order.
#[derive(Debug, Default)]
pub(crate) struct CaptureConsole {
    lines: Mutex<Vec<String>>,
}

impl CaptureConsole {
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.clone())
            .unwrap_or_default()
    }
}

impl Console for CaptureConsole {
    fn line(&self, line: &str) {
        if let Ok(mut lines) = self.lines.lock() {
            lines.push(line.to_owned());
        }
    }
}
