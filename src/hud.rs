//! Live ball counter display

/// Text output for the ball counter (a DOM label, the log, ...)
pub trait CounterSink {
    fn show(&mut self, text: &str);
}

/// Collects every shown line (tests, headless summaries)
impl CounterSink for Vec<String> {
    fn show(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

/// Writes counter changes to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl CounterSink for LogSink {
    fn show(&mut self, text: &str) {
        log::info!("{}", text);
    }
}

pub fn format_count(n: usize) -> String {
    format!("Balls on screen: {}", n)
}

/// Remembers the last value shown so the sink only hears about changes
#[derive(Debug, Default, Clone)]
pub struct Hud {
    shown: Option<usize>,
}

impl Hud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<usize> {
        self.shown
    }

    /// Push `live` to the sink if it differs from what is on screen
    pub fn sync<S: CounterSink + ?Sized>(&mut self, live: usize, sink: &mut S) -> bool {
        if self.shown == Some(live) {
            return false;
        }
        sink.show(&format_count(live));
        self.shown = Some(live);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format() {
        assert_eq!(format_count(25), "Balls on screen: 25");
        assert_eq!(format_count(0), "Balls on screen: 0");
    }

    #[test]
    fn test_sync_only_on_change() {
        let mut hud = Hud::new();
        let mut lines: Vec<String> = Vec::new();

        assert!(hud.sync(25, &mut lines));
        assert!(!hud.sync(25, &mut lines));
        assert!(hud.sync(22, &mut lines));
        assert!(!hud.sync(22, &mut lines));

        assert_eq!(lines, vec!["Balls on screen: 25", "Balls on screen: 22"]);
        assert_eq!(hud.shown(), Some(22));
    }
}
