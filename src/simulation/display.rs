//! Where turn narration and map frames go

/// Write-only, order-preserving output for the turn loop
pub trait DisplaySink {
    fn println(&mut self, line: &str);

    /// Show one rendered map frame
    fn draw(&mut self, rows: &[String]) {
        for row in rows {
            self.println(row);
        }
    }
}

/// Prints everything to stdout
#[derive(Debug, Default)]
pub struct StdoutDisplay;

impl DisplaySink for StdoutDisplay {
    fn println(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Keeps lines and frames in memory, for tests and summaries
#[derive(Debug, Default)]
pub struct RecordingDisplay {
    pub lines: Vec<String>,
    pub frames: Vec<Vec<String>>,
}

impl RecordingDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl DisplaySink for RecordingDisplay {
    fn println(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    fn draw(&mut self, rows: &[String]) {
        self.frames.push(rows.to_vec());
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullDisplay;

impl DisplaySink for NullDisplay {
    fn println(&mut self, _line: &str) {}

    fn draw(&mut self, _rows: &[String]) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_keeps_order() {
        let mut display = RecordingDisplay::new();
        display.println("first");
        display.draw(&["..".to_string()]);
        display.println("second");
        assert_eq!(display.lines, vec!["first", "second"]);
        assert_eq!(display.frames.len(), 1);
        assert!(display.contains("sec"));
    }
}
