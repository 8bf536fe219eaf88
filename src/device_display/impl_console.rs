use crate::device_display::interface::DeviceDisplay;
use crate::session::render::{View, LOADING_TEXT};
use std::error::Error;

pub struct DeviceDisplayConsole {
    last_frame: Option<String>,
}

impl DeviceDisplayConsole {
    pub fn new() -> Self {
        Self { last_frame: None }
    }
}

pub fn view_lines(view: &View) -> Vec<String> {
    if view.loading {
        return vec![LOADING_TEXT.to_string()];
    }

    let mut lines = vec![view.title.clone()];

    if let Some(status) = &view.status {
        lines.push(status.clone());
    }

    match &view.active_image {
        Some(image) => lines.push(format!("Image: {}", image)),
        None => lines.push("No image selected".to_string()),
    }

    for row in &view.results {
        if row.best_guess {
            lines.push(format!("  {}  {}  (best guess)", row.label, row.confidence));
        } else {
            lines.push(format!("  {}  {}", row.label, row.confidence));
        }
    }

    if view.show_classify {
        if view.can_classify {
            lines.push("[classify]".to_string());
        } else {
            lines.push("[classify unavailable]".to_string());
        }
    }

    if !view.history.is_empty() {
        lines.push("Recent images:".to_string());
        for (index, image) in view.history.iter().enumerate() {
            lines.push(format!("  {}) {}", index + 1, image));
        }
    }

    lines
}

fn frame(lines: &[String]) -> String {
    let width = lines.iter().map(|line| line.chars().count()).max().unwrap_or(0);
    let border = "─".repeat(width + 2);

    let mut out = format!("┌{}┐\n", border);
    for line in lines {
        let padding = " ".repeat(width - line.chars().count());
        out.push_str(&format!("│ {}{} │\n", line, padding));
    }
    out.push_str(&format!("└{}┘", border));
    out
}

impl DeviceDisplay for DeviceDisplayConsole {
    fn init(&mut self) -> Result<(), Box<dyn Error + Send + Sync>> {
        Ok(())
    }

    fn show(&mut self, view: &View) -> Result<(), Box<dyn Error + Send + Sync>> {
        let frame = frame(&view_lines(view));

        // unchanged views are not printed again
        if self.last_frame.as_deref() != Some(frame.as_str()) {
            println!("{}", frame);
            self.last_frame = Some(frame);
        }

        Ok(())
    }
}
