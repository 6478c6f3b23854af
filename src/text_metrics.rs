use crate::config::TextConfig;
use crate::geometry::Dimension;

/// Size oracle for label text. Images query it when they report port bands or name boxes.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Dimension;
}

/// Font-free measurer: every glyph is `font_size * char_width_factor` wide.
#[derive(Debug, Clone)]
pub struct DeterministicTextMeasurer {
    pub font_size: f64,
    pub char_width_factor: f64,
    pub line_height_factor: f64,
}

impl Default for DeterministicTextMeasurer {
    fn default() -> Self {
        Self::from_config(&TextConfig::default())
    }
}

impl DeterministicTextMeasurer {
    pub fn from_config(config: &TextConfig) -> Self {
        Self {
            font_size: config.font_size,
            char_width_factor: config.char_width_factor,
            line_height_factor: config.line_height_factor,
        }
    }

    fn lines(text: &str) -> Vec<String> {
        text.replace("<br/>", "\n")
            .replace("<br />", "\n")
            .replace("<br>", "\n")
            .split('\n')
            .map(|s| s.to_string())
            .collect()
    }
}

impl TextMeasurer for DeterministicTextMeasurer {
    fn measure(&self, text: &str) -> Dimension {
        if text.is_empty() {
            return Dimension::new(0.0, 0.0);
        }
        let lines = Self::lines(text);
        let font_size = self.font_size.max(1.0);
        let max_chars = lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        Dimension::new(
            max_chars as f64 * font_size * self.char_width_factor,
            lines.len() as f64 * font_size * self.line_height_factor,
        )
    }
}
