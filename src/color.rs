use crate::config::ColorConfig;
use crate::error::{Error, Result};

/// Hands out one ordinal per shape. The ordinal doubles as the shape's debug color and as
/// the seed of its identity token, so a single sequence must serve a whole diagram.
///
/// Ordinals only grow. Once the next step would overflow `u32` the sequence is exhausted and
/// every further request fails; only the rendered color is reduced to 24 bits.
#[derive(Debug, Clone)]
pub struct ColorSequence {
    current: Option<u32>,
    step: u32,
}

impl Default for ColorSequence {
    fn default() -> Self {
        Self::from_config(&ColorConfig::default())
    }
}

impl ColorSequence {
    pub fn new(start: u32, step: u32) -> Self {
        Self {
            current: Some(start),
            step: step.max(1),
        }
    }

    pub fn from_config(config: &ColorConfig) -> Self {
        Self::new(config.start, config.step)
    }

    pub fn next_value(&mut self) -> Result<u32> {
        let value = self
            .current
            .ok_or(Error::IllegalState("color sequence exhausted"))?;
        self.current = value.checked_add(self.step);
        Ok(value)
    }
}

/// `#RRGGBB` form of a color ordinal, as accepted in Graphviz attributes.
pub fn as_html(color: u32) -> String {
    format!("#{:06X}", color & 0x00FF_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_is_monotonic() {
        let mut seq = ColorSequence::new(1, 2);
        assert_eq!(seq.next_value().unwrap(), 1);
        assert_eq!(seq.next_value().unwrap(), 3);
        assert_eq!(seq.next_value().unwrap(), 5);
    }

    #[test]
    fn wide_step_keeps_growing_past_24_bits() {
        let mut seq = ColorSequence::new(1, 0x0080_0000);
        let values: Vec<u32> = (0..3).map(|_| seq.next_value().unwrap()).collect();
        assert_eq!(values, vec![1, 8_388_609, 16_777_217]);
        assert_eq!(as_html(values[2]), "#000001");
    }

    #[test]
    fn overflow_exhausts_the_sequence() {
        let mut seq = ColorSequence::new(u32::MAX - 1, 1);
        assert_eq!(seq.next_value().unwrap(), u32::MAX - 1);
        assert_eq!(seq.next_value().unwrap(), u32::MAX);
        assert!(matches!(seq.next_value(), Err(Error::IllegalState(_))));
        assert!(matches!(seq.next_value(), Err(Error::IllegalState(_))));
    }

    #[test]
    fn html_is_zero_padded_upper_hex() {
        assert_eq!(as_html(1), "#000001");
        assert_eq!(as_html(0xABCDEF), "#ABCDEF");
        assert_eq!(as_html(255), "#0000FF");
    }
}
