//! Falling snow drawn behind the UI. Flake positions are a function of the
//! elapsed time only; nothing here knows about mailboxes.

use std::time::Duration;

use rand::{Rng, SeedableRng, rngs::StdRng};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

pub const DEFAULT_FLAKES: usize = 20;
const FLAKE: &str = "❄";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flake {
    /// Horizontal position, 0.0..1.0 of the width.
    pub left: f64,
    /// Seconds for one fall, 2..5.
    pub duration: f64,
    /// Seconds before the first fall starts, 0..2.
    pub delay: f64,
}

impl Flake {
    /// Vertical position as a fraction of the height, from -0.1 to 1.1.
    /// `None` while the flake is still waiting for its delay.
    pub fn fall_fraction(&self, elapsed: Duration) -> Option<f64> {
        let t = elapsed.as_secs_f64() - self.delay;
        if t < 0.0 {
            return None;
        }
        let progress = (t % self.duration) / self.duration;
        Some(-0.1 + 1.2 * progress)
    }

    /// Cell inside `area` the flake occupies at `elapsed`, if any.
    pub fn cell(&self, area: Rect, elapsed: Duration) -> Option<(u16, u16)> {
        if area.is_empty() {
            return None;
        }
        let y = self.fall_fraction(elapsed)?;
        if !(0.0..1.0).contains(&y) {
            return None;
        }
        let col = (self.left * f64::from(area.width)) as u16;
        let row = (y * f64::from(area.height)) as u16;
        Some((
            area.x + col.min(area.width - 1),
            area.y + row.min(area.height - 1),
        ))
    }
}

#[derive(Debug, Clone, Default)]
pub struct Snowfall {
    flakes: Vec<Flake>,
}

impl Snowfall {
    pub fn new(count: usize, seed: Option<u64>) -> Self {
        let mut rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        let flakes = (0..count)
            .map(|_| Flake {
                left: rng.random_range(0.0..1.0),
                duration: rng.random_range(2.0..5.0),
                delay: rng.random_range(0.0..2.0),
            })
            .collect();
        Self { flakes }
    }

    pub fn flakes(&self) -> &[Flake] {
        &self.flakes
    }

    pub fn at(&self, elapsed: Duration) -> SnowLayer<'_> {
        SnowLayer {
            snow: self,
            elapsed,
        }
    }
}

/// One frame of the snowfall. Only blank cells are painted, so text drawn
/// earlier in the frame stays readable.
pub struct SnowLayer<'a> {
    snow: &'a Snowfall,
    elapsed: Duration,
}

impl Widget for SnowLayer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for flake in &self.snow.flakes {
            let Some((x, y)) = flake.cell(area, self.elapsed) else {
                continue;
            };
            let Some(cell) = buf.cell_mut((x, y)) else {
                continue;
            };
            if cell.symbol() == " " {
                cell.set_symbol(FLAKE)
                    .set_style(Style::default().fg(Color::White));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flake(left: f64, duration: f64, delay: f64) -> Flake {
        Flake {
            left,
            duration,
            delay,
        }
    }

    #[test]
    fn test_generated_flakes_stay_in_ranges() {
        let snow = Snowfall::new(DEFAULT_FLAKES, Some(9));
        assert_eq!(snow.flakes().len(), DEFAULT_FLAKES);
        for f in snow.flakes() {
            assert!((0.0..1.0).contains(&f.left));
            assert!((2.0..5.0).contains(&f.duration));
            assert!((0.0..2.0).contains(&f.delay));
        }
    }

    #[test]
    fn test_hidden_until_delay_passes() {
        let f = flake(0.5, 2.0, 1.0);
        assert_eq!(f.fall_fraction(Duration::from_millis(500)), None);
        let start = f.fall_fraction(Duration::from_secs(1)).unwrap();
        assert!((start - -0.1).abs() < 1e-9);
    }

    #[test]
    fn test_fall_loops_over_duration() {
        let f = flake(0.5, 2.0, 0.0);
        let half = f.fall_fraction(Duration::from_secs(1)).unwrap();
        assert!((half - 0.5).abs() < 1e-9);
        let again = f.fall_fraction(Duration::from_secs(3)).unwrap();
        assert!((again - half).abs() < 1e-9);
    }

    #[test]
    fn test_cell_maps_into_area() {
        let f = flake(0.5, 2.0, 0.0);
        let area = Rect::new(10, 5, 20, 10);
        // Fraction 0.56 -> row 5 of 10.
        assert_eq!(f.cell(area, Duration::from_millis(1100)), Some((20, 10)));
        // Above the top edge at the very start.
        assert_eq!(f.cell(area, Duration::ZERO), None);
        assert_eq!(f.cell(Rect::default(), Duration::from_secs(1)), None);
    }

    #[test]
    fn test_layer_keeps_existing_text() {
        let snow = Snowfall {
            flakes: vec![flake(0.0, 2.0, 0.0), flake(0.5, 2.0, 0.0)],
        };
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        buf.set_string(0, 1, "ab", Style::default());

        // Both flakes sit on row 1 at t=1.1s.
        snow.at(Duration::from_millis(1100)).render(area, &mut buf);

        assert_eq!(buf[(0, 1)].symbol(), "a");
        assert_eq!(buf[(2, 1)].symbol(), FLAKE);
    }
}
