// Animated Banner
// Floating, pulsing name banner shown at the top of the profile screen

use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Widget},
};

/// One full up-and-down float
const FLOAT_CYCLE: Duration = Duration::from_millis(4000);
/// One full pulse (grow, then shrink back)
const PULSE_CYCLE: Duration = Duration::from_millis(3000);

/// Rows the banner occupies
pub const BANNER_HEIGHT: u16 = 5;

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Position in `[0, 1)` within a repeating cycle
fn cycle_phase(elapsed: Duration, cycle: Duration) -> f32 {
    let cycle_ms = cycle.as_millis().max(1);
    (elapsed.as_millis() % cycle_ms) as f32 / cycle_ms as f32
}

/// Looping float and pulse animation driven by `tick`
///
/// The host only ticks it while the profile screen is visible, so it
/// freezes in place when another tab is active.
#[derive(Debug, Clone, Default)]
pub struct BannerAnimation {
    elapsed: Duration,
}

impl BannerAnimation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self, dt: Duration) {
        self.elapsed += dt;
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Vertical float in `[-1, 1]`: up during the first half, down during the second
    pub fn float(&self) -> f32 {
        let phase = cycle_phase(self.elapsed, FLOAT_CYCLE);
        if phase < 0.5 {
            -ease_in_out(phase * 2.0) * 2.0 + 1.0
        } else {
            ease_in_out((phase - 0.5) * 2.0) * 2.0 - 1.0
        }
    }

    /// Float rounded to whole rows
    pub fn row_offset(&self) -> i16 {
        self.float().round() as i16
    }

    /// Pulse scale in `[1.0, 1.1]`
    pub fn pulse(&self) -> f32 {
        let phase = cycle_phase(self.elapsed, PULSE_CYCLE);
        let eased = if phase < 0.5 {
            ease_in_out(phase * 2.0)
        } else {
            1.0 - ease_in_out((phase - 0.5) * 2.0)
        };
        1.0 + 0.1 * eased
    }

    /// Whether the pulse is near its peak
    pub fn is_emphasized(&self) -> bool {
        self.pulse() > 1.05
    }

    /// Draw `name` (letter-spaced while emphasized) and `tagline` centered in `area`
    pub fn render(&self, name: &str, tagline: Option<&str>, name_style: Style, tagline_style: Style, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, tagline_style);

        let (name_text, style) = if self.is_emphasized() {
            let spaced: Vec<String> = name.chars().map(String::from).collect();
            (spaced.join(" "), name_style.add_modifier(Modifier::REVERSED))
        } else {
            (name.to_string(), name_style)
        };

        let middle = area.y + area.height / 2;
        let name_row = (middle as i32 + self.row_offset() as i32)
            .clamp(area.y as i32, area.bottom() as i32 - 1) as u16;
        Paragraph::new(Line::from(name_text).style(style))
            .alignment(Alignment::Center)
            .render(Rect::new(area.x, name_row, area.width, 1), buf);

        if let Some(tagline) = tagline {
            let tagline_row = area.bottom() - 1;
            if tagline_row != name_row {
                Paragraph::new(Line::from(tagline).style(tagline_style))
                    .alignment(Alignment::Center)
                    .render(Rect::new(area.x, tagline_row, area.width, 1), buf);
            }
        }
    }
}
