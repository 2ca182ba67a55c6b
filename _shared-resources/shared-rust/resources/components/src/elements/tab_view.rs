// Tab View Component
// Header strip with a spring-animated indicator, showing only the active tab's content
//
// Layout:
//      Profile       Projects       Links
//   ━━━━━━━━━━━━━━──────────────────────────   <- indicator slides along the track
//   ┌ content of the active tab ─────────────┐
//   │                                        │

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, StatefulWidget, Widget, Wrap},
    Frame,
};
use std::time::Duration;

use crate::core::{validate_tabs, SelectionState, TabDescriptor, TabViewError, ThemeColors};
use crate::utilities::{hex_color, SpringConfig, TabIndicatorAnimator};

/// Title color of the active tab when neither an override nor a palette is given
pub const DEFAULT_ACTIVE_COLOR: Color = hex_color(0x007AFF);
/// Title color of inactive tabs when neither an override nor a palette is given
pub const DEFAULT_INACTIVE_COLOR: Color = hex_color(0x8E8E93);
/// Indicator track color without a palette
pub const DEFAULT_TRACK_COLOR: Color = hex_color(0xE5E5EA);

/// Rows used by the header strip: one for titles, one for the indicator track
pub const HEADER_HEIGHT: u16 = 2;

const TRACK_SYMBOL: &str = "─";
const INDICATOR_SYMBOL: &str = "━";

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Content                                                │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Anything that can be shown as a tab's content
///
/// Only the active tab's content is rendered; the others are not touched at all.
pub trait TabContent {
    fn render(&self, area: Rect, buf: &mut Buffer);
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                         Options                                                │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Optional style overrides for a tab view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabViewOptions {
    pub active_color: Option<Color>,
    pub inactive_color: Option<Color>,
    pub indicator_color: Option<Color>,
}

/// Colors a tab view actually draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTabColors {
    pub active: Color,
    pub inactive: Color,
    pub indicator: Color,
    pub track: Color,
    pub header_background: Option<Color>,
    pub content_background: Option<Color>,
}

impl TabViewOptions {
    pub fn with_active_color(mut self, color: Color) -> Self {
        self.active_color = Some(color);
        self
    }

    pub fn with_inactive_color(mut self, color: Color) -> Self {
        self.inactive_color = Some(color);
        self
    }

    pub fn with_indicator_color(mut self, color: Color) -> Self {
        self.indicator_color = Some(color);
        self
    }

    /// Work out the final colors
    ///
    /// Explicit overrides win, then the palette, then the built-in defaults.
    /// The indicator falls back to the active title color.
    pub fn resolve(&self, palette: Option<&ThemeColors>) -> ResolvedTabColors {
        let active = self
            .active_color
            .or(palette.map(|p| p.tab_active))
            .unwrap_or(DEFAULT_ACTIVE_COLOR);
        let inactive = self
            .inactive_color
            .or(palette.map(|p| p.tab_inactive))
            .unwrap_or(DEFAULT_INACTIVE_COLOR);
        let indicator = self
            .indicator_color
            .or(palette.map(|p| p.accent))
            .unwrap_or(active);

        ResolvedTabColors {
            active,
            inactive,
            indicator,
            track: palette.map(|p| p.border).unwrap_or(DEFAULT_TRACK_COLOR),
            header_background: palette.map(|p| p.card_background),
            content_background: palette.map(|p| p.background),
        }
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                          Layout                                                │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Header geometry for one render, derived from the current width and tab count
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TabLayout {
    layout_width: u16,
    tab_count: usize,
}

impl TabLayout {
    pub fn new(layout_width: u16, tab_count: usize) -> Self {
        Self {
            layout_width,
            tab_count: tab_count.max(1),
        }
    }

    pub fn layout_width(&self) -> u16 {
        self.layout_width
    }

    /// Width of each tab header
    pub fn header_width(&self) -> f32 {
        self.layout_width as f32 / self.tab_count as f32
    }

    /// Start column (relative to the strip) and width of a header cell
    /// Cell edges are rounded so the cells tile the strip without gaps
    pub fn header_span(&self, index: usize) -> (u16, u16) {
        let width = self.header_width();
        let start = (index as f32 * width).round() as u16;
        let end = (((index + 1) as f32 * width).round() as u16).min(self.layout_width);
        (start, end.saturating_sub(start))
    }

    /// Horizontal indicator offset for a progress value
    /// Clamped so the indicator never leaves the strip, even while the spring overshoots
    pub fn indicator_offset(&self, progress: f32) -> f32 {
        let max_offset = (self.layout_width as f32 - self.header_width()).max(0.0);
        (progress * self.header_width()).clamp(0.0, max_offset)
    }

    /// Start column and width of the indicator for a progress value
    pub fn indicator_span(&self, progress: f32) -> (u16, u16) {
        let offset = self.indicator_offset(progress);
        let start = (offset.round() as u16).min(self.layout_width);
        let end = ((offset + self.header_width()).round() as u16).min(self.layout_width);
        (start, end.saturating_sub(start))
    }

    /// Which header a column (relative to the strip) falls into
    pub fn tab_at(&self, column: u16) -> Option<usize> {
        if column >= self.layout_width {
            return None;
        }
        (0..self.tab_count).find(|&index| {
            let (start, width) = self.header_span(index);
            column >= start && column < start + width
        })
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                           State                                                │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Mutable state owned by one tab view instance
///
/// Created when the view mounts and dropped with it. The indicator is only
/// advanced by `tick`, so dropping the state cancels any transition in flight.
#[derive(Debug, Clone)]
pub struct TabViewState {
    selection: SelectionState,
    animator: TabIndicatorAnimator,
    /// Header strip of the last render (for click detection)
    header_area: Option<Rect>,
}

impl TabViewState {
    /// Mount a tab view over a tab set, starting on the first tab
    pub fn mount<C>(tabs: &[TabDescriptor<C>], spring: SpringConfig) -> Result<Self, TabViewError> {
        validate_tabs(tabs)?;
        spring.validate()?;

        Ok(Self {
            selection: SelectionState::new(tabs.len()),
            animator: TabIndicatorAnimator::new(spring, 0.0),
            header_area: None,
        })
    }

    pub fn active_index(&self) -> usize {
        self.selection.active_index()
    }

    pub fn tab_count(&self) -> usize {
        self.selection.tab_count()
    }

    /// Current (animated) indicator position in tab units
    pub fn progress(&self) -> f32 {
        self.animator.value()
    }

    pub fn animator(&self) -> &TabIndicatorAnimator {
        &self.animator
    }

    /// Whether the indicator still needs frames
    pub fn is_animating(&self) -> bool {
        !self.animator.is_settled()
    }

    /// Select a tab
    ///
    /// The active index (and therefore the rendered content) changes right
    /// away; the indicator is retargeted and catches up over the next ticks.
    /// Out-of-range indices are ignored and return false.
    pub fn select_tab(&mut self, index: usize) -> bool {
        if index >= self.tab_count() {
            tracing::warn!(index, tab_count = self.tab_count(), "ignoring out-of-range tab selection");
            return false;
        }

        let target = index as f32;
        if index == self.active_index() && self.animator.target() == target {
            return true;
        }

        let previous = self.active_index();
        self.selection.select(index);
        self.animator.retarget(target);
        tracing::debug!(from = previous, to = index, progress = self.animator.value(), "tab selected");
        true
    }

    /// Navigate to the next tab (wraps around)
    pub fn navigate_next(&mut self) -> bool {
        self.select_tab(self.selection.next_index())
    }

    /// Navigate to the previous tab (wraps around)
    pub fn navigate_previous(&mut self) -> bool {
        self.select_tab(self.selection.previous_index())
    }

    /// Adopt a replaced tab set
    /// Clamps the selection if the set shrank past it
    pub fn sync_tabs<C>(&mut self, tabs: &[TabDescriptor<C>]) -> Result<(), TabViewError> {
        validate_tabs(tabs)?;
        self.resize_to(tabs.len());
        Ok(())
    }

    fn resize_to(&mut self, tab_count: usize) {
        if tab_count == self.tab_count() {
            return;
        }
        if self.selection.resize_to(tab_count) {
            tracing::debug!(tab_count, active = self.active_index(), "tab set shrank, selection clamped");
            self.animator.retarget(self.active_index() as f32);
        }
    }

    /// Advance the indicator animation by one frame
    /// Returns true while the indicator is still moving
    pub fn tick(&mut self, dt: Duration) -> bool {
        self.animator.step(dt);
        self.is_animating()
    }

    /// Header under a screen position, if any (uses the last rendered header strip)
    pub fn tab_at(&self, column: u16, row: u16) -> Option<usize> {
        let area = self.header_area?;
        if row < area.y || row >= area.y + area.height || column < area.x {
            return None;
        }
        TabLayout::new(area.width, self.tab_count()).tab_at(column - area.x)
    }
}

// ┌────────────────────────────────────────────────────────────────────────────────────────────────┐
// │                                          Widget                                                │
// └────────────────────────────────────────────────────────────────────────────────────────────────┘

/// Tab view widget, built fresh from the caller's tabs on every render
pub struct TabView<'a, C> {
    tabs: &'a [TabDescriptor<C>],
    options: TabViewOptions,
    palette: Option<&'a ThemeColors>,
}

impl<'a, C: TabContent> TabView<'a, C> {
    /// Validate the tab set and build the widget
    pub fn try_new(tabs: &'a [TabDescriptor<C>]) -> Result<Self, TabViewError> {
        validate_tabs(tabs)?;
        Ok(Self {
            tabs,
            options: TabViewOptions::default(),
            palette: None,
        })
    }

    pub fn options(mut self, options: TabViewOptions) -> Self {
        self.options = options;
        self
    }

    pub fn palette(mut self, palette: Option<&'a ThemeColors>) -> Self {
        self.palette = palette;
        self
    }

    fn render_titles(&self, strip: Rect, buf: &mut Buffer, layout: &TabLayout, active: usize, colors: &ResolvedTabColors) {
        for (index, tab) in self.tabs.iter().enumerate() {
            let (start, width) = layout.header_span(index);
            if width == 0 {
                continue;
            }
            let cell = Rect {
                x: strip.x + start,
                y: strip.y,
                width,
                height: 1,
            };

            let style = if index == active {
                Style::default().fg(colors.active).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.inactive)
            };

            Paragraph::new(Line::from(Span::styled(tab.title.as_str(), style)))
                .alignment(Alignment::Center)
                .render(cell, buf);
        }
    }

    fn render_indicator(&self, track: Rect, buf: &mut Buffer, layout: &TabLayout, progress: f32, colors: &ResolvedTabColors) {
        let track_style = Style::default().fg(colors.track);
        for x in track.x..track.x + track.width {
            buf[(x, track.y)].set_symbol(TRACK_SYMBOL).set_style(track_style);
        }

        let (start, width) = layout.indicator_span(progress);
        let indicator_style = Style::default().fg(colors.indicator);
        for x in track.x + start..track.x + start + width {
            buf[(x, track.y)].set_symbol(INDICATOR_SYMBOL).set_style(indicator_style);
        }
    }
}

impl<C: TabContent> StatefulWidget for TabView<'_, C> {
    type State = TabViewState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        // The tab set may have been replaced since the last render
        state.resize_to(self.tabs.len());

        let area = area.intersection(buf.area);
        if area.width == 0 || area.height == 0 {
            state.header_area = None;
            return;
        }

        let colors = self.options.resolve(self.palette);
        let layout = TabLayout::new(area.width, self.tabs.len());
        let active = state.active_index();

        let header = Rect {
            height: area.height.min(HEADER_HEIGHT),
            ..area
        };
        state.header_area = Some(header);

        if let Some(bg) = colors.header_background {
            buf.set_style(header, Style::default().bg(bg));
        }
        self.render_titles(header, buf, &layout, active, &colors);

        if header.height >= HEADER_HEIGHT {
            let track = Rect {
                y: header.y + 1,
                height: 1,
                ..header
            };
            self.render_indicator(track, buf, &layout, state.progress(), &colors);
        }

        let content = Rect {
            y: area.y + header.height,
            height: area.height - header.height,
            ..area
        };
        if content.height == 0 {
            return;
        }
        if let Some(bg) = colors.content_background {
            buf.set_style(content, Style::default().bg(bg));
        }
        self.tabs[active].content.render(content, buf);
    }
}

/// Placeholder drawn instead of a tab view whose configuration is invalid
pub fn render_configuration_error(f: &mut Frame, area: Rect, error: &TabViewError) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Configuration error ");

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Fix the tab configuration and restart.",
            Style::default().fg(Color::Gray),
        )),
    ])
    .wrap(Wrap { trim: true })
    .block(block);

    f.render_widget(message, area);
}
