//! TUI rendering for Kivaw using ratatui.

mod effects;
mod input;
mod theme;

pub use effects::faded_palette;
pub use input::{InputPump, apply_event, handle_events};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::border,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Padding, Paragraph, Wrap},
};

use kivaw_engine::{Action, App, Screen, has_back};

/// Width of the centered card the wizard is drawn in.
pub const CARD_WIDTH: u16 = 52;

const ASCII_BORDER: border::Set = border::Set {
    top_left: "+",
    top_right: "+",
    bottom_left: "+",
    bottom_right: "+",
    vertical_left: "|",
    vertical_right: "|",
    horizontal_top: "-",
    horizontal_bottom: "-",
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let base = palette(options);
    let palette = faded_palette(base, app.screen_opacity());
    let glyphs = glyphs(options);

    // Clear with background color
    let bg_block = Block::default().style(Style::default().bg(base.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let [body, status] = Layout::vertical([
        Constraint::Min(1),    // Card
        Constraint::Length(1), // Status bar
    ])
    .margin(1)
    .areas(frame.area());

    draw_card(frame, app, body, &palette, &glyphs);
    draw_status_bar(frame, app, status, &palette, &glyphs);
}

/// Button text for a menu action.
#[must_use]
pub fn action_label(action: Action, glyphs: &Glyphs) -> String {
    match action {
        Action::Start => "Get Recommendations".to_string(),
        Action::PickState(state) if glyphs.icons => {
            format!("{} {}", state.icon(), state.display_name())
        }
        Action::PickState(state) => state.display_name().to_string(),
        Action::PickFocus(focus) => focus.display_name().to_string(),
        Action::ChangeFocus => "Try Another Focus".to_string(),
        Action::Home => format!("{} Home", glyphs.back_arrow),
        Action::Back => format!("{} Back", glyphs.back_arrow),
    }
}

fn draw_card(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let lines = screen_lines(app, palette, glyphs);

    let width = CARD_WIDTH.min(area.width);
    let padding = Padding::new(2, 2, 1, 1);
    let inner_width = width.saturating_sub(2 + padding.left + padding.right);

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let content_height = u16::try_from(paragraph.line_count(inner_width)).unwrap_or(u16::MAX);
    let height = content_height
        .saturating_add(2 + padding.top + padding.bottom)
        .min(area.height);

    let card_area = centered(area, width, height);

    let mut block = Block::bordered()
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(padding);
    block = if glyphs.icons {
        block.border_type(BorderType::Rounded)
    } else {
        block.border_set(ASCII_BORDER)
    };

    frame.render_widget(Clear, card_area);
    frame.render_widget(paragraph.block(block), card_area);
}

fn screen_lines(app: &App, palette: &Palette, glyphs: &Glyphs) -> Vec<Line<'static>> {
    let screen = app.screen();
    let mut lines = Vec::new();

    if has_back(screen) {
        lines.push(Line::from(vec![
            Span::styled(
                action_label(Action::Back, glyphs),
                styles::back_link(palette),
            ),
            Span::styled("  esc", styles::key_hint(palette)),
        ]));
        lines.push(Line::from(""));
    }

    match screen {
        Screen::Home => {
            lines.push(Line::from(Span::styled("KIVAW", styles::title(palette))).centered());
            lines.push(
                Line::from(Span::styled(
                    "Find what fits your mood.",
                    styles::help(palette),
                ))
                .centered(),
            );
        }
        Screen::ChooseState => {
            lines.push(
                Line::from(Span::styled(
                    "What's your current state?",
                    styles::heading(palette),
                ))
                .centered(),
            );
            lines.push(
                Line::from(Span::styled(
                    "Choose what feels closest.",
                    styles::help(palette),
                ))
                .centered(),
            );
        }
        Screen::ChooseFocus => {
            lines.push(
                Line::from(Span::styled("Choose a focus", styles::heading(palette))).centered(),
            );
        }
        Screen::Result => {
            lines.push(
                Line::from(Span::styled("Your Match", styles::match_label(palette))).centered(),
            );
            lines.push(Line::from(""));
            if let Some(text) = app.recommendation() {
                lines.push(
                    Line::from(Span::styled(
                        text,
                        Style::default().fg(palette.text_primary),
                    ))
                    .centered(),
                );
            }
        }
    }

    lines.push(Line::from(""));

    let selected = app.selected_index();
    for (i, action) in app.menu().into_iter().enumerate() {
        let label = action_label(action, glyphs);
        let line = if i == selected {
            Line::from(vec![
                Span::styled(format!(" {} ", glyphs.selected), styles::button_selected(palette)),
                Span::styled(
                    format!("{}. {label} ", i + 1),
                    styles::button_selected(palette),
                ),
            ])
        } else {
            Line::from(vec![
                Span::raw("   "),
                Span::styled(format!("{}. ", i + 1), styles::key_hint(palette)),
                Span::styled(label, styles::button(palette)),
            ])
        };
        lines.push(line);
    }

    lines
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let screen = app.screen();
    let mut spans = vec![
        Span::styled(format!(" {} ", screen.label()), styles::screen_badge(palette)),
        Span::raw(" "),
    ];

    let progress: String = (1..=Screen::Result.step())
        .map(|step| {
            if step <= screen.step() {
                glyphs.step_done
            } else {
                glyphs.step_todo
            }
        })
        .collect();
    spans.push(Span::styled(progress, Style::default().fg(palette.primary)));

    // Retained picks stay hidden until the screen they lead to is showing.
    let selection = app.selection();
    if screen.step() > Screen::ChooseState.step()
        && let Some(state) = selection.state
    {
        let mut crumb = format!("  {}", state.display_name());
        if screen == Screen::Result
            && let Some(focus) = selection.focus
        {
            crumb.push_str(&format!(" {} {}", glyphs.separator, focus.display_name()));
        }
        spans.push(Span::styled(crumb, Style::default().fg(palette.text_secondary)));
    }

    spans.push(Span::raw("   "));
    let mut hints = vec![(glyphs.up_down, "move"), ("enter", "select")];
    if has_back(screen) {
        hints.push(("esc", "back"));
    }
    hints.push(("q", "quit"));
    for (key, what) in hints {
        spans.push(Span::styled(key, styles::key_highlight(palette)));
        spans.push(Span::styled(format!(" {what}  "), styles::key_hint(palette)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
