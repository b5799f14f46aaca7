//! Terminal application: session plus presentation state, and the frame layout

use crate::core::config::RobotConfig;
use crate::robot::command::RobotCommand;
use crate::robot::session::{RobotSession, Transition};
use crate::ui::anim::MarkerTween;
use crate::ui::colors;
use crate::ui::grid::{GridWidget, GRID_HEIGHT};
use crate::ui::input::UiAction;
use crate::ui::state::{LogCategory, UiState};
use crate::ui::view;
use ratatui::layout::{Alignment, Constraint, Direction as LayoutDirection, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use std::time::Duration;

/// Blank columns between buttons
const BUTTON_GAP: u16 = 2;

/// Rows of the recent-actions panel body
const RECENT_ACTIONS: usize = 5;

pub struct App {
    pub session: RobotSession,
    pub ui: UiState,
    title: String,
    animation: Duration,
    show_debug: bool,
}

impl App {
    pub fn new(config: &RobotConfig) -> Self {
        let session = RobotSession::new(config.initial_state());
        let tween = MarkerTween::settled(view::grid_position(&session.state()));
        let mut ui = UiState::new(tween);
        ui.log(0, format!("Started at {}", session.state()), LogCategory::System);
        Self {
            session,
            ui,
            title: config.title.clone(),
            animation: Duration::from_millis(config.animation_ms),
            show_debug: config.show_debug,
        }
    }

    /// Apply a UI action. Returns true when the screen needs redrawing.
    pub fn handle(&mut self, action: UiAction) -> bool {
        match action {
            UiAction::Press(command) => {
                let command = self.ui.activate_command(command);
                self.run(command)
            }
            UiAction::ActivateFocused => {
                let command = self.ui.activate_focused();
                self.run(command)
            }
            UiAction::Click { column, row } => match self.ui.button_at(column, row) {
                Some(index) => {
                    self.ui.focused = index;
                    let command = self.ui.activate_focused();
                    self.run(command);
                    true
                }
                None => false,
            },
            UiAction::FocusNext => {
                self.ui.focus_next();
                true
            }
            UiAction::FocusPrev => {
                self.ui.focus_prev();
                true
            }
            UiAction::Reset => {
                self.session.reset();
                let state = self.session.state();
                self.ui
                    .tween
                    .retarget(view::grid_position(&state), self.animation);
                self.ui.log(0, format!("Reset to {}", state), LogCategory::System);
                true
            }
            UiAction::Redraw => true,
            UiAction::Quit => {
                tracing::info!(
                    commands = self.session.commands_applied(),
                    state = %self.session.state(),
                    "Quitting"
                );
                self.ui.should_quit = true;
                false
            }
        }
    }

    fn run(&mut self, command: Option<RobotCommand>) -> bool {
        match command {
            Some(command) => {
                let transition = self.session.dispatch(command);
                self.after_transition(&transition);
                true
            }
            None => false,
        }
    }

    fn after_transition(&mut self, transition: &Transition) {
        self.ui
            .log_transition(self.session.commands_applied(), transition);
        if transition.before != transition.after {
            let target = view::grid_position(&transition.after);
            if target != self.ui.tween.target() {
                self.ui.tween.retarget(target, self.animation);
            }
        }
    }

    pub fn should_quit(&self) -> bool {
        self.ui.should_quit
    }

    pub fn is_animating(&self) -> bool {
        self.ui.tween.is_running()
    }

    /// Draw the whole screen from the current session state
    pub fn draw(&mut self, frame: &mut Frame<'_>) {
        let state = self.session.state();
        let area = frame.size();

        frame.render_widget(
            Block::default().style(colors::text_style()),
            area,
        );

        let debug_height = if self.show_debug { 5 } else { 0 };
        let rows = Layout::default()
            .direction(LayoutDirection::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(GRID_HEIGHT),
                Constraint::Length(1),
                Constraint::Length(3),
                Constraint::Length(1),
                Constraint::Length(debug_height),
                Constraint::Min(0),
            ])
            .split(area);

        frame.render_widget(
            Paragraph::new(self.title.as_str())
                .style(colors::title_style())
                .alignment(Alignment::Center),
            rows[0],
        );

        frame.render_widget(
            GridWidget::new(self.ui.tween.position(), state.direction()),
            rows[1],
        );

        self.draw_buttons(frame, rows[3]);

        frame.render_widget(
            Paragraph::new(view::status_line(&state))
                .style(colors::text_style())
                .alignment(Alignment::Center),
            rows[4],
        );

        let debug_area = centered(rows[5], 34);
        if self.show_debug && !debug_area.is_empty() {
            let lines: Vec<Line> = view::debug_lines(&state)
                .into_iter()
                .map(Line::from)
                .collect();
            frame.render_widget(
                Paragraph::new(lines).style(colors::text_style()).block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Debug Info")
                        .style(colors::text_style()),
                ),
                debug_area,
            );
        }

        let recent: Vec<Line> = self
            .ui
            .action_log
            .iter()
            .rev()
            .take(RECENT_ACTIONS)
            .map(|entry| {
                Line::from(Span::styled(
                    entry.message.clone(),
                    colors::text_style().fg(colors::log_color(entry.category)),
                ))
            })
            .collect();
        frame.render_widget(
            Paragraph::new(recent)
                .style(colors::text_style())
                .alignment(Alignment::Center),
            rows[6],
        );
    }

    fn draw_buttons(&mut self, frame: &mut Frame<'_>, area: Rect) {
        let widths: Vec<u16> = self
            .ui
            .buttons
            .iter()
            .map(|b| b.label.chars().count() as u16 + 4)
            .collect();
        let total: u16 =
            widths.iter().sum::<u16>() + BUTTON_GAP * widths.len().saturating_sub(1) as u16;

        let mut x = area.x + area.width.saturating_sub(total) / 2;
        self.ui.button_areas.clear();
        for (index, (button, width)) in self.ui.buttons.iter().zip(&widths).enumerate() {
            let rect = Rect::new(x, area.y, *width, area.height).intersection(area);
            x = x.saturating_add(width + BUTTON_GAP);
            self.ui.button_areas.push(rect);
            if rect.is_empty() {
                continue;
            }
            let style = colors::button_style(index == self.ui.focused, button.disabled);
            frame.render_widget(
                Paragraph::new(button.label.as_str())
                    .style(style)
                    .alignment(Alignment::Center)
                    .block(Block::default().borders(Borders::ALL).style(style)),
                rect,
            );
        }
    }
}

/// `width` columns centred inside `area`
fn centered(area: Rect, width: u16) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    Rect::new(x, area.y, width, area.height).intersection(area)
}
