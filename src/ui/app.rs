use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, MouseEvent};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};

use crate::config::Config;
use crate::data::{FieldNames, FieldValue, OptionList};
use crate::reactive::{Observable, Subscription};
use crate::ui::components::{ButtonGroup, ButtonGroupState, ButtonGroupTheme};
use crate::ui::events::AppEvent;
use crate::ui::terminal_guard::TerminalGuard;

/// Number of notifications kept for display
const LOG_CAPACITY: usize = 8;

/// Demo host: owns the selected value and reacts to the group's notifications.
pub struct App {
    options: OptionList,
    fields: FieldNames,
    theme: ButtonGroupTheme,
    /// Caller-owned selected value
    selected: Observable<FieldValue>,
    group_state: ButtonGroupState,
    /// Whether `value-changed` is written back into `selected`
    adopt_updates: bool,
    /// Events queued by group listeners, drained after each input
    queue: Rc<RefCell<VecDeque<AppEvent>>>,
    _listener: Subscription,
    /// Most recent notifications, newest last
    log: VecDeque<String>,
    /// Where the group was last drawn, for mouse hit testing
    group_area: Rect,
    should_quit: bool,
}

impl App {
    pub fn new(config: Config) -> Self {
        let selected = Observable::new(config.demo.selected.clone());
        let group_state = ButtonGroupState::bound(&selected);

        let queue = Rc::new(RefCell::new(VecDeque::new()));
        let queue_clone = Rc::clone(&queue);
        let listener = group_state.on_event(move |event| {
            queue_clone.borrow_mut().push_back(AppEvent::from(event));
        });

        Self {
            options: config.demo.options,
            fields: config.fields,
            theme: config.theme,
            selected,
            group_state,
            adopt_updates: config.demo.adopt_updates,
            queue,
            _listener: listener,
            log: VecDeque::with_capacity(LOG_CAPACITY),
            group_area: Rect::default(),
            should_quit: false,
        }
    }

    fn group(&self) -> ButtonGroup<'_> {
        ButtonGroup::new(&self.options)
            .fields(self.fields.clone())
            .theme(self.theme)
    }

    /// Run the application main loop
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal);

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key_event(key),
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }
        Ok(())
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        let app_event = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Char('a') => Some(AppEvent::ToggleAdopt),
            KeyCode::Char('x') => Some(AppEvent::ExternalUpdate(self.next_external_value())),
            KeyCode::Char('n') => Some(AppEvent::ExternalUpdate(FieldValue::Null)),
            _ => None,
        };

        match app_event {
            Some(app_event) => self.queue.borrow_mut().push_back(app_event),
            None => {
                self.group().handle_key(&self.group_state, key);
            }
        }

        self.process_events();
    }

    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        self.group()
            .handle_mouse(self.group_area, &self.group_state, mouse);
        self.process_events();
    }

    /// Drain queued events.
    fn process_events(&mut self) {
        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(event) = next else {
                break;
            };

            match event {
                AppEvent::ValueChanged(value) => {
                    self.push_log(format!("value-changed {}", describe(&value)));
                    if self.adopt_updates {
                        self.selected.set(value);
                    }
                }
                AppEvent::Change(value) => {
                    self.push_log(format!("change {}", describe(&value)));
                }
                AppEvent::ExternalUpdate(value) => {
                    self.push_log(format!("external {}", describe(&value)));
                    self.selected.set(value);
                }
                AppEvent::ToggleAdopt => {
                    self.adopt_updates = !self.adopt_updates;
                    tracing::debug!(adopt = self.adopt_updates, "Toggled adoption");
                }
                AppEvent::Quit => self.should_quit = true,
            }
        }
    }

    fn push_log(&mut self, entry: String) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(entry);
    }

    /// Identity of the option after the currently selected one, wrapping.
    fn next_external_value(&self) -> FieldValue {
        if self.options.is_empty() {
            return FieldValue::Null;
        }
        let current = self.selected.get();
        let next = self
            .options
            .iter()
            .position(|option| option.value(&self.fields.value) == current)
            .map_or(0, |i| (i + 1) % self.options.len());
        self.options[next].value(&self.fields.value)
    }

    pub fn draw(&mut self, f: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Button group
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Status
            Constraint::Length(1), // Spacing
            Constraint::Min(0),    // Notification log
            Constraint::Length(1), // Key hints
        ])
        .horizontal_margin(2)
        .split(f.area());

        let title = Paragraph::new("Button group").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );
        f.render_widget(title, chunks[0]);

        self.group_area = chunks[2];
        self.group()
            .render(chunks[2], f.buffer_mut(), &self.group_state);

        let status = Line::from(vec![
            Span::styled("selected ", Style::default().fg(Color::DarkGray)),
            Span::raw(describe(&self.selected.get())),
            Span::styled("  active ", Style::default().fg(Color::DarkGray)),
            Span::raw(describe(&self.group_state.active_value())),
            Span::styled("  adopt ", Style::default().fg(Color::DarkGray)),
            Span::raw(if self.adopt_updates { "on" } else { "off" }),
        ]);
        f.render_widget(Paragraph::new(status), chunks[4]);

        let log: Vec<Line> = self.log.iter().map(|e| Line::from(e.as_str())).collect();
        f.render_widget(
            Paragraph::new(log).style(Style::default().fg(Color::Gray)),
            chunks[6],
        );

        let hints = Paragraph::new("←/→ select  1-9 jump  x external  n null  a adopt  q quit")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(hints, chunks[7]);
    }

    /// Render only the group into a one-row buffer and return its text.
    pub fn render_snapshot(&self, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        self.group().render(area, &mut buf, &self.group_state);
        (0..width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect::<String>()
            .trim_end()
            .to_string()
    }

    pub fn selected_value(&self) -> FieldValue {
        self.selected.get()
    }

    pub fn active_value(&self) -> FieldValue {
        self.group_state.active_value()
    }

    pub fn adopt_updates(&self) -> bool {
        self.adopt_updates
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn notifications(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    pub fn group_width(&self) -> u16 {
        self.group().width()
    }
}

/// JSON-ish rendering so `null`, `1` and `"1"` stay distinguishable.
fn describe(value: &FieldValue) -> String {
    match value {
        // JSON has no NaN or infinity and would print them as `null`
        FieldValue::Float(x) if !x.is_finite() => value.to_string(),
        _ => serde_json::to_string(value).unwrap_or_else(|_| value.to_string()),
    }
}
