use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use investor_pages::chart::{format_tick, ChartView};
use investor_pages::content::{ChartKind, Metric, SectionIntro, SiteContent, Tone};
use investor_pages::navigation::{ScrollBehavior, Section, Viewport};
use investor_pages::{Field, Page, SubmitOutcome};
use ratatui::{
    backend::CrosstermBackend,
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph,
        Widget, Wrap,
    },
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::debug;

const TICK: Duration = Duration::from_millis(50);
const FOOTER_ID: &str = "footer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browse,
    Editing(Field),
}

// ============================================================================
// SCROLL CONTROLLER
// ============================================================================

/// Document layout plus the scroll offset into it. Acts as the page's
/// viewport: smooth scroll requests set a target the offset eases toward on
/// every tick.
#[derive(Debug, Clone)]
pub struct ScrollController {
    blocks: Vec<(String, u16, u16)>,
    offset: u16,
    target: Option<u16>,
    viewport_height: u16,
}

impl ScrollController {
    pub fn new(site: &SiteContent) -> Self {
        let mut blocks = Vec::new();
        let mut top: u16 = 0;
        for section in Section::ALL {
            let height = section_height(section, site);
            blocks.push((section.id().to_string(), top, height));
            top = top.saturating_add(height);
        }
        blocks.push((FOOTER_ID.to_string(), top, FOOTER_HEIGHT));

        Self {
            blocks,
            offset: 0,
            target: None,
            viewport_height: 0,
        }
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn total_height(&self) -> u16 {
        self.blocks.last().map(|(_, top, h)| top.saturating_add(*h)).unwrap_or(0)
    }

    pub fn set_viewport_height(&mut self, height: u16) {
        self.viewport_height = height;
        self.offset = self.offset.min(self.max_offset());
    }

    fn max_offset(&self) -> u16 {
        self.total_height().saturating_sub(self.viewport_height)
    }

    pub fn top_of(&self, id: &str) -> Option<u16> {
        self.blocks.iter().find(|(b, _, _)| b == id).map(|(_, top, _)| *top)
    }

    /// Manual scrolling cancels any running animation.
    pub fn scroll_by(&mut self, delta: i32) {
        self.target = None;
        let next = (self.offset as i32 + delta).clamp(0, self.max_offset() as i32);
        self.offset = next as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.target = None;
        self.offset = 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.target = None;
        self.offset = self.max_offset();
    }

    #[cfg(test)]
    pub fn is_animating(&self) -> bool {
        self.target.is_some()
    }

    /// Advance the smooth-scroll animation by one step.
    pub fn tick(&mut self) {
        let Some(target) = self.target else {
            return;
        };
        let target = target.min(self.max_offset());
        let distance = target.abs_diff(self.offset);
        let step = (distance / 3).max(1);

        if distance <= step {
            self.offset = target;
            self.target = None;
        } else if target > self.offset {
            self.offset += step;
        } else {
            self.offset -= step;
        }
    }
}

impl Viewport for ScrollController {
    fn scroll_into_view(&mut self, id: &str, behavior: ScrollBehavior) -> bool {
        let Some(top) = self.top_of(id) else {
            return false;
        };
        match behavior {
            ScrollBehavior::Smooth => self.target = Some(top),
            ScrollBehavior::Instant => {
                self.target = None;
                self.offset = top.min(self.max_offset());
            }
        }
        true
    }
}

const FOOTER_HEIGHT: u16 = 8;

fn section_height(section: Section, site: &SiteContent) -> u16 {
    match section {
        Section::Home => 12,
        Section::About => 12,
        Section::Portfolio => 12,
        Section::Financials => 26,
        Section::Presentation => 11,
        Section::Contact => {
            let details = u16::try_from(site.contact.details.len())
                .unwrap_or(u16::MAX)
                .saturating_mul(2)
                .saturating_add(2);
            details.max(14).saturating_add(4)
        }
    }
}

// ============================================================================
// PAGE ACTIONS
// ============================================================================

/// An in-page button or link that activates a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAction {
    pub target: String,

    /// Layout block the control is drawn in
    pub block: &'static str,
}

impl PageAction {
    fn new(target: &str, block: &'static str) -> Self {
        Self {
            target: target.to_string(),
            block,
        }
    }
}

const OFFER_ACTION: usize = 2;
const FOOTER_ACTIONS_START: usize = 3;

/// Focus order: the two hero buttons, the offer button, then footer links.
fn page_actions(site: &SiteContent) -> Vec<PageAction> {
    let mut actions = vec![
        PageAction::new(&site.hero.primary_cta.target, Section::Home.id()),
        PageAction::new(&site.hero.secondary_cta.target, Section::Home.id()),
        PageAction::new(Section::Contact.id(), Section::Financials.id()),
    ];
    actions.extend(
        site.footer
            .columns
            .iter()
            .flat_map(|c| c.links.iter())
            .map(|link| PageAction::new(&link.id, FOOTER_ID)),
    );
    actions
}

// ============================================================================
// APP
// ============================================================================

pub struct App {
    pub page: Page,
    pub scroll: ScrollController,
    pub nav_cursor: usize,
    pub actions: Vec<PageAction>,
    pub action_cursor: Option<usize>,
    pub mode: Mode,
    pub missing: Vec<Field>,
}

impl App {
    pub fn new(page: Page) -> Self {
        let scroll = ScrollController::new(page.content());
        let actions = page_actions(page.content());
        Self {
            page,
            scroll,
            nav_cursor: 0,
            actions,
            action_cursor: None,
            mode: Mode::Browse,
            missing: vec![],
        }
    }

    pub fn next_action(&mut self) {
        let len = self.actions.len();
        if len > 0 {
            let next = self.action_cursor.map_or(0, |i| (i + 1) % len);
            self.focus_action(next);
        }
    }

    pub fn previous_action(&mut self) {
        let len = self.actions.len();
        if len > 0 {
            let previous = self.action_cursor.map_or(len - 1, |i| (i + len - 1) % len);
            self.focus_action(previous);
        }
    }

    /// Focusing a control brings its block into view without activating it.
    fn focus_action(&mut self, index: usize) {
        self.action_cursor = Some(index);
        let block = self.actions[index].block;
        self.scroll.scroll_into_view(block, ScrollBehavior::Smooth);
    }

    fn is_focused(&self, index: usize) -> bool {
        self.mode == Mode::Browse && self.action_cursor == Some(index)
    }

    fn nav_len(&self) -> usize {
        self.page.content().nav.len()
    }

    pub fn next_nav(&mut self) {
        self.action_cursor = None;
        let len = self.nav_len();
        if len > 0 {
            self.nav_cursor = (self.nav_cursor + 1) % len;
        }
    }

    pub fn previous_nav(&mut self) {
        self.action_cursor = None;
        let len = self.nav_len();
        if len > 0 {
            self.nav_cursor = (self.nav_cursor + len - 1) % len;
        }
    }

    /// Activate the navigation entry at `index`.
    pub fn activate_nav(&mut self, index: usize) {
        let Some(item) = self.page.content().nav.get(index) else {
            return;
        };
        let id = item.id.clone();
        self.nav_cursor = index;
        self.action_cursor = None;
        self.activate(&id);
    }

    pub fn activate(&mut self, id: &str) {
        self.page.activate(id, &mut self.scroll);
        if let Some(index) = self.page.content().nav.iter().position(|n| n.id == id) {
            self.nav_cursor = index;
        }
    }

    pub fn start_editing(&mut self) {
        self.activate(Section::Contact.id());
        self.mode = Mode::Editing(Field::Name);
    }

    pub fn on_tick(&mut self) {
        self.scroll.tick();
    }

    /// Returns false when the app should quit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        // The acknowledgement behaves like a modal: any key dismisses it.
        if self.page.acknowledgement().is_some() {
            self.page.dismiss_acknowledgement();
            return true;
        }

        match self.mode {
            Mode::Browse => self.handle_browse_key(key),
            Mode::Editing(field) => {
                self.handle_edit_key(field, key);
                true
            }
        }
    }

    fn handle_browse_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return false,
            KeyCode::Right | KeyCode::Char('l') => self.next_nav(),
            KeyCode::Left | KeyCode::Char('h') => self.previous_nav(),
            KeyCode::Tab => self.next_action(),
            KeyCode::BackTab => self.previous_action(),
            KeyCode::Enter => match self.action_cursor {
                Some(index) => {
                    let target = self.actions[index].target.clone();
                    self.activate(&target);
                }
                None => self.activate_nav(self.nav_cursor),
            },
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.activate_nav(index);
            }
            KeyCode::Char('e') => self.start_editing(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll.scroll_by(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll.scroll_by(-1),
            KeyCode::PageDown => self.scroll.scroll_by(self.scroll.viewport_height.max(1) as i32),
            KeyCode::PageUp => self.scroll.scroll_by(-(self.scroll.viewport_height.max(1) as i32)),
            KeyCode::Home | KeyCode::Char('g') => self.scroll.scroll_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.scroll.scroll_to_end(),
            _ => {}
        }
        true
    }

    fn handle_edit_key(&mut self, field: Field, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.mode = Mode::Browse,
            KeyCode::Tab | KeyCode::Down => self.mode = Mode::Editing(field.next()),
            KeyCode::BackTab | KeyCode::Up => self.mode = Mode::Editing(field.previous()),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Enter if field == Field::Message => self.submit(),
            KeyCode::Enter => self.mode = Mode::Editing(field.next()),
            KeyCode::Backspace => {
                let mut value = self.page.form().get(field).to_string();
                value.pop();
                self.page.update_field(field, value);
            }
            KeyCode::Char(c) => {
                let mut value = self.page.form().get(field).to_string();
                value.push(c);
                self.page.update_field(field, value);
                self.missing.retain(|f| *f != field);
            }
            _ => {}
        }
    }

    /// Required-field check at the form boundary, then the decorative submit.
    pub fn submit(&mut self) {
        match self.page.try_submit() {
            SubmitOutcome::Acknowledged(_) => {
                self.missing.clear();
                self.mode = Mode::Browse;
            }
            SubmitOutcome::Incomplete(missing) => {
                debug!(count = missing.len(), "submit blocked by empty fields");
                if let Some(first) = missing.first() {
                    self.mode = Mode::Editing(*first);
                }
                self.missing = missing;
            }
        }
    }
}

// ============================================================================
// TERMINAL LOOP
// ============================================================================

pub fn run_ui(app: &mut App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res.map_err(Into::into)
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && !app.handle_key(key) {
                    return Ok(());
                }
            }
        }
        app.on_tick();
    }
}

pub fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Navigation bar
            Constraint::Min(0),    // Scrollable page
            Constraint::Length(3), // Status bar
        ])
        .split(f.size());

    render_nav(f, chunks[0], app);

    let body = chunks[1];
    app.scroll.set_viewport_height(body.height);
    render_body(f.buffer_mut(), body, app);

    render_status_bar(f, chunks[2], app);
}

/// Widest the page is laid out; wider terminals center it.
const MAX_PAGE_WIDTH: u16 = 160;

/// Draw the blocks that intersect the scroll window. Each block is laid out
/// in its own buffer and the visible rows are copied into the frame.
fn render_body(target: &mut Buffer, body: Rect, app: &App) {
    let page_width = body.width.min(MAX_PAGE_WIDTH);
    let left = body.x + (body.width - page_width) / 2;
    let window_top = app.scroll.offset();
    let window_bottom = window_top.saturating_add(body.height);

    for (id, top, height) in &app.scroll.blocks {
        if top.saturating_add(*height) <= window_top || *top >= window_bottom {
            continue;
        }

        let block = render_block(app, id, page_width, *height);
        for row in 0..block.area.height {
            let doc_y = top.saturating_add(row);
            if doc_y < window_top || doc_y >= window_bottom {
                continue;
            }
            let y = body.y + (doc_y - window_top);
            for col in 0..block.area.width {
                *target.get_mut(left + col, y) = block.get(col, row).clone();
            }
        }
    }
}

fn render_block(app: &App, id: &str, width: u16, height: u16) -> Buffer {
    // A buffer holds at most u16::MAX cells; very tall blocks get narrower.
    let width = width.min(u16::MAX / height.max(1));
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let area = buf.area;

    let site = app.page.content();
    match Section::from_id(id) {
        Some(Section::Home) => render_home(&mut buf, area, app),
        Some(Section::About) => render_about(&mut buf, area, site),
        Some(Section::Portfolio) => render_portfolio(&mut buf, area, site),
        Some(Section::Financials) => render_financials(&mut buf, area, app),
        Some(Section::Presentation) => render_presentation(&mut buf, area, site),
        Some(Section::Contact) => render_contact(&mut buf, area, app),
        None => render_footer(&mut buf, area, app),
    }

    buf
}

// ============================================================================
// CHROME
// ============================================================================

fn render_nav(f: &mut Frame, area: Rect, app: &App) {
    let site = app.page.content();
    let mut spans = vec![Span::styled(
        format!(" {} ", site.brand),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    spans.push(Span::raw(" │ "));

    for (i, item) in site.nav.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let mut style = if app.page.navigation().is_active(&item.id) {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        };
        if i == app.nav_cursor && app.mode == Mode::Browse && app.action_cursor.is_none() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{} {}", i + 1, item.label), style));
    }

    let nav = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(nav, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" § {} ", app.page.active_section()),
        Style::default().fg(Color::Cyan),
    )];

    if let Some(ack) = app.page.acknowledgement() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            ack.message.clone(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("  (any key)"));
    } else if !app.missing.is_empty() {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            app.page.content().contact.labels.required.clone(),
            Style::default().fg(Color::Red),
        ));
    } else {
        let hints: &[(&str, &str)] = match app.mode {
            Mode::Browse => &[
                ("←/→", "Section"),
                ("Tab", "Buttons"),
                ("Enter", "Go"),
                ("↑/↓", "Scroll"),
                ("e", "Write to us"),
                ("q", "Quit"),
            ],
            Mode::Editing(_) => &[
                ("Tab", "Next field"),
                ("Enter", "Next / Send"),
                ("Ctrl+S", "Send"),
                ("Esc", "Done"),
            ],
        };
        for (key, action) in hints {
            spans.push(Span::raw("| "));
            spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(format!(" {} ", action)));
        }
    }

    let status = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White)),
    );
    f.render_widget(status, area);
}

// ============================================================================
// SECTIONS
// ============================================================================

fn tone_color(tone: Tone) -> Color {
    match tone {
        Tone::Primary => Color::Cyan,
        Tone::Accent => Color::Yellow,
    }
}

fn section_block(title: &str) -> Block<'_> {
    Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
}

/// Section frame with its intro line; returns the area below the intro.
fn intro_area(buf: &mut Buffer, area: Rect, intro: &SectionIntro) -> Rect {
    let block = section_block(&intro.title);
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(inner);

    Paragraph::new(Span::styled(
        intro.subtitle.clone(),
        Style::default().fg(Color::DarkGray),
    ))
    .render(chunks[0], buf);

    chunks[1]
}

fn columns(area: Rect, count: usize) -> Vec<Rect> {
    let count = count.max(1) as u32;
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints((0..count).map(|_| Constraint::Ratio(1, count)).collect::<Vec<_>>())
        .split(area)
        .to_vec()
}

fn card(buf: &mut Buffer, area: Rect, title: &str, lines: Vec<Line<'_>>) {
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    title.to_string(),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
        )
        .render(area, buf);
}

fn button_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }
}

fn metric_lines(metrics: &[Metric]) -> Vec<Line<'static>> {
    metrics
        .iter()
        .map(|m| {
            Line::from(vec![
                Span::styled(m.value.clone(), Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
                Span::raw(format!("  {}", m.label)),
            ])
        })
        .collect()
}

fn render_home(buf: &mut Buffer, area: Rect, app: &App) {
    let site = app.page.content();
    let hero = &site.hero;
    let block = section_block(&site.brand);
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let cta = |label: &str, index: usize| Span::styled(format!("[ {} ]", label), button_style(app.is_focused(index)));
    let text = vec![
        Line::from(Span::styled(
            hero.headline.clone(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(hero.lead.clone()),
        Line::from(""),
        Line::from(vec![
            cta(&hero.primary_cta.label, 0),
            Span::raw("  "),
            cta(&hero.secondary_cta.label, 1),
        ]),
    ];
    Paragraph::new(text).wrap(Wrap { trim: true }).render(chunks[0], buf);

    for (metric, rect) in hero.stats.iter().zip(columns(chunks[1], hero.stats.len())) {
        Paragraph::new(vec![
            Line::from(Span::styled(
                metric.value.clone(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(metric.label.clone(), Style::default().fg(Color::DarkGray))),
        ])
        .render(rect, buf);
    }

    Paragraph::new(Span::styled(
        format!("🖼  {} — {}", hero.image_alt, hero.image_url),
        Style::default().fg(Color::DarkGray),
    ))
    .render(chunks[2], buf);
}

fn render_about(buf: &mut Buffer, area: Rect, site: &SiteContent) {
    let cards_area = intro_area(buf, area, &site.about);
    for (feature, rect) in site.features.iter().zip(columns(cards_area, site.features.len())) {
        let mut lines = vec![Line::from(feature.description.clone()), Line::from("")];
        lines.extend(feature.details.iter().map(|d| {
            Line::from(Span::styled(d.clone(), Style::default().fg(Color::Yellow)))
        }));
        card(buf, rect, &feature.title, lines);
    }
}

fn render_portfolio(buf: &mut Buffer, area: Rect, site: &SiteContent) {
    let cards_area = intro_area(buf, area, &site.portfolio);
    for (project, rect) in site.projects.iter().zip(columns(cards_area, site.projects.len())) {
        let mut lines = vec![Line::from(project.description.clone()), Line::from("")];
        lines.extend(metric_lines(&project.metrics));
        if let Some(url) = &project.image_url {
            lines.push(Line::from(Span::styled(
                format!("🖼  {}", url),
                Style::default().fg(Color::DarkGray),
            )));
        }
        card(buf, rect, &project.title, lines);
    }
}

fn render_financials(buf: &mut Buffer, area: Rect, app: &App) {
    let site = app.page.content();
    let content = intro_area(buf, area, &site.financials);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(15), Constraint::Min(0)])
        .split(content);

    let slots = site.charts.slots();
    for ((kind, spec), rect) in slots.iter().zip(columns(chunks[0], slots.len())) {
        let view = ChartView::from_spec(*kind, spec);
        match kind {
            ChartKind::Line => render_line_chart(buf, rect, &view),
            ChartKind::Bar => render_bar_chart(buf, rect, &view),
        }
    }

    let offer = &site.offer;
    let mut lines = vec![Line::from(Span::styled(
        offer.subtitle.clone(),
        Style::default().fg(Color::DarkGray),
    ))];
    lines.extend(metric_lines(&offer.terms));
    lines.push(Line::from(offer.note.clone()));
    lines.push(Line::from(Span::styled(
        format!("[ {} ]", offer.cta_label),
        button_style(app.is_focused(OFFER_ACTION)),
    )));
    card(buf, chunks[1], &offer.title, lines);
}

fn legend_title(view: &ChartView) -> Line<'static> {
    let mut spans = vec![Span::styled(
        format!(" {} ", view.title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )];
    for series in &view.series {
        spans.push(Span::styled("■ ", Style::default().fg(tone_color(series.tone))));
        spans.push(Span::raw(format!("{} ", series.name)));
    }
    Line::from(spans)
}

fn render_line_chart(buf: &mut Buffer, area: Rect, view: &ChartView) {
    let points: Vec<Vec<(f64, f64)>> = view
        .series
        .iter()
        .map(|s| s.values.iter().enumerate().map(|(i, v)| (i as f64, *v)).collect())
        .collect();

    let datasets = view
        .series
        .iter()
        .zip(points.iter())
        .map(|(series, data)| {
            Dataset::default()
                .name(series.name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(tone_color(series.tone)))
                .data(data)
        })
        .collect();

    let x_max = view.categories.len().saturating_sub(1).max(1) as f64;
    let chart = Chart::new(datasets)
        .block(Block::default().borders(Borders::ALL).title(legend_title(view)))
        .x_axis(
            Axis::default()
                .bounds([0.0, x_max])
                .labels(view.categories.iter().map(|c| Span::raw(c.clone())).collect()),
        )
        .y_axis(
            Axis::default()
                .bounds([view.floor, view.ceiling])
                .labels(view.ticks.iter().map(|t| Span::raw(format_tick(*t))).collect()),
        );
    chart.render(area, buf);
}

fn render_bar_chart(buf: &mut Buffer, area: Rect, view: &ChartView) {
    let mut chart = BarChart::default()
        .block(Block::default().borders(Borders::ALL).title(legend_title(view)))
        .bar_width(3)
        .bar_gap(0)
        .group_gap(2)
        .max(view.ceiling.max(0.0).round() as u64);

    for (i, category) in view.categories.iter().enumerate() {
        let bars: Vec<Bar> = view
            .series
            .iter()
            .map(|s| {
                let value = s.values[i];
                Bar::default()
                    .value(value.max(0.0).round() as u64)
                    .text_value(format_tick(value))
                    .style(Style::default().fg(tone_color(s.tone)))
            })
            .collect();
        chart = chart.data(BarGroup::default().label(Line::from(category.clone())).bars(&bars));
    }

    chart.render(area, buf);
}

fn render_presentation(buf: &mut Buffer, area: Rect, site: &SiteContent) {
    let cards_area = intro_area(buf, area, &site.presentation);
    for (material, rect) in site.materials.iter().zip(columns(cards_area, site.materials.len())) {
        let lines = vec![
            Line::from(material.description.clone()),
            Line::from(""),
            Line::from(Span::styled(
                format!("⤓ {}", material.action_label),
                Style::default().fg(Color::Cyan),
            )),
        ];
        card(buf, rect, &material.title, lines);
    }
}

fn render_contact(buf: &mut Buffer, area: Rect, app: &App) {
    let site = app.page.content();
    let section = &site.contact;
    let content = intro_area(buf, area, &section.intro);
    let halves = columns(content, 2);

    let mut lines = Vec::new();
    for detail in &section.details {
        lines.push(Line::from(Span::styled(
            detail.label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            detail.value.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    card(buf, halves[0], &section.info_title, lines);

    let form_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(Span::styled(
            section.form_title.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ));
    let form_area = form_block.inner(halves[1]);
    form_block.render(halves[1], buf);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(form_area);

    let labels = &section.labels;
    for (field, rect) in Field::ALL.into_iter().zip(rows.iter()) {
        let placeholder = match field {
            Field::Name => &labels.name,
            Field::Email => &labels.email,
            Field::Message => &labels.message,
        };
        let focused = app.mode == Mode::Editing(field);
        let border = if app.missing.contains(&field) {
            Color::Red
        } else if focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let value = app.page.form().get(field);
        let text = if value.is_empty() && !focused {
            Span::styled(placeholder.clone(), Style::default().fg(Color::DarkGray))
        } else if focused {
            Span::raw(format!("{}▏", value))
        } else {
            Span::raw(value.to_string())
        };

        Paragraph::new(Line::from(text))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(border))
                    .title(format!("{} *", placeholder)),
            )
            .render(*rect, buf);
    }

    Paragraph::new(Span::styled(
        format!("[ {} ]", labels.submit),
        Style::default().fg(Color::Black).bg(Color::Cyan),
    ))
    .render(rows[3], buf);
}

fn render_footer(buf: &mut Buffer, area: Rect, app: &App) {
    let site = app.page.content();
    let footer = &site.footer;
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    block.render(area, buf);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let cols = columns(chunks[0], footer.columns.len() + 1);
    Paragraph::new(vec![
        Line::from(Span::styled(site.brand.clone(), Style::default().add_modifier(Modifier::BOLD))),
        Line::from(Span::styled(footer.tagline.clone(), Style::default().fg(Color::DarkGray))),
        Line::from(""),
        Line::from(footer.social.join("  ")),
    ])
    .wrap(Wrap { trim: true })
    .render(cols[0], buf);

    let mut index = FOOTER_ACTIONS_START;
    for (column, rect) in footer.columns.iter().zip(cols.iter().skip(1)) {
        let mut lines = vec![Line::from(Span::styled(
            column.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        for link in &column.links {
            let style = if app.is_focused(index) {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            lines.push(Line::from(Span::styled(format!("› {}", link.label), style)));
            index += 1;
        }
        Paragraph::new(lines).render(*rect, buf);
    }

    Paragraph::new(Span::styled(
        footer.copyright.clone(),
        Style::default().fg(Color::DarkGray),
    ))
    .render(chunks[1], buf);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use investor_pages::content::{hotel, tech};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        let mut app = App::new(Page::new(hotel::content()));
        app.scroll.set_viewport_height(20);
        app
    }

    fn settle(app: &mut App) {
        for _ in 0..100 {
            app.on_tick();
        }
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_layout_sections_are_stacked() {
        let scroll = ScrollController::new(&hotel::content());
        assert_eq!(scroll.top_of("home"), Some(0));
        assert_eq!(scroll.top_of("about"), Some(12));
        assert!(scroll.top_of("contact").unwrap() > scroll.top_of("financials").unwrap());
        assert_eq!(scroll.top_of("careers"), None);
    }

    #[test]
    fn test_number_key_activates_section_and_scrolls_smoothly() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('4')));

        assert_eq!(app.page.active_section(), "financials");
        assert_eq!(app.nav_cursor, 3);
        assert!(app.scroll.is_animating());

        app.on_tick();
        let after_one = app.scroll.offset();
        assert!(after_one > 0);
        assert!(after_one < app.scroll.top_of("financials").unwrap());

        settle(&mut app);
        assert!(!app.scroll.is_animating());
        assert_eq!(app.scroll.offset(), app.scroll.top_of("financials").unwrap());
    }

    #[test]
    fn test_second_activation_replaces_first() {
        let mut app = app();
        app.activate("financials");
        app.activate("contact");
        settle(&mut app);

        assert_eq!(app.page.active_section(), "contact");
        let expected = app
            .scroll
            .top_of("contact")
            .unwrap()
            .min(app.scroll.total_height() - 20);
        assert_eq!(app.scroll.offset(), expected);
    }

    #[test]
    fn test_unknown_section_does_not_move_viewport() {
        let mut app = app();
        app.scroll.scroll_by(5);
        app.activate("careers");
        settle(&mut app);

        assert_eq!(app.page.active_section(), "careers");
        assert_eq!(app.scroll.offset(), 5);
    }

    #[test]
    fn test_nav_cursor_wraps() {
        let mut app = app();
        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.nav_cursor, 5);
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.nav_cursor, 0);

        app.handle_key(key(KeyCode::Right));
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page.active_section(), "about");
    }

    #[test]
    fn test_form_editing_and_submit() {
        let mut app = app();
        app.handle_key(key(KeyCode::Char('e')));
        assert_eq!(app.mode, Mode::Editing(Field::Name));
        assert_eq!(app.page.active_section(), "contact");

        type_text(&mut app, "Anx");
        app.handle_key(key(KeyCode::Backspace));
        type_text(&mut app, "n");
        app.handle_key(key(KeyCode::Enter));
        type_text(&mut app, "a@b.com");
        app.handle_key(key(KeyCode::Tab));
        type_text(&mut app, "Hi");

        assert_eq!(app.page.form().name, "Ann");
        assert_eq!(app.page.form().email, "a@b.com");
        assert_eq!(app.page.form().message, "Hi");

        app.handle_key(key(KeyCode::Enter));

        assert!(app.page.form().is_empty());
        assert!(app.page.acknowledgement().is_some());
        assert_eq!(app.mode, Mode::Browse);

        // Any key dismisses the acknowledgement without acting
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert!(app.page.acknowledgement().is_none());
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_incomplete_submit_focuses_missing_field() {
        let mut app = app();
        app.start_editing();
        type_text(&mut app, "Ann");
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));

        assert_eq!(app.missing, vec![Field::Email, Field::Message]);
        assert_eq!(app.mode, Mode::Editing(Field::Email));
        assert_eq!(app.page.form().name, "Ann");
        assert!(app.page.acknowledgement().is_none());

        type_text(&mut app, "a");
        assert_eq!(app.missing, vec![Field::Message]);
    }

    #[test]
    fn test_q_quits_in_browse_but_types_in_form() {
        let mut app = app();
        app.start_editing();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.page.form().name, "q");

        app.handle_key(key(KeyCode::Esc));
        assert!(!app.handle_key(key(KeyCode::Char('q'))));
    }

    #[test]
    fn test_draws_nav_and_first_section() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = App::new(Page::new(tech::content()));

        terminal.draw(|f| ui(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");

        assert!(text.contains("InvestTech"));
        assert!(text.contains("Финансы"));
        assert!(text.contains("Инвестируйте"));
    }

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer.get(x, y).symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_wide_terminal_draws_every_section() {
        let mut terminal = Terminal::new(TestBackend::new(700, 40)).unwrap();
        let mut app = App::new(Page::new(hotel::content()));

        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Grand Marina"));

        app.activate("contact");
        settle(&mut app);
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        app.scroll.scroll_to_end();
        terminal.draw(|f| ui(f, &mut app)).unwrap();
        assert!(screen_text(&terminal).contains("Все права защищены"));
    }

    #[test]
    fn test_page_is_centered_on_wide_terminal() {
        let mut terminal = Terminal::new(TestBackend::new(400, 40)).unwrap();
        let mut app = App::new(Page::new(hotel::content()));
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        let buffer = terminal.backend().buffer();
        let left = (400 - MAX_PAGE_WIDTH) / 2;
        let right = left + MAX_PAGE_WIDTH;
        // First body row is the top border of the home block
        assert_eq!(buffer.get(left - 1, 3).symbol(), " ");
        assert_eq!(buffer.get(right - 1, 3).symbol(), "─");
        assert_eq!(buffer.get(right, 3).symbol(), " ");
    }

    #[test]
    fn test_tall_contact_block_draws() {
        let mut site = hotel::content();
        let detail = site.contact.details[0].clone();
        site.contact.details = vec![detail; 400];

        let mut terminal = Terminal::new(TestBackend::new(200, 40)).unwrap();
        let mut app = App::new(Page::new(site));
        app.activate("contact");
        settle(&mut app);
        terminal.draw(|f| ui(f, &mut app)).unwrap();

        app.scroll.scroll_by(400);
        terminal.draw(|f| ui(f, &mut app)).unwrap();
    }

    #[test]
    fn test_tab_focuses_hero_button_and_enter_follows_it() {
        let mut app = app();
        let target = app.page.content().hero.primary_cta.target.clone();

        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.action_cursor, Some(0));
        assert_eq!(app.page.active_section(), "home");

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page.active_section(), target);
        settle(&mut app);
        assert_eq!(app.scroll.offset(), app.scroll.top_of(&target).unwrap());
    }

    #[test]
    fn test_footer_link_activates_its_section() {
        let mut app = app();
        let link = app.page.content().footer.columns[0].links[1].clone();

        for _ in 0..=FOOTER_ACTIONS_START + 1 {
            app.handle_key(key(KeyCode::Tab));
        }
        assert_eq!(app.actions[app.action_cursor.unwrap()].block, FOOTER_ID);
        settle(&mut app);
        assert_eq!(app.scroll.offset(), app.scroll.max_offset());

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page.active_section(), link.id);
    }

    #[test]
    fn test_back_tab_wraps_to_last_footer_link() {
        let mut app = app();
        app.handle_key(key(KeyCode::BackTab));
        assert_eq!(app.action_cursor, Some(app.actions.len() - 1));

        // Moving along the nav bar leaves the page buttons
        app.handle_key(key(KeyCode::Right));
        assert_eq!(app.action_cursor, None);
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page.active_section(), "about");
    }

    #[test]
    fn test_offer_button_leads_to_contact() {
        let mut app = app();
        for _ in 0..=OFFER_ACTION {
            app.handle_key(key(KeyCode::Tab));
        }
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.page.active_section(), "contact");
    }

    #[test]
    fn test_manual_scroll_is_clamped() {
        let mut app = app();
        app.scroll.scroll_by(-10);
        assert_eq!(app.scroll.offset(), 0);
        app.scroll.scroll_by(10_000);
        assert_eq!(app.scroll.offset(), app.scroll.total_height() - 20);
    }
}
