use anyhow::{Context, Result};
use clawgate_config::AppConfig;
use clawgate_ops::{
    context::{provide, use_operation_state},
    logger,
    middleware::LoggingMiddleware,
    theme::Theme,
    views::{self, RenderContext},
    AbortConfirmBinding, AbortConfirmRequest, NextStep, NextStepTarget, OperationHandle, Store,
    SuccessBinding,
};
use ratatui::{
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    },
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame, Terminal,
};
use std::cell::RefCell;
use std::io;
use std::rc::Rc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

const MAX_ACTIVITY: usize = 200;

/// Completion of simulated background work
#[derive(Debug)]
enum WorkEvent {
    Finished { job: String },
}

/// Runs simulated jobs on the tokio runtime and reports back over a channel
#[derive(Clone)]
struct JobRunner {
    runtime: tokio::runtime::Handle,
    tx: UnboundedSender<WorkEvent>,
    duration: Duration,
}

impl JobRunner {
    /// Show the overlay, then run the job; the UI loop hides it on completion
    fn start(&self, job: impl Into<String>) {
        let job = job.into();
        use_operation_state().show_loading(Some(format!("{}...", job).as_str()));

        let tx = self.tx.clone();
        let duration = self.duration;
        self.runtime.spawn(async move {
            tokio::time::sleep(duration).await;
            if tx.send(WorkEvent::Finished { job }).is_err() {
                log::warn!("UI loop gone before job completed");
            }
        });
    }
}

/// Shared list of things that happened, newest last
#[derive(Clone, Default)]
struct ActivityLog(Rc<RefCell<Vec<String>>>);

impl ActivityLog {
    fn push(&self, entry: impl Into<String>) {
        let mut entries = self.0.borrow_mut();
        entries.push(entry.into());
        if entries.len() > MAX_ACTIVITY {
            entries.remove(0);
        }
    }
}

struct App {
    ops: OperationHandle,
    render_ctx: RenderContext,
    activity: ActivityLog,
    jobs: JobRunner,
    work_rx: UnboundedReceiver<WorkEvent>,
    running: bool,
}

fn main() -> Result<()> {
    let log_file = logger::init()?;
    log::info!("Starting clawgate-ops, logging to {}", log_file.display());

    let config = AppConfig::load();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_time()
        .build()
        .context("Failed to start tokio runtime")?;

    let mut store = Store::default();
    store.add_middleware(Box::new(LoggingMiddleware::new()));
    let ops = OperationHandle::new(store);

    let activity = ActivityLog::default();
    let transitions = activity.clone();
    ops.subscribe(move |state| {
        transitions.push(format!(
            "state: loading={} success={} confirm={}",
            state.loading.visible, state.success.visible, state.abort_confirm.visible
        ));
    });

    let (tx, work_rx) = mpsc::unbounded_channel();
    let mut app = App {
        ops,
        jobs: JobRunner {
            runtime: runtime.handle().clone(),
            tx,
            duration: Duration::from_millis(config.demo_work_millis),
        },
        render_ctx: RenderContext {
            config,
            theme: Theme::default(),
            spinner_frame: 0,
        },
        activity,
        work_rx,
        running: true,
    };

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ops = app.ops.clone();
    let result = provide(&ops, || run_app(&mut terminal, &mut app));

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting clawgate-ops");
    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        terminal.draw(|frame| render(frame, app))?;

        while let Ok(work) = app.work_rx.try_recv() {
            on_work_event(app, work);
        }

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (ignore key release)
                if key.kind == KeyEventKind::Press {
                    handle_key(app, key);
                }
            }
        } else if app.ops.loading().visible {
            app.render_ctx.spinner_frame = app.render_ctx.spinner_frame.wrapping_add(1);
        }
    }

    Ok(())
}

fn on_work_event(app: &mut App, event: WorkEvent) {
    match event {
        WorkEvent::Finished { job } => {
            log::info!("Job finished: {}", job);
            app.activity.push(format!("finished: {}", job));

            let jobs = app.jobs.clone();
            let again = job.clone();
            app.ops.hide_loading();
            app.ops.show_success(
                Some(format!("{} finished.", job).as_str()),
                vec![
                    NextStep::link("View run", "/cron/runs/latest"),
                    NextStep::callback("Run again", move || jobs.start(again.clone())),
                ],
            );
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('q') {
        app.running = false;
        return;
    }

    let state = app.ops.state();

    // The overlay blocks all other input until the work completes
    if state.loading.visible {
        return;
    }

    if state.abort_confirm.visible {
        match key.code {
            KeyCode::Enter | KeyCode::Char('y') => {
                AbortConfirmBinding::confirm(&app.ops);
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                AbortConfirmBinding::cancel(&app.ops);
            }
            KeyCode::Char('b') => {
                // Backdrop dismissal: hide without firing either callback
                app.ops.hide_abort_confirm();
                app.activity.push("confirmation dismissed");
            }
            _ => {}
        }
        return;
    }

    if state.success.visible {
        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                if let Some(NextStepTarget::Link(href)) = SuccessBinding::activate(&app.ops, index) {
                    app.activity.push(format!("navigate → {}", href));
                }
            }
            KeyCode::Char('x') | KeyCode::Esc => {
                SuccessBinding::dismiss(&app.ops);
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('l') => app.jobs.start("Syncing skills"),
        KeyCode::Char('d') => request_delete(app),
        _ => {}
    }
}

fn request_delete(app: &App) {
    let jobs = app.jobs.clone();
    let activity = app.activity.clone();
    app.ops.show_abort_confirm(
        AbortConfirmRequest::new()
            .message("Delete cron job 'nightly-backup'? This cannot be undone.")
            .confirm_label("Delete")
            .on_confirm(move || jobs.start("Deleting nightly-backup"))
            .on_cancel(move || activity.push("deletion cancelled")),
    );
}

fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let theme = &app.render_ctx.theme;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let header = Paragraph::new(Line::from(Span::styled(
        "Clawgate operations",
        theme.panel_title(),
    )))
    .block(Block::default().borders(Borders::BOTTOM))
    .style(Style::default().bg(theme.bg_primary));
    frame.render_widget(header, chunks[0]);

    let entries = app.activity.0.borrow();
    let visible = chunks[1].height.saturating_sub(2) as usize;
    let items: Vec<ListItem> = entries
        .iter()
        .rev()
        .take(visible)
        .map(|entry| ListItem::new(Span::styled(entry.as_str(), theme.text())))
        .collect();
    frame.render_widget(
        List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Activity ")
                .title_style(theme.panel_title()),
        ),
        chunks[1],
    );

    let hints = Line::from(vec![
        Span::styled(" l", theme.key_hint()),
        Span::styled(" run job  ", theme.muted()),
        Span::styled("d", theme.key_hint()),
        Span::styled(" delete  ", theme.muted()),
        Span::styled("b", theme.key_hint()),
        Span::styled(" dismiss confirm  ", theme.muted()),
        Span::styled("q", theme.key_hint()),
        Span::styled(" quit", theme.muted().add_modifier(Modifier::ITALIC)),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[2]);

    views::render(&app.ops.state(), &app.render_ctx, area, frame);
}
