use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{self, Event as CEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use googly_config::Config;
use googly_core::{logging, Command, EyeRig, FramePacer, Rgb, TickCounter};
use googly_ui::{render_pixmap, render_status, screen_layout, Pixmap, StatusView};

mod demo;
mod keymap;

use demo::DemoSequencer;
use keymap::Input;

struct App {
    rig: EyeRig,
    pixmap: Pixmap,
    pacer: FramePacer,
    frames: TickCounter,
    demo: DemoSequencer,
}

impl App {
    fn new(config: &Config, now: Instant) -> Self {
        let mut rig = match config.seed {
            Some(seed) => EyeRig::with_seed(config.canvas.width, config.canvas.height, seed),
            None => EyeRig::new(config.canvas.width, config.canvas.height),
        };
        let [br, bg, bb] = config.colors.background;
        let [mr, mg, mb] = config.colors.main;
        rig.set_colors(Rgb(br, bg, bb), Rgb(mr, mg, mb));
        rig.open(true, true);
        rig.set_autoblinker(
            config.autoblinker.enabled,
            config.autoblinker.interval_s,
            config.autoblinker.jitter_s,
        );
        rig.set_idle(config.idle.enabled, config.idle.interval_s, config.idle.jitter_s);

        Self {
            rig,
            pixmap: Pixmap::new(config.canvas.width as u32, config.canvas.height as u32),
            pacer: FramePacer::new(config.canvas.fps, now),
            frames: TickCounter::default(),
            demo: DemoSequencer::new(config.demo),
        }
    }

    /// Apply one key input. Returns `true` when the app should quit.
    fn dispatch(&mut self, input: Input) -> bool {
        match input {
            Input::Quit => return true,
            Input::ToggleDemo => {
                let on = self.demo.toggle();
                tracing::info!(enabled = on, "demo toggled");
            }
            Input::ToggleIdle => {
                let on = !self.rig.idle_enabled();
                Command::IdleMode {
                    on,
                    interval_s: 1,
                    jitter_s: 3,
                }
                .apply(&mut self.rig);
                tracing::info!(enabled = on, "idle mode toggled");
            }
            Input::ToggleSweat => {
                let on = !self.rig.sweat_enabled();
                Command::Sweat(on).apply(&mut self.rig);
                tracing::info!(enabled = on, "sweat toggled");
            }
            Input::ToggleCyclops => {
                let on = !self.rig.cyclops();
                Command::Cyclops(on).apply(&mut self.rig);
                tracing::info!(enabled = on, "cyclops toggled");
            }
            Input::ToggleCurious => {
                let on = !self.rig.curious();
                Command::Curious(on).apply(&mut self.rig);
                tracing::info!(enabled = on, "curiosity toggled");
            }
            Input::Mood(mood) => {
                Command::SetMood(mood).apply(&mut self.rig);
                tracing::info!(mood = mood.label(), "mood set");
            }
            Input::Look(gaze) => Command::Look(gaze).apply(&mut self.rig),
            Input::Blink => Command::Blink {
                left: true,
                right: true,
            }
            .apply(&mut self.rig),
            Input::Laugh => Command::Laugh.apply(&mut self.rig),
            Input::Confused => Command::Confused.apply(&mut self.rig),
        }
        false
    }

    fn toggles(&self) -> Vec<&'static str> {
        let mut toggles = Vec::new();
        if self.rig.autoblink_enabled() {
            toggles.push("autoblink");
        }
        if self.rig.idle_enabled() {
            toggles.push("idle");
        }
        if self.rig.curious() {
            toggles.push("curious");
        }
        if self.rig.cyclops() {
            toggles.push("cyclops");
        }
        if self.rig.sweat_enabled() {
            toggles.push("sweat");
        }
        toggles
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> Result<()> {
    logging::init();
    tracing::info!("googly starting up");

    let config = Config::load_or_default()?;
    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &config);
    restore_terminal(terminal)?;
    res
}

fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &Config) -> Result<()> {
    let mut app = App::new(config, Instant::now());

    loop {
        // ── Advance and draw when the frame budget elapses ──
        let now = Instant::now();
        if app.pacer.frame_due(now) {
            if let Some((name, commands)) = app.demo.step(now) {
                tracing::info!(scene = name, "demo scene");
                for command in commands {
                    command.apply(&mut app.rig);
                }
            }

            app.rig.advance(now, &mut app.pixmap);
            app.frames.tick(now);

            terminal.draw(|f| {
                let rects = screen_layout(f.area());
                render_pixmap(f.buffer_mut(), rects.face, &app.pixmap);
                let view = StatusView {
                    mood: app.rig.mood().label(),
                    toggles: app.toggles(),
                    demo: app.demo.enabled(),
                    fps: app.frames.fps(),
                };
                render_status(f, rects.status, &view);
            })?;
        }

        // ── Block on input for the rest of the frame ──
        let timeout = app.pacer.remaining(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if let Some(input) = keymap::input_for(&key) {
                        if app.dispatch(input) {
                            tracing::info!("shutting down");
                            return Ok(());
                        }
                    }
                }
                // Resize takes effect on the next draw; everything else is
                // ignored.
                _ => {}
            }
        }
    }
}
