use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph},
};
use std::io;

use bethe::metrics::{self, DataPoint, snapshot};
use bethe::{Material, Particle, StoppingPowerEvaluator};

/// Momentum steps per decade for the arrow keys.
const FINE_STEPS: f64 = 20.0;
const COARSE_STEPS: f64 = 2.0;
const MIN_MOMENTUM: f64 = 1.0;
const MAX_MOMENTUM: f64 = 1e7;

pub fn start(
    particle: Particle,
    material: Material,
    evaluator: StoppingPowerEvaluator,
    momentum: f64,
) -> anyhow::Result<()> {
    let mut particle = particle;
    particle.set_momentum(momentum.clamp(MIN_MOMENTUM, MAX_MOMENTUM))?;

    // Setup terminal
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    crossterm::terminal::enable_raw_mode()?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut visited: Vec<DataPoint> = Vec::new();
    let outcome = run(&mut terminal, &mut particle, &material, &evaluator, &mut visited);

    crossterm::terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    outcome?;

    if visited.is_empty() {
        log::info!("no samples recorded, nothing exported");
        return Ok(());
    }
    visited.sort_by(|a, b| a.beta_gamma.total_cmp(&b.beta_gamma));
    visited.dedup_by(|a, b| a.momentum == b.momentum);

    metrics::export_csv("realtime.csv", &visited)?;
    log::info!("✅ Data exported to realtime.csv");
    let caption = format!("{} in {}", particle.name(), material.name());
    metrics::plot_curve("plot.png", &visited, &caption)?;
    log::info!("✅ Plot saved to plot.png");
    Ok(())
}

fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    particle: &mut Particle,
    material: &Material,
    evaluator: &StoppingPowerEvaluator,
    visited: &mut Vec<DataPoint>,
) -> anyhow::Result<()> {
    record(particle, material, evaluator, visited);

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .margin(2)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                ])
                .split(f.area());

            let setup_text = format!(
                "{} (M = {} MeV/c², z = {}) in {} (Z = {}, A = {}, I = {} MeV)",
                particle.name(),
                particle.rest_mass(),
                particle.charge(),
                material.name(),
                material.atomic_number(),
                material.atomic_mass(),
                material.mean_ionization_energy(),
            );
            let momentum_text = format!(
                "Momentum: {:.3} MeV/c | Energy: {:.3} MeV",
                particle.momentum(),
                particle.energy()
            );
            let gamma_text = match particle.gamma() {
                Ok(gamma) => format!(
                    "β = {:.6} | Lorentz factor (γ) = {:.4} | βγ = {:.4}",
                    particle.beta(),
                    gamma,
                    particle.beta_gamma()
                ),
                Err(err) => format!("β = {:.6} | {err}", particle.beta()),
            };
            let w_max_text = match evaluator.max_energy_transfer(particle) {
                Ok(w) => format!("Max energy transfer W_max: {w:.6} MeV"),
                Err(err) => format!("W_max: {err}"),
            };
            let dedx_text = match evaluator.evaluate(particle, material) {
                Ok(dedx) => format!("Stopping power: {dedx:.6} MeV cm²/g"),
                Err(err) => format!("Stopping power: {err}"),
            };

            let blocks = vec![
                Paragraph::new(setup_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(momentum_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(gamma_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(w_max_text).block(Block::default().borders(Borders::ALL)),
                Paragraph::new(dedx_text).block(Block::default().borders(Borders::ALL)),
            ];

            for (i, b) in blocks.into_iter().enumerate() {
                f.render_widget(b, chunks[i]);
            }
        })?;

        // Input handling
        if event::poll(std::time::Duration::from_millis(200))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let steps = match key.code {
                    KeyCode::Right => FINE_STEPS,
                    KeyCode::Left => -FINE_STEPS,
                    KeyCode::Up => COARSE_STEPS,
                    KeyCode::Down => -COARSE_STEPS,
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    _ => continue,
                };
                let p = (particle.momentum() * 10f64.powf(1.0 / steps))
                    .clamp(MIN_MOMENTUM, MAX_MOMENTUM);
                particle.set_momentum(p)?;
                record(particle, material, evaluator, visited);
            }
        }
    }
}

fn record(
    particle: &Particle,
    material: &Material,
    evaluator: &StoppingPowerEvaluator,
    visited: &mut Vec<DataPoint>,
) {
    match snapshot(particle, material, evaluator) {
        Ok(point) => visited.push(point),
        Err(err) => log::debug!("not recording p = {}: {err}", particle.momentum()),
    }
}
