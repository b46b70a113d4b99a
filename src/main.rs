mod tui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bethe::metrics::{self, log_space};
use bethe::{Material, Particle, StoppingPowerEvaluator};
use clap::{Args, Parser, Subcommand};

/// Bethe-Bloch stopping power calculator
#[derive(Parser)]
#[command(name = "bethe", about = "Mean ionization energy loss of charged particles in matter")]
struct Cli {
    #[command(flatten)]
    setup: Setup,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Projectile and absorber. Defaults describe a proton in copper.
#[derive(Args)]
struct Setup {
    #[arg(long, global = true, default_value = "p")]
    particle_name: String,
    /// Rest mass (MeV/c²)
    #[arg(long, global = true, default_value_t = 938.0)]
    mass: f64,
    /// Charge (units of e)
    #[arg(long, global = true, default_value_t = 1.0, allow_negative_numbers = true)]
    charge: f64,

    #[arg(long, global = true, default_value = "Cu")]
    material_name: String,
    /// Atomic mass A (g/mol)
    #[arg(long, global = true, default_value_t = 63.5)]
    atomic_mass: f64,
    /// Atomic number Z
    #[arg(long, global = true, default_value_t = 29.0)]
    atomic_number: f64,
    /// Density (g/cm³)
    #[arg(long, global = true, default_value_t = 8.96)]
    density: f64,
    /// Mean ionization energy I (MeV)
    #[arg(long, global = true, default_value_t = 322e-6)]
    ionization: f64,
}

impl Setup {
    fn build(&self) -> Result<(Particle, Material)> {
        let particle = Particle::new(&self.particle_name, self.mass, self.charge)
            .context("invalid particle")?;
        let material = Material::new(
            &self.material_name,
            self.atomic_mass,
            self.atomic_number,
            self.density,
            self.ionization,
        )
        .context("invalid material")?;
        Ok((particle, material))
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate the stopping power at one momentum
    Eval {
        /// Momentum (MeV/c)
        #[arg(long, default_value_t = 600.0)]
        momentum: f64,
        /// Also print the density-scaled value (MeV/cm)
        #[arg(long)]
        linear: bool,
    },
    /// Sweep momentum logarithmically, export CSV and a log-log plot
    Sweep {
        #[arg(long, default_value_t = 10.0)]
        from: f64,
        #[arg(long, default_value_t = 1e6)]
        to: f64,
        #[arg(long, default_value_t = 200)]
        samples: usize,
        #[arg(long, default_value = "bethe.csv")]
        csv: PathBuf,
        #[arg(long, default_value = "bethe.png")]
        plot: PathBuf,
    },
    /// Run interactive TUI explorer
    Tui {
        /// Starting momentum (MeV/c)
        #[arg(long, default_value_t = 600.0)]
        momentum: f64,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let (particle, material) = cli.setup.build()?;
    let evaluator = StoppingPowerEvaluator::default();

    match cli.command {
        Some(Commands::Eval { momentum, linear }) => {
            run_eval(particle, &material, &evaluator, momentum, linear)?
        }
        Some(Commands::Sweep { from, to, samples, csv, plot }) => {
            run_sweep(&particle, &material, &evaluator, from, to, samples, &csv, &plot)?
        }
        Some(Commands::Tui { momentum }) => tui::start(particle, material, evaluator, momentum)?,
        None => run_eval(particle, &material, &evaluator, 600.0, false)?,
    }

    Ok(())
}

fn run_eval(
    mut particle: Particle,
    material: &Material,
    evaluator: &StoppingPowerEvaluator,
    momentum: f64,
    linear: bool,
) -> Result<()> {
    particle.set_momentum(momentum)?;
    let dedx = evaluator.evaluate(&particle, material)?;

    println!("{particle}\n");
    println!("{material}\n");
    println!("Stopping power = {dedx:.6} MeV cm^2/g");
    if linear {
        let linear = evaluator.evaluate_linear(&particle, material)?;
        println!("Linear stopping power = {linear:.6} MeV/cm");
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_sweep(
    particle: &Particle,
    material: &Material,
    evaluator: &StoppingPowerEvaluator,
    from: f64,
    to: f64,
    samples: usize,
    csv: &Path,
    plot: &Path,
) -> Result<()> {
    anyhow::ensure!(to > from, "need --from < --to");

    let momenta = log_space(from, to, samples)?;
    let result = metrics::sweep(particle, material, evaluator, &momenta);
    if let Some((p, err)) = result.skipped.last() {
        log::warn!(
            "{} of {samples} samples skipped (last at p = {p} MeV/c: {err})",
            result.skipped.len()
        );
    }

    metrics::export_csv(csv, &result.points)?;
    log::info!("✅ Data exported to {}", csv.display());

    let caption = format!("{} in {}", particle.name(), material.name());
    metrics::plot_curve(plot, &result.points, &caption)?;
    log::info!("✅ Plot saved to {}", plot.display());
    Ok(())
}
