//! Stopping-power sweeps over momentum, with CSV and PNG export.

use std::path::Path;

use anyhow::{Context, Result};
use plotters::prelude::*;

use crate::error::{BetheError, BetheResult};
use crate::material::Material;
use crate::particle::Particle;
use crate::stopping::StoppingPowerEvaluator;

#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint {
    pub momentum: f64,
    pub beta: f64,
    pub gamma: f64,
    pub beta_gamma: f64,
    pub energy: f64,
    pub stopping_power: f64,
}

#[derive(Debug, Default)]
pub struct Sweep {
    pub points: Vec<DataPoint>,
    /// Samples outside the formula's domain, with the reason.
    pub skipped: Vec<(f64, BetheError)>,
}

/// `n` logarithmically spaced values from `start` to `stop` inclusive.
/// Both bounds must be finite and > 0.
pub fn log_space(start: f64, stop: f64, n: usize) -> BetheResult<Vec<f64>> {
    for (field, value) in [("sweep start", start), ("sweep stop", stop)] {
        if !(value.is_finite() && value > 0.0) {
            return Err(BetheError::Validation {
                field,
                value,
                constraint: "a finite value > 0",
            });
        }
    }
    Ok(match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let (lo, hi) = (start.log10(), stop.log10());
            let step = (hi - lo) / (n - 1) as f64;
            (0..n).map(|i| 10f64.powf(lo + step * i as f64)).collect()
        }
    })
}

/// Evaluates one sample at the particle's current momentum.
pub fn snapshot(
    particle: &Particle,
    material: &Material,
    evaluator: &StoppingPowerEvaluator,
) -> Result<DataPoint, BetheError> {
    let stopping_power = evaluator.evaluate(particle, material)?;
    Ok(DataPoint {
        momentum: particle.momentum(),
        beta: particle.beta(),
        gamma: particle.gamma()?,
        beta_gamma: particle.beta_gamma(),
        energy: particle.energy(),
        stopping_power,
    })
}

/// Evaluates the stopping power at each momentum. Samples that fail are
/// recorded in [`Sweep::skipped`] and the sweep carries on. The caller's
/// particle is left untouched.
pub fn sweep(
    particle: &Particle,
    material: &Material,
    evaluator: &StoppingPowerEvaluator,
    momenta: &[f64],
) -> Sweep {
    let mut probe = particle.clone();
    let mut out = Sweep::default();
    for &p in momenta {
        match probe
            .set_momentum(p)
            .and_then(|_| snapshot(&probe, material, evaluator))
        {
            Ok(point) => out.points.push(point),
            Err(err) => {
                log::debug!("skipping p = {p} MeV/c: {err}");
                out.skipped.push((p, err));
            }
        }
    }
    log::debug!(
        "swept {} samples of {} in {}: {} evaluated, {} skipped",
        momenta.len(),
        particle.name(),
        material.name(),
        out.points.len(),
        out.skipped.len()
    );
    out
}

pub fn export_csv(path: impl AsRef<Path>, log: &[DataPoint]) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    wtr.write_record([
        "momentum",
        "beta",
        "gamma",
        "beta_gamma",
        "energy",
        "stopping_power",
    ])?;
    for dp in log {
        wtr.write_record([
            format!("{:.6}", dp.momentum),
            format!("{:.9}", dp.beta),
            format!("{:.9}", dp.gamma),
            format!("{:.6}", dp.beta_gamma),
            format!("{:.6}", dp.energy),
            format!("{:.9}", dp.stopping_power),
        ])?;
    }
    wtr.flush()
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Log-log plot of stopping power against βγ.
pub fn plot_curve(path: impl AsRef<Path>, log: &[DataPoint], caption: &str) -> Result<()> {
    anyhow::ensure!(!log.is_empty(), "nothing to plot");

    let (x_min, x_max) = bounds(log.iter().map(|d| d.beta_gamma));
    let (y_min, y_max) = bounds(log.iter().map(|d| d.stopping_power));

    let root = BitMapBackend::new(path.as_ref(), (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(
            (x_min * 0.9..x_max * 1.1).log_scale(),
            (y_min * 0.9..y_max * 1.1).log_scale(),
        )?;

    chart
        .configure_mesh()
        .x_desc("βγ")
        .y_desc("-dE/dx (MeV cm²/g)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            log.iter().map(|d| (d.beta_gamma, d.stopping_power)),
            &BLUE,
        ))?
        .label("Bethe-Bloch")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 10, y)], &BLUE));

    chart.configure_series_labels().border_style(&BLACK).draw()?;
    root.present()?;
    Ok(())
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Particle, Material, StoppingPowerEvaluator) {
        (
            Particle::new("p", 938, 1).unwrap(),
            Material::new("Cu", 63.5, 29, 8.96, 322e-6).unwrap(),
            StoppingPowerEvaluator::default(),
        )
    }

    #[test]
    fn log_space_hits_both_ends() {
        let xs = log_space(10.0, 1e6, 6).unwrap();
        assert_eq!(xs.len(), 6);
        for (x, want) in xs.iter().zip([10.0, 1e2, 1e3, 1e4, 1e5, 1e6]) {
            assert!(((x - want) / want).abs() < 1e-12, "{x} vs {want}");
        }
        assert!(log_space(1.0, 2.0, 0).unwrap().is_empty());
        assert_eq!(log_space(5.0, 9.0, 1).unwrap(), vec![5.0]);
    }

    #[test]
    fn log_space_rejects_non_positive_bounds() {
        for (start, stop) in [
            (0.0, 10.0),
            (-1.0, 10.0),
            (1.0, 0.0),
            (1.0, f64::NAN),
            (1.0, f64::INFINITY),
        ] {
            let err = log_space(start, stop, 5).unwrap_err();
            assert!(err.is_validation(), "{err}");
        }
        let err = log_space(-1.0, 10.0, 5).unwrap_err();
        assert!(err.to_string().contains("sweep start"));
    }

    #[test]
    fn sweep_skips_out_of_domain_samples() {
        let (p, cu, eval) = setup();
        let result = sweep(&p, &cu, &eval, &[0.0, 10.0, -3.0, 600.0]);
        assert_eq!(result.points.len(), 1);
        assert_eq!(result.points[0].momentum, 600.0);
        assert_eq!(result.skipped.len(), 3);
        assert!(result.skipped[0].1.is_domain());
        assert!(result.skipped[1].1.is_domain());
        assert!(result.skipped[2].1.is_validation());
    }

    #[test]
    fn sweep_leaves_particle_untouched() {
        let (mut p, cu, eval) = setup();
        p.set_momentum(123.0).unwrap();
        sweep(&p, &cu, &eval, &[600.0, 900.0]);
        assert_eq!(p.momentum(), 123.0);
    }

    #[test]
    fn snapshot_fields_agree_with_particle() {
        let (mut p, cu, eval) = setup();
        p.set_momentum(410.0).unwrap();
        let dp = snapshot(&p, &cu, &eval).unwrap();
        assert_eq!(dp.beta, p.beta());
        assert_eq!(dp.energy, p.energy());
        assert_eq!(dp.stopping_power, eval.evaluate(&p, &cu).unwrap());
    }

    #[test]
    fn csv_has_header_and_one_row_per_point() {
        let (p, cu, eval) = setup();
        let result = sweep(&p, &cu, &eval, &log_space(100.0, 1e4, 5).unwrap());
        let path = std::env::temp_dir().join(format!("bethe-sweep-{}.csv", std::process::id()));
        export_csv(&path, &result.points).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).ok();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "momentum,beta,gamma,beta_gamma,energy,stopping_power");
        assert!(lines[1].starts_with("100.000000,"));
    }

    #[test]
    fn plot_refuses_empty_data() {
        let path = std::env::temp_dir().join("bethe-empty.png");
        assert!(plot_curve(&path, &[], "empty").is_err());
    }
}
