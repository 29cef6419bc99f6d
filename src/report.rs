//! Renders the comparative figures out of a merged report table.
//!
//! Four artifacts, with fixed names so downstream tooling can rely on
//! them:
//!
//! - `size-threads-time.png`: machines x algorithms grid of heatmaps,
//!   mean time by (matrix size, thread count), log color scale.
//! - `distribution.png`: same grid, violin of the timing distribution at
//!   the reference configuration (largest size and thread count).
//! - `threads-time.png`: faceted mean-time lines over thread counts, one
//!   line per matrix size.
//! - `size-time.png`: faceted mean-time lines over matrix sizes, one line
//!   per thread count.
//!
//! Every renderer fails fast on an empty table or an empty panel subset;
//! none of them writes a blank image.

use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::{
    error::{Error, Result},
    table::ReportRow,
};

pub const HEATMAP_FILE: &str = "size-threads-time.png";
pub const DISTRIBUTION_FILE: &str = "distribution.png";
pub const THREADS_LINE_FILE: &str = "threads-time.png";
pub const SIZE_LINE_FILE: &str = "size-time.png";

const PANEL_WIDTH: u32 = 600;
const PANEL_HEIGHT: u32 = 450;
const TITLE_HEIGHT: u32 = 60;

/// Renders all four artifacts into `out_dir` and returns their paths in
/// the order listed in the module docs.
pub fn render_all(rows: &[ReportRow], out_dir: &Path) -> Result<Vec<PathBuf>> {
    Ok(vec![
        render_heatmap_grid(rows, out_dir)?,
        render_distribution_grid(rows, out_dir)?,
        render_threads_line(rows, out_dir)?,
        render_size_line(rows, out_dir)?,
    ])
}

// ---------------------------------------------------------------------------
// Heatmap grid
// ---------------------------------------------------------------------------

struct HeatPanel {
    title: String,
    /// Ascending thread counts (x axis) and matrix sizes (y axis).
    threads: Vec<u32>,
    sizes: Vec<u32>,
    /// Mean time in seconds, indexed `[size][thread]`; `None` where the
    /// panel has no samples for that cell.
    means: Vec<Vec<Option<f64>>>,
}

/// Mean `time_secs` per (matrix size, thread count) for every machine and
/// algorithm, drawn as an M x A grid of log-normalized heatmaps.
pub fn render_heatmap_grid(rows: &[ReportRow], out_dir: &Path) -> Result<PathBuf> {
    ensure_rows(rows)?;
    let machines = distinct(rows.iter().map(|r| r.machine.clone()));
    let algorithms = distinct(rows.iter().map(|r| r.algorithm.clone()));

    let mut panels = Vec::new();
    for machine in &machines {
        for algorithm in &algorithms {
            let subset: Vec<&ReportRow> = rows
                .iter()
                .filter(|r| &r.machine == machine && &r.algorithm == algorithm)
                .collect();
            ensure_panel(&subset, machine, algorithm)?;

            let mut threads = distinct(subset.iter().map(|r| r.n_threads));
            let mut sizes = distinct(subset.iter().map(|r| r.matrix_size));
            threads.sort_unstable();
            sizes.sort_unstable();

            let mut means = vec![vec![None; threads.len()]; sizes.len()];
            for (yi, &size) in sizes.iter().enumerate() {
                for (xi, &nt) in threads.iter().enumerate() {
                    let samples: Vec<f64> = subset
                        .iter()
                        .filter(|r| r.matrix_size == size && r.n_threads == nt)
                        .map(|r| r.time_secs)
                        .collect();
                    if !samples.is_empty() {
                        let m = mean(&samples);
                        if m <= 0.0 {
                            return Err(Error::NonPositiveTime {
                                machine: machine.clone(),
                                algorithm: algorithm.clone(),
                                value: m,
                            });
                        }
                        means[yi][xi] = Some(m);
                    }
                }
            }

            panels.push(HeatPanel {
                title: panel_title(machine, algorithm),
                threads,
                sizes,
                means,
            });
        }
    }

    let path = out_dir.join(HEATMAP_FILE);
    draw_heatmap_grid(&panels, machines.len(), algorithms.len(), &path).map_err(|e| {
        Error::Render {
            path: path.clone(),
            message: e.to_string(),
        }
    })?;
    Ok(path)
}

fn draw_heatmap_grid(
    panels: &[HeatPanel],
    nrows: usize,
    ncols: usize,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let size = figure_size(nrows, ncols);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(
        "Time (secs) for every threads-size combination",
        ("sans-serif", 28),
    )?;

    let areas = root.split_evenly((nrows, ncols));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        let nx = panel.threads.len() as i32;
        let ny = panel.sizes.len() as i32;

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(36)
            .y_label_area_size(56)
            .build_cartesian_2d(0..nx, 0..ny)?;

        let threads = panel.threads.clone();
        let sizes = panel.sizes.clone();
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_y_mesh()
            .x_labels(panel.threads.len())
            .y_labels(panel.sizes.len())
            .x_label_formatter(&move |x| {
                threads
                    .get(*x as usize)
                    .map(|t| t.to_string())
                    .unwrap_or_default()
            })
            .y_label_formatter(&move |y| {
                sizes
                    .get(*y as usize)
                    .map(|s| s.to_string())
                    .unwrap_or_default()
            })
            .x_desc("N_Threads")
            .y_desc("Matrix_Size")
            .draw()?;

        // log color normalization per panel, as in the reference figures
        let (mut lo, mut hi) = (f64::INFINITY, f64::NEG_INFINITY);
        for row in &panel.means {
            for m in row.iter().flatten() {
                lo = lo.min(*m);
                hi = hi.max(*m);
            }
        }
        let (llo, lhi) = (lo.ln(), hi.ln());
        let span = if lhi > llo { lhi - llo } else { 1.0 };

        chart.draw_series(panel.means.iter().enumerate().flat_map(|(yi, row)| {
            row.iter().enumerate().filter_map(move |(xi, &m)| {
                m.map(|m| {
                    let t = (m.ln() - llo) / span;
                    Rectangle::new(
                        [(xi as i32, yi as i32), (xi as i32 + 1, yi as i32 + 1)],
                        color_ramp(t).filled(),
                    )
                })
            })
        }))?;
    }

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Distribution grid
// ---------------------------------------------------------------------------

struct ViolinPanel {
    title: String,
    samples: Vec<f64>,
}

/// Distribution of `time_secs` at the reference configuration (the
/// largest matrix size and thread count present in the table), one
/// quartile-annotated violin per machine/algorithm panel.
pub fn render_distribution_grid(rows: &[ReportRow], out_dir: &Path) -> Result<PathBuf> {
    ensure_rows(rows)?;
    let machines = distinct(rows.iter().map(|r| r.machine.clone()));
    let algorithms = distinct(rows.iter().map(|r| r.algorithm.clone()));

    // 2000 and 20 for the default sweep
    let ref_size = rows.iter().map(|r| r.matrix_size).max().unwrap_or(0);
    let ref_threads = rows.iter().map(|r| r.n_threads).max().unwrap_or(0);

    let mut panels = Vec::new();
    for machine in &machines {
        for algorithm in &algorithms {
            let samples: Vec<f64> = rows
                .iter()
                .filter(|r| {
                    &r.machine == machine
                        && &r.algorithm == algorithm
                        && r.matrix_size == ref_size
                        && r.n_threads == ref_threads
                })
                .map(|r| r.time_secs)
                .collect();
            if samples.is_empty() {
                return Err(Error::EmptyTable {
                    context: format!(
                        "machine {machine}, algorithm {algorithm} at size {ref_size}, {ref_threads} threads"
                    ),
                });
            }
            panels.push(ViolinPanel {
                title: panel_title(machine, algorithm),
                samples,
            });
        }
    }

    let path = out_dir.join(DISTRIBUTION_FILE);
    let title = format!(
        "Time (secs) distribution for Matrix_Size={ref_size}, N_Threads={ref_threads}"
    );
    draw_distribution_grid(&panels, machines.len(), algorithms.len(), &title, &path).map_err(
        |e| Error::Render {
            path: path.clone(),
            message: e.to_string(),
        },
    )?;
    Ok(path)
}

fn draw_distribution_grid(
    panels: &[ViolinPanel],
    nrows: usize,
    ncols: usize,
    title: &str,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let size = figure_size(nrows, ncols);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 28))?;

    let areas = root.split_evenly((nrows, ncols));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        let mut sorted = panel.samples.clone();
        sorted.sort_by(|a, b| a.total_cmp(b));
        let (q1, q2, q3) = (
            percentile(&sorted, 25.0),
            percentile(&sorted, 50.0),
            percentile(&sorted, 75.0),
        );

        let bw = silverman_bandwidth(&sorted);
        let y_lo = sorted[0] - 3.0 * bw;
        let y_hi = sorted[sorted.len() - 1] + 3.0 * bw;

        // density profile, widest point scaled to 0.35 panel units
        const STEPS: usize = 80;
        const MAX_HALF_WIDTH: f64 = 0.35;
        let ys: Vec<f64> = (0..=STEPS)
            .map(|i| y_lo + (y_hi - y_lo) * i as f64 / STEPS as f64)
            .collect();
        let densities: Vec<f64> = ys.iter().map(|&y| gaussian_kde(&sorted, bw, y)).collect();
        let peak = densities.iter().cloned().fold(f64::MIN, f64::max).max(1e-300);
        let half_width = |d: f64| d / peak * MAX_HALF_WIDTH;

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(24)
            .y_label_area_size(64)
            .build_cartesian_2d(0.0..1.0, y_lo..y_hi)?;
        chart
            .configure_mesh()
            .disable_x_mesh()
            .disable_x_axis()
            .y_desc("Time (secs)")
            .draw()?;

        let mut outline: Vec<(f64, f64)> = ys
            .iter()
            .zip(densities.iter())
            .map(|(&y, &d)| (0.5 - half_width(d), y))
            .collect();
        outline.extend(
            ys.iter()
                .zip(densities.iter())
                .rev()
                .map(|(&y, &d)| (0.5 + half_width(d), y)),
        );

        let body = BLUE.mix(0.4);
        chart.draw_series(std::iter::once(Polygon::new(outline.clone(), body.filled())))?;
        chart.draw_series(std::iter::once(PathElement::new(outline, BLUE)))?;

        // quartile ticks inside the body, widest for the median
        for (q, w) in [(q1, 2u32), (q2, 3), (q3, 2)] {
            let hw = half_width(gaussian_kde(&sorted, bw, q));
            chart.draw_series(std::iter::once(PathElement::new(
                vec![(0.5 - hw, q), (0.5 + hw, q)],
                BLACK.stroke_width(w),
            )))?;
        }
    }

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Faceted line plots
// ---------------------------------------------------------------------------

struct LinePanel {
    title: String,
    /// One series per hue value: (legend label, ascending (x, mean y)).
    series: Vec<(String, Vec<(u32, f64)>)>,
}

/// Mean `time_secs` against thread count, faceted machine x algorithm,
/// one line per matrix size.
pub fn render_threads_line(rows: &[ReportRow], out_dir: &Path) -> Result<PathBuf> {
    render_line_facets(
        rows,
        out_dir,
        THREADS_LINE_FILE,
        "Mean time (secs) vs N_Threads",
        "N_Threads",
        |r| r.n_threads,
        |r| r.matrix_size,
        "Matrix_Size",
    )
}

/// Mean `time_secs` against matrix size, faceted machine x algorithm,
/// one line per thread count (a categorical hue, like the reference
/// figure).
pub fn render_size_line(rows: &[ReportRow], out_dir: &Path) -> Result<PathBuf> {
    render_line_facets(
        rows,
        out_dir,
        SIZE_LINE_FILE,
        "Mean time (secs) vs Matrix_Size",
        "Matrix_Size",
        |r| r.matrix_size,
        |r| r.n_threads,
        "N_Threads",
    )
}

#[allow(clippy::too_many_arguments)]
fn render_line_facets(
    rows: &[ReportRow],
    out_dir: &Path,
    file: &str,
    title: &str,
    x_desc: &str,
    x_of: impl Fn(&ReportRow) -> u32,
    hue_of: impl Fn(&ReportRow) -> u32,
    hue_desc: &str,
) -> Result<PathBuf> {
    ensure_rows(rows)?;
    let machines = distinct(rows.iter().map(|r| r.machine.clone()));
    let algorithms = distinct(rows.iter().map(|r| r.algorithm.clone()));

    let mut panels = Vec::new();
    for machine in &machines {
        for algorithm in &algorithms {
            let subset: Vec<&ReportRow> = rows
                .iter()
                .filter(|r| &r.machine == machine && &r.algorithm == algorithm)
                .collect();
            ensure_panel(&subset, machine, algorithm)?;

            let mut hues = distinct(subset.iter().map(|&r| hue_of(r)));
            hues.sort_unstable();
            let mut xs = distinct(subset.iter().map(|&r| x_of(r)));
            xs.sort_unstable();

            let mut series = Vec::new();
            for &hue in &hues {
                let mut points = Vec::new();
                for &x in &xs {
                    let samples: Vec<f64> = subset
                        .iter()
                        .filter(|&&r| hue_of(r) == hue && x_of(r) == x)
                        .map(|r| r.time_secs)
                        .collect();
                    if !samples.is_empty() {
                        points.push((x, mean(&samples)));
                    }
                }
                if !points.is_empty() {
                    series.push((format!("{hue_desc}={hue}"), points));
                }
            }
            panels.push(LinePanel {
                title: panel_title(machine, algorithm),
                series,
            });
        }
    }

    let path = out_dir.join(file);
    draw_line_facets(&panels, machines.len(), algorithms.len(), title, x_desc, &path).map_err(
        |e| Error::Render {
            path: path.clone(),
            message: e.to_string(),
        },
    )?;
    Ok(path)
}

fn draw_line_facets(
    panels: &[LinePanel],
    nrows: usize,
    ncols: usize,
    title: &str,
    x_desc: &str,
    path: &Path,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let size = figure_size(nrows, ncols);
    let root = BitMapBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;
    let root = root.titled(title, ("sans-serif", 28))?;

    let areas = root.split_evenly((nrows, ncols));
    for (panel, area) in panels.iter().zip(areas.iter()) {
        let x_lo = panel
            .series
            .iter()
            .flat_map(|(_, pts)| pts.iter().map(|p| p.0))
            .min()
            .unwrap_or(0);
        let mut x_hi = panel
            .series
            .iter()
            .flat_map(|(_, pts)| pts.iter().map(|p| p.0))
            .max()
            .unwrap_or(1);
        if x_hi == x_lo {
            // a single x value still needs a non-degenerate axis
            x_hi += 1;
        }
        let mut y_hi = panel
            .series
            .iter()
            .flat_map(|(_, pts)| pts.iter().map(|p| p.1))
            .fold(0.0f64, f64::max);
        if y_hi <= 0.0 {
            y_hi = 1.0;
        }

        let mut chart = ChartBuilder::on(area)
            .caption(&panel.title, ("sans-serif", 18))
            .margin(8)
            .x_label_area_size(36)
            .y_label_area_size(64)
            .build_cartesian_2d(x_lo..x_hi, 0.0..y_hi * 1.05)?;
        chart
            .configure_mesh()
            .x_desc(x_desc)
            .y_desc("Time (secs)")
            .draw()?;

        let nh = panel.series.len().max(2) - 1;
        for (i, (label, points)) in panel.series.iter().enumerate() {
            let color = color_ramp(i as f64 / nh as f64);
            chart
                .draw_series(LineSeries::new(points.iter().cloned(), &color))?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 16, y)], color.stroke_width(2))
                });
        }
        chart
            .configure_series_labels()
            .border_style(BLACK)
            .background_style(WHITE.mix(0.8))
            .draw()?;
    }

    root.present()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn ensure_rows(rows: &[ReportRow]) -> Result<()> {
    if rows.is_empty() {
        return Err(Error::EmptyTable {
            context: "merged table".to_string(),
        });
    }
    Ok(())
}

fn ensure_panel(subset: &[&ReportRow], machine: &str, algorithm: &str) -> Result<()> {
    if subset.is_empty() {
        return Err(Error::EmptyTable {
            context: format!("machine {machine}, algorithm {algorithm}"),
        });
    }
    Ok(())
}

fn panel_title(machine: &str, algorithm: &str) -> String {
    format!("Machine={machine} | Algorithm={algorithm}")
}

fn figure_size(nrows: usize, ncols: usize) -> (u32, u32) {
    (
        PANEL_WIDTH * ncols.max(1) as u32,
        TITLE_HEIGHT + PANEL_HEIGHT * nrows.max(1) as u32,
    )
}

/// Distinct values in first-appearance order.
fn distinct<T: Clone + PartialEq>(iter: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for v in iter {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Linear-interpolation percentile over pre-sorted samples.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.len() == 1 {
        return sorted[0];
    }
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

fn silverman_bandwidth(sorted: &[f64]) -> f64 {
    let n = sorted.len() as f64;
    let m = mean(sorted);
    let var = sorted.iter().map(|&x| (x - m) * (x - m)).sum::<f64>() / n;
    let bw = 1.06 * var.sqrt() * n.powf(-0.2);
    if bw > 0.0 {
        bw
    } else {
        // degenerate sample (all equal); any small positive width works
        (m.abs() * 1e-3).max(1e-9)
    }
}

fn gaussian_kde(samples: &[f64], bandwidth: f64, x: f64) -> f64 {
    let norm = 1.0 / ((2.0 * std::f64::consts::PI).sqrt() * bandwidth * samples.len() as f64);
    samples
        .iter()
        .map(|&s| {
            let z = (x - s) / bandwidth;
            (-0.5 * z * z).exp()
        })
        .sum::<f64>()
        * norm
}

/// Plasma-like ramp from dark blue through magenta and orange to yellow,
/// interpolated between a handful of control points.
fn color_ramp(t: f64) -> RGBColor {
    const STOPS: [(u8, u8, u8); 5] = [
        (13, 8, 135),
        (126, 3, 168),
        (204, 71, 120),
        (248, 149, 64),
        (240, 249, 33),
    ];
    let t = t.clamp(0.0, 1.0) * (STOPS.len() - 1) as f64;
    let i = (t.floor() as usize).min(STOPS.len() - 2);
    let frac = t - i as f64;
    let (r0, g0, b0) = STOPS[i];
    let (r1, g1, b1) = STOPS[i + 1];
    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    RGBColor(lerp(r0, r1), lerp(g0, g1), lerp(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(
        machine: &str,
        matrix_size: u32,
        n_threads: u32,
        thread: u32,
        time_us: f64,
        algorithm: &str,
    ) -> ReportRow {
        ReportRow {
            machine: machine.to_string(),
            matrix_size,
            n_threads,
            thread,
            time_us,
            time_secs: time_us * 1e-6,
            algorithm: algorithm.to_string(),
        }
    }

    fn small_table() -> Vec<ReportRow> {
        let mut rows = Vec::new();
        for machine in ["m1", "m2"] {
            for algorithm in ["row-column", "row-row"] {
                for &(size, nt) in &[(200u32, 2u32), (200, 4), (400, 2), (400, 4)] {
                    for rep in 0..5u32 {
                        for thread in 0..nt {
                            rows.push(row(
                                machine,
                                size,
                                nt,
                                thread,
                                1000.0 + (rep * 37 + thread * 11) as f64,
                                algorithm,
                            ));
                        }
                    }
                }
            }
        }
        rows
    }

    #[test]
    fn renders_all_four_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let rows = small_table();
        let paths = render_all(&rows, dir.path()).unwrap();
        assert_eq!(paths.len(), 4);
        for path in paths {
            let meta = std::fs::metadata(&path).unwrap();
            assert!(meta.len() > 0, "{path:?} is empty");
        }
    }

    #[test]
    fn heatmap_with_a_single_cell_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<ReportRow> = (0..2)
            .map(|t| row("m1", 200, 2, t, 150.0 + t as f64, "row-row"))
            .collect();
        render_heatmap_grid(&rows, dir.path()).unwrap();
        assert!(dir.path().join(HEATMAP_FILE).exists());
    }

    #[test]
    fn empty_table_is_rejected_by_every_renderer() {
        let dir = tempfile::tempdir().unwrap();
        let rows: Vec<ReportRow> = Vec::new();
        for result in [
            render_heatmap_grid(&rows, dir.path()),
            render_distribution_grid(&rows, dir.path()),
            render_threads_line(&rows, dir.path()),
            render_size_line(&rows, dir.path()),
        ] {
            match result {
                Err(Error::EmptyTable { .. }) => {}
                other => panic!("expected empty-table error, got {other:?}"),
            }
        }
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn non_positive_mean_fails_the_heatmap() {
        let dir = tempfile::tempdir().unwrap();
        let rows = vec![row("m1", 200, 2, 0, 0.0, "row-row")];
        match render_heatmap_grid(&rows, dir.path()) {
            Err(Error::NonPositiveTime { .. }) => {}
            other => panic!("expected non-positive time error, got {other:?}"),
        }
    }

    #[test]
    fn distribution_filters_to_reference_configuration() {
        let dir = tempfile::tempdir().unwrap();
        // two configurations; the reference is the larger one and has
        // enough repetitions for a density
        let mut rows = Vec::new();
        for rep in 0..10u32 {
            rows.push(row("m1", 200, 2, 0, 100.0 + rep as f64, "row-row"));
            rows.push(row("m1", 400, 4, 0, 500.0 + (rep * 3) as f64, "row-row"));
        }
        render_distribution_grid(&rows, dir.path()).unwrap();
        assert!(dir.path().join(DISTRIBUTION_FILE).exists());
    }

    #[test]
    fn missing_panel_subset_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        // m2 never ran row-row, so the (m2, row-row) panel is empty
        let rows = vec![
            row("m1", 200, 2, 0, 100.0, "row-column"),
            row("m1", 200, 2, 0, 100.0, "row-row"),
            row("m2", 200, 2, 0, 100.0, "row-column"),
        ];
        match render_threads_line(&rows, dir.path()) {
            Err(Error::EmptyTable { context }) => assert!(context.contains("m2")),
            other => panic!("expected empty-table error, got {other:?}"),
        }
    }

    #[test]
    fn percentile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        assert!((percentile(&sorted, 50.0) - 2.5).abs() < 1e-12);
        assert!((percentile(&sorted, 25.0) - 1.75).abs() < 1e-12);
        assert!((percentile(&sorted, 100.0) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn color_ramp_endpoints() {
        assert_eq!(color_ramp(0.0), RGBColor(13, 8, 135));
        assert_eq!(color_ramp(1.0), RGBColor(240, 249, 33));
    }
}
