//! Descriptive statistics shared by the report modules.
//!
//! All helpers operate on plain `f64` slices of *valid* values — missing
//! entries are stripped first via [`valid`]. Conventions: sample standard
//! deviation (n − 1 denominator), quantiles by linear interpolation on the
//! sorted values, Pearson correlation over pairwise-complete observations.

/// Strips missing entries, keeping the valid values in row order.
pub fn valid(values: &[Option<f64>]) -> Vec<f64> {
    values.iter().filter_map(|v| *v).collect()
}

/// Arithmetic mean. `None` on empty input.
pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

/// Sample standard deviation (n − 1). `None` for fewer than two values.
pub fn std_dev(xs: &[f64]) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let m = mean(xs)?;
    let ss: f64 = xs.iter().map(|x| (x - m) * (x - m)).sum();
    Some((ss / (xs.len() - 1) as f64).sqrt())
}

/// Quantile by linear interpolation. `sorted` must be ascending and
/// non-empty; `q` is clamped to `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    let q = q.clamp(0.0, 1.0);
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        return Some(sorted[lo]);
    }
    let frac = pos - lo as f64;
    Some(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
}

/// The five-number summary behind box plots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Computes the five-number summary. `None` on empty input.
pub fn five_number_summary(xs: &[f64]) -> Option<FiveNumberSummary> {
    let mut sorted = xs.to_vec();
    sorted.sort_by(f64::total_cmp);
    Some(FiveNumberSummary {
        min: *sorted.first()?,
        q1: quantile(&sorted, 0.25)?,
        median: quantile(&sorted, 0.5)?,
        q3: quantile(&sorted, 0.75)?,
        max: *sorted.last()?,
    })
}

/// Equal-width histogram over `[min, max]`.
///
/// Returns `(edges, counts)` with `edges.len() == counts.len() + 1`. Values
/// on the upper boundary land in the last bin. A constant column degrades to
/// a single unit-width bin centered on the value. `None` on empty input.
pub fn histogram(xs: &[f64], bins: usize) -> Option<(Vec<f64>, Vec<u64>)> {
    if xs.is_empty() || bins == 0 {
        return None;
    }
    let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    if span == 0.0 {
        return Some((vec![min - 0.5, min + 0.5], vec![xs.len() as u64]));
    }

    let width = span / bins as f64;
    let edges: Vec<f64> = (0..=bins).map(|i| min + width * i as f64).collect();
    let mut counts = vec![0u64; bins];
    for &x in xs {
        let idx = (((x - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }
    Some((edges, counts))
}

/// Pearson correlation over pairwise-complete observations.
///
/// Rows where either side is missing are dropped. `None` when fewer than two
/// complete pairs remain or either side has zero variance.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = xs
        .iter()
        .zip(ys)
        .filter_map(|(x, y)| Some(((*x)?, (*y)?)))
        .collect();
    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mx = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let my = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in &pairs {
        let dx = x - mx;
        let dy = y - my;
        cov += dx * dy;
        vx += dx * dx;
        vy += dy * dy;
    }
    if vx == 0.0 || vy == 0.0 {
        return None;
    }
    Some(cov / (vx.sqrt() * vy.sqrt()))
}

/// Gaussian kernel density estimate on an even grid.
///
/// Bandwidth is Scott's rule, `h = sigma * n^(-1/5)`; the grid spans
/// `[min - 3h, max + 3h]` with `grid_points` samples. `None` when fewer than
/// two values remain or the data has zero spread (a constant column has no
/// density curve worth drawing).
pub fn gaussian_kde(xs: &[f64], grid_points: usize) -> Option<(Vec<f64>, Vec<f64>)> {
    if xs.len() < 2 || grid_points < 2 {
        return None;
    }
    let sigma = std_dev(xs)?;
    if sigma == 0.0 {
        return None;
    }

    let n = xs.len() as f64;
    let h = sigma * n.powf(-0.2);
    let min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let lo = min - 3.0 * h;
    let hi = max + 3.0 * h;
    let step = (hi - lo) / (grid_points - 1) as f64;

    let norm = 1.0 / (n * h * (2.0 * std::f64::consts::PI).sqrt());
    let mut grid = Vec::with_capacity(grid_points);
    let mut density = Vec::with_capacity(grid_points);
    for i in 0..grid_points {
        let x = lo + step * i as f64;
        let d: f64 = xs
            .iter()
            .map(|&xi| {
                let u = (x - xi) / h;
                (-0.5 * u * u).exp()
            })
            .sum();
        grid.push(x);
        density.push(norm * d);
    }
    Some((grid, density))
}
