//! Pairwise correlation and covariance over numeric columns.
//!
//! Each pair uses only rows where both columns are non-null. Pairs with fewer
//! than two complete rows, or with a constant column (for correlation), are `NaN`.

use dprof_model::Table;

use crate::descriptive::round_to;

/// Square matrix labelled by column name on both axes.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    pub labels: Vec<String>,
    pub values: Vec<Vec<f64>>,
}

impl Matrix {
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values[row][col]
    }

    pub fn rounded(&self, decimals: u32) -> Self {
        Self {
            labels: self.labels.clone(),
            values: self
                .values
                .iter()
                .map(|row| row.iter().map(|v| round_to(*v, decimals)).collect())
                .collect(),
        }
    }
}

struct PairMoments {
    n: usize,
    sxx: f64,
    syy: f64,
    sxy: f64,
}

fn pair_moments(x: &[Option<f64>], y: &[Option<f64>]) -> PairMoments {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter_map(|(a, b)| Some(((*a)?, (*b)?)))
        .collect();
    let n = pairs.len();
    if n == 0 {
        return PairMoments {
            n,
            sxx: 0.0,
            syy: 0.0,
            sxy: 0.0,
        };
    }
    let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / n as f64;
    let mut moments = PairMoments {
        n,
        sxx: 0.0,
        syy: 0.0,
        sxy: 0.0,
    };
    for (a, b) in pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        moments.sxx += dx * dx;
        moments.syy += dy * dy;
        moments.sxy += dx * dy;
    }
    moments
}

fn pearson(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let m = pair_moments(x, y);
    if m.n < 2 || m.sxx == 0.0 || m.syy == 0.0 {
        return f64::NAN;
    }
    (m.sxy / (m.sxx * m.syy).sqrt()).clamp(-1.0, 1.0)
}

fn covariance(x: &[Option<f64>], y: &[Option<f64>]) -> f64 {
    let m = pair_moments(x, y);
    if m.n < 2 {
        return f64::NAN;
    }
    m.sxy / (m.n - 1) as f64
}

fn pairwise(table: &Table, f: impl Fn(&[Option<f64>], &[Option<f64>], bool) -> f64) -> Matrix {
    let columns: Vec<(&str, &[Option<f64>])> = table
        .numeric_columns()
        .filter_map(|column| Some((column.name.as_str(), column.as_numeric()?)))
        .collect();
    let size = columns.len();
    let mut values = vec![vec![f64::NAN; size]; size];
    for i in 0..size {
        for j in i..size {
            let value = f(columns[i].1, columns[j].1, i == j);
            values[i][j] = value;
            values[j][i] = value;
        }
    }
    Matrix {
        labels: columns.iter().map(|(name, _)| (*name).to_string()).collect(),
        values,
    }
}

/// Pearson correlation; the diagonal is exactly 1 for columns with nonzero variance.
pub fn correlation_matrix(table: &Table) -> Matrix {
    pairwise(table, |x, y, diagonal| {
        let r = pearson(x, y);
        if diagonal && !r.is_nan() { 1.0 } else { r }
    })
}

/// Sample covariance (n - 1 denominator).
pub fn covariance_matrix(table: &Table) -> Matrix {
    pairwise(table, |x, y, _| covariance(x, y))
}

#[cfg(test)]
mod tests {
    use dprof_model::Column;

    use super::*;

    fn table() -> Table {
        Table::new(vec![
            Column::numeric("a", "f64", vec![Some(1.0), Some(2.0), Some(3.0), Some(4.0)]),
            Column::numeric("b", "f64", vec![Some(2.0), Some(4.0), Some(6.0), Some(8.0)]),
            Column::numeric("c", "f64", vec![Some(4.0), Some(3.0), Some(2.0), Some(1.0)]),
            Column::numeric("k", "f64", vec![Some(5.0), Some(5.0), Some(5.0), Some(5.0)]),
            Column::text("t", "str", vec![None, None, None, None]),
        ])
        .unwrap()
    }

    #[test]
    fn correlation_skips_text_columns() {
        let corr = correlation_matrix(&table());
        assert_eq!(corr.labels, vec!["a", "b", "c", "k"]);
    }

    #[test]
    fn correlation_of_linear_columns() {
        let corr = correlation_matrix(&table());
        assert!((corr.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((corr.get(0, 2) + 1.0).abs() < 1e-12);
        assert_eq!(corr.get(1, 1), 1.0);
    }

    #[test]
    fn constant_column_correlation_is_nan() {
        let corr = correlation_matrix(&table());
        assert!(corr.get(3, 3).is_nan());
        assert!(corr.get(0, 3).is_nan());
    }

    #[test]
    fn covariance_uses_pairwise_complete_rows() {
        let table = Table::new(vec![
            Column::numeric("x", "f64", vec![Some(1.0), Some(2.0), None, Some(3.0)]),
            Column::numeric("y", "f64", vec![Some(1.0), Some(2.0), Some(9.0), Some(3.0)]),
        ])
        .unwrap();
        let cov = covariance_matrix(&table);
        assert!((cov.get(0, 1) - 1.0).abs() < 1e-12);
        assert!((cov.get(1, 1) - variance_of(&[1.0, 2.0, 9.0, 3.0])).abs() < 1e-12);
    }

    fn variance_of(values: &[f64]) -> f64 {
        crate::descriptive::variance(values)
    }

    #[test]
    fn rounding_keeps_nan() {
        let corr = correlation_matrix(&table()).rounded(2);
        assert!(corr.get(3, 3).is_nan());
        assert_eq!(corr.get(0, 0), 1.0);
    }
}
