//! ASCII temperature chart
//!
//! Plots one marker per forecast day on a fixed-height grid, with the
//! temperature range on the y-axis and date labels on the x-axis.

/// Column width reserved per data point
const COLUMN_WIDTH: usize = 12;
/// Width of the y-axis label gutter
const GUTTER_WIDTH: usize = 8;

/// Render a line chart of `(label, value)` points, `height` rows tall.
///
/// Returns an empty string when there is nothing to plot.
#[must_use]
pub fn render_chart(points: &[(String, f64)], height: usize) -> String {
    if points.is_empty() || height < 2 {
        return String::new();
    }

    let min = points.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max = points.iter().map(|(_, v)| *v).fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    // Row index per point, 0 = bottom row.
    let rows: Vec<usize> = points
        .iter()
        .map(|(_, v)| {
            if span == 0.0 {
                height / 2
            } else {
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let row = ((v - min) / span * (height - 1) as f64).round() as usize;
                row
            }
        })
        .collect();

    let mut out = String::new();
    for row in (0..height).rev() {
        let label = if row == height - 1 {
            format!("{max:>6.1} |")
        } else if row == 0 {
            format!("{min:>6.1} |")
        } else {
            format!("{:>6} |", "")
        };
        out.push_str(&label);
        for &point_row in &rows {
            let marker = if point_row == row { '*' } else { ' ' };
            out.push_str(&center(marker, COLUMN_WIDTH));
        }
        out.push('\n');
    }

    out.push_str(&format!("{:>width$}", "", width = GUTTER_WIDTH));
    for (label, _) in points {
        out.push_str(&format!("{label:^COLUMN_WIDTH$}"));
    }
    out.push('\n');
    out
}

fn center(marker: char, width: usize) -> String {
    let left = width / 2;
    let right = width - left - 1;
    format!("{:left$}{marker}{:right$}", "", "")
}
