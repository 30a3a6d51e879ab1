use std::io::Write;

use serde::Serialize;

use super::scenario::AxisKind;

/// Outcome of re-scoring one projected profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellResult {
    pub x: i32,
    pub y: i32,
    pub score: i32,
    pub age: i32,
    pub months_elapsed: i32,
    pub date_label: String,
    /// Simplified historical-program proxy. Never folded into `score`.
    pub secondary_eligibility: bool,
}

/// Rectangular grid of cells, rows keyed by y value and columns by x value in caller order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectionMatrix {
    pub x_kind: AxisKind,
    pub y_kind: AxisKind,
    pub x_values: Vec<i32>,
    pub y_values: Vec<i32>,
    rows: Vec<Vec<CellResult>>,
}

impl ProjectionMatrix {
    pub(crate) fn new(
        x_kind: AxisKind,
        y_kind: AxisKind,
        x_values: Vec<i32>,
        y_values: Vec<i32>,
        rows: Vec<Vec<CellResult>>,
    ) -> Self {
        Self {
            x_kind,
            y_kind,
            x_values,
            y_values,
            rows,
        }
    }

    pub fn rows(&self) -> &[Vec<CellResult>] {
        &self.rows
    }

    /// Rows with the highest y value first, the orientation a heatmap reads best in.
    pub fn rows_descending(&self) -> Vec<&[CellResult]> {
        descending_rows(&self.y_values, &self.rows)
            .into_iter()
            .map(|(_, row)| row)
            .collect()
    }

    pub fn cells(&self) -> impl Iterator<Item = &CellResult> {
        self.rows.iter().flatten()
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&CellResult> {
        let column = self.x_values.iter().position(|value| *value == x)?;
        let row = self.y_values.iter().position(|value| *value == y)?;
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    pub fn len(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn min_score(&self) -> Option<i32> {
        self.cells().map(|cell| cell.score).min()
    }

    pub fn max_score(&self) -> Option<i32> {
        self.cells().map(|cell| cell.score).max()
    }

    /// First cell, in row-major caller order, whose score meets `target`.
    pub fn first_reaching(&self, target: i32) -> Option<&CellResult> {
        self.cells().find(|cell| cell.score >= target)
    }

    /// Write the score pivot as CSV: a header of x values, then one row per y value.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        write_score_pivot(
            writer,
            (self.x_kind, self.x_values.as_slice()),
            (self.y_kind, self.y_values.as_slice()),
            &self.rows,
        )
    }
}

/// Pair each row with its y value, highest y first.
pub(crate) fn descending_rows<'a>(
    y_values: &[i32],
    rows: &'a [Vec<CellResult>],
) -> Vec<(i32, &'a [CellResult])> {
    let mut labelled: Vec<(i32, &[CellResult])> = y_values
        .iter()
        .copied()
        .zip(rows.iter().map(Vec::as_slice))
        .collect();
    labelled.sort_by(|a, b| b.0.cmp(&a.0));
    labelled
}

pub(crate) fn write_score_pivot<W: Write>(
    writer: W,
    x_axis: (AxisKind, &[i32]),
    y_axis: (AxisKind, &[i32]),
    rows: &[Vec<CellResult>],
) -> Result<(), csv::Error> {
    let mut csv = csv::Writer::from_writer(writer);

    let mut header = vec![format!("{}\\{}", y_axis.0.key(), x_axis.0.key())];
    header.extend(x_axis.1.iter().map(i32::to_string));
    csv.write_record(&header)?;

    for (y, cells) in y_axis.1.iter().zip(rows) {
        let mut record = vec![y.to_string()];
        record.extend(cells.iter().map(|cell| cell.score.to_string()));
        csv.write_record(&record)?;
    }

    csv.flush()?;
    Ok(())
}
