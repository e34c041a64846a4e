//! Weighted minimum edit distance.
//!
//! The engine fills the classic dynamic-programming matrix where
//! `D[i][j]` is the cheapest way to turn the first `i` characters of the
//! source into the first `j` characters of the target:
//!
//! ```text
//! D[i][0] = i * delete
//! D[0][j] = j * insert
//! D[i][j] = min(D[i-1][j] + delete,
//!               D[i][j-1] + insert,
//!               D[i-1][j-1] + (0 if source[i-1] == target[j-1] else replace))
//! ```
//!
//! Callers that only need the scalar use [`MinEditDistance::distance`], which
//! keeps two rows. [`MinEditDistance::matrix`] keeps the whole grid so it can be
//! printed or walked back into an alignment.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellfixError};

/// Per-operation edit costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditCosts {
    /// Cost of inserting one character into the source.
    pub insert: u64,
    /// Cost of deleting one character from the source.
    pub delete: u64,
    /// Cost of replacing one character with a different one.
    pub replace: u64,
}

impl EditCosts {
    /// Validate signed costs. Zero is allowed, negative values are rejected.
    pub fn new(insert: i64, delete: i64, replace: i64) -> Result<Self> {
        let check = |name: &str, cost: i64| -> Result<u64> {
            u64::try_from(cost).map_err(|_| {
                SpellfixError::invalid_cost(format!("{name} cost must be non-negative, got {cost}"))
            })
        };

        Ok(EditCosts {
            insert: check("insert", insert)?,
            delete: check("delete", delete)?,
            replace: check("replace", replace)?,
        })
    }

    /// Every operation costs 1 (plain Levenshtein distance).
    pub const fn unit() -> Self {
        EditCosts {
            insert: 1,
            delete: 1,
            replace: 1,
        }
    }

    /// Whether the distance is symmetric under these costs.
    pub fn is_symmetric(&self) -> bool {
        self.insert == self.delete
    }
}

impl Default for EditCosts {
    /// Insert and delete cost 1, replace costs 2.
    fn default() -> Self {
        EditCosts {
            insert: 1,
            delete: 1,
            replace: 2,
        }
    }
}

/// A single operation on the way from source to target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    /// Characters are equal, no cost.
    Match,
    /// Source character replaced by target character.
    Substitute,
    /// Target character inserted.
    Insert,
    /// Source character deleted.
    Delete,
}

/// One step of an alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditStep {
    pub op: EditOp,
    /// Source character consumed by the step, if any.
    pub source: Option<char>,
    /// Target character produced by the step, if any.
    pub target: Option<char>,
    pub cost: u64,
}

/// The full `(m + 1) x (n + 1)` distance grid for one source/target pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDistanceMatrix {
    source: Vec<char>,
    target: Vec<char>,
    costs: EditCosts,
    /// Row-major cells.
    cells: Vec<u64>,
}

impl EditDistanceMatrix {
    /// Number of rows (`len(source) + 1`).
    pub fn rows(&self) -> usize {
        self.source.len() + 1
    }

    /// Number of columns (`len(target) + 1`).
    pub fn cols(&self) -> usize {
        self.target.len() + 1
    }

    /// Cell `D[i][j]`, or `None` outside the grid.
    pub fn get(&self, i: usize, j: usize) -> Option<u64> {
        if i < self.rows() && j < self.cols() {
            Some(self.cells[i * self.cols() + j])
        } else {
            None
        }
    }

    /// Row `i` of the grid.
    pub fn row(&self, i: usize) -> &[u64] {
        let cols = self.cols();
        &self.cells[i * cols..(i + 1) * cols]
    }

    /// The grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<u64>> {
        self.cells.chunks(self.cols()).map(<[u64]>::to_vec).collect()
    }

    /// The bottom-right cell: the edit distance.
    pub fn distance(&self) -> u64 {
        self.cells[self.cells.len() - 1]
    }

    pub fn source(&self) -> &[char] {
        &self.source
    }

    pub fn target(&self) -> &[char] {
        &self.target
    }

    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    /// Walk the grid back from the bottom-right cell into one cheapest
    /// sequence of edits, in source order.
    ///
    /// When several predecessors tie, the diagonal wins, then deletion, then
    /// insertion.
    pub fn alignment(&self) -> Vec<EditStep> {
        let mut steps = Vec::with_capacity(self.source.len().max(self.target.len()));
        let (mut i, mut j) = (self.source.len(), self.target.len());

        while i > 0 || j > 0 {
            let here = self[(i, j)];

            if i > 0 && j > 0 {
                let (s, t) = (self.source[i - 1], self.target[j - 1]);
                let cost = if s == t { 0 } else { self.costs.replace };
                if here == self[(i - 1, j - 1)].saturating_add(cost) {
                    let op = if s == t { EditOp::Match } else { EditOp::Substitute };
                    steps.push(EditStep {
                        op,
                        source: Some(s),
                        target: Some(t),
                        cost,
                    });
                    i -= 1;
                    j -= 1;
                    continue;
                }
            }

            if i > 0 && here == self[(i - 1, j)].saturating_add(self.costs.delete) {
                steps.push(EditStep {
                    op: EditOp::Delete,
                    source: Some(self.source[i - 1]),
                    target: None,
                    cost: self.costs.delete,
                });
                i -= 1;
            } else {
                steps.push(EditStep {
                    op: EditOp::Insert,
                    source: None,
                    target: Some(self.target[j - 1]),
                    cost: self.costs.insert,
                });
                j -= 1;
            }
        }

        steps.reverse();
        steps
    }
}

impl Index<(usize, usize)> for EditDistanceMatrix {
    type Output = u64;

    fn index(&self, (i, j): (usize, usize)) -> &u64 {
        assert!(
            i < self.rows() && j < self.cols(),
            "cell ({i}, {j}) outside {}x{} matrix",
            self.rows(),
            self.cols()
        );
        &self.cells[i * self.cols() + j]
    }
}

impl fmt::Display for EditDistanceMatrix {
    /// Render as a table; `#` labels the empty prefix of each string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .cells
            .iter()
            .map(|cell| cell.to_string().len())
            .max()
            .unwrap_or(1);

        let label = |chars: &[char], k: usize| -> String {
            if k == 0 {
                "#".to_string()
            } else {
                chars[k - 1].to_string()
            }
        };

        write!(f, "{:>width$}", "")?;
        for j in 0..self.cols() {
            write!(f, " {:>width$}", label(&self.target, j))?;
        }
        writeln!(f)?;

        for i in 0..self.rows() {
            write!(f, "{:>width$}", label(&self.source, i))?;
            for cell in self.row(i) {
                write!(f, " {cell:>width$}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// Minimum edit distance engine for a fixed set of costs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinEditDistance {
    costs: EditCosts,
}

impl MinEditDistance {
    pub fn new(costs: EditCosts) -> Self {
        MinEditDistance { costs }
    }

    pub fn costs(&self) -> EditCosts {
        self.costs
    }

    /// Compute the full matrix.
    pub fn matrix(&self, source: &str, target: &str) -> EditDistanceMatrix {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        let (rows, cols) = (source.len() + 1, target.len() + 1);
        let EditCosts {
            insert,
            delete,
            replace,
        } = self.costs;

        let mut cells = vec![0u64; rows * cols];
        for i in 1..rows {
            cells[i * cols] = cells[(i - 1) * cols].saturating_add(delete);
        }
        for j in 1..cols {
            cells[j] = cells[j - 1].saturating_add(insert);
        }

        for i in 1..rows {
            for j in 1..cols {
                let substitution = if source[i - 1] == target[j - 1] {
                    0
                } else {
                    replace
                };

                cells[i * cols + j] = (cells[(i - 1) * cols + j].saturating_add(delete))
                    .min(cells[i * cols + j - 1].saturating_add(insert))
                    .min(cells[(i - 1) * cols + j - 1].saturating_add(substitution));
            }
        }

        EditDistanceMatrix {
            source,
            target,
            costs: self.costs,
            cells,
        }
    }

    /// Compute only the distance, keeping two rows.
    pub fn distance(&self, source: &str, target: &str) -> u64 {
        let source: Vec<char> = source.chars().collect();
        let target: Vec<char> = target.chars().collect();
        let EditCosts {
            insert,
            delete,
            replace,
        } = self.costs;

        let mut prev_row: Vec<u64> = Vec::with_capacity(target.len() + 1);
        prev_row.push(0);
        for j in 1..=target.len() {
            prev_row.push(prev_row[j - 1].saturating_add(insert));
        }
        let mut curr_row = vec![0u64; target.len() + 1];

        for &s in &source {
            curr_row[0] = prev_row[0].saturating_add(delete);

            for (j, &t) in target.iter().enumerate() {
                let substitution = if s == t { 0 } else { replace };
                curr_row[j + 1] = (prev_row[j + 1].saturating_add(delete))
                    .min(curr_row[j].saturating_add(insert))
                    .min(prev_row[j].saturating_add(substitution));
            }

            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        prev_row[target.len()]
    }
}

/// Compute the matrix and distance between `source` and `target`.
///
/// Fails with [`SpellfixError::InvalidCost`] when any cost is negative.
///
/// ```
/// use spellfix::spelling::levenshtein::min_edit_distance;
///
/// let (matrix, distance) = min_edit_distance("make", "meke", 1, 1, 2).unwrap();
/// assert_eq!(distance, 2);
/// assert_eq!(matrix.rows(), 5);
/// ```
pub fn min_edit_distance(
    source: &str,
    target: &str,
    insert_cost: i64,
    delete_cost: i64,
    replace_cost: i64,
) -> Result<(EditDistanceMatrix, u64)> {
    let costs = EditCosts::new(insert_cost, delete_cost, replace_cost)?;
    let matrix = MinEditDistance::new(costs).matrix(source, target);
    let distance = matrix.distance();
    Ok((matrix, distance))
}

/// Plain Levenshtein distance (every operation costs 1).
pub fn levenshtein_distance(s1: &str, s2: &str) -> u64 {
    MinEditDistance::new(EditCosts::unit()).distance(s1, s2)
}
