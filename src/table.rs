use log::{debug, warn};
use prettytable::{Cell, Row as TableRow, Table, format::Alignment};

use crate::{
    compiler::{
        evaluator::{Assignment, evaluate},
        lexer::{Token, join_tokens},
        parser::{CompileResult, Compilation, compile},
    },
    error::CompileError,
};

/// Label of the result column when there is no formula text.
pub const DEFAULT_LABEL: &str = "Expression";

/// Rows reserved up front; larger tables grow as they are filled.
const PREALLOCATED_ROWS: usize = 1 << 16;

/// One line of a truth table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    /// Truth values of the variables, in discovery order.
    pub values: Vec<bool>,
    /// Truth value of the formula.
    pub result: bool,
}

/// Every assignment of a formula's variables with the formula's value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TruthTable {
    /// Variables in discovery order; one column each.
    pub variables: Vec<char>,
    /// Header of the result column.
    pub label:     String,
    /// `2^n` rows in mask order.
    pub rows:      Vec<Row>,
}

impl TruthTable {
    /// Compiles tokens and enumerates their truth table.
    ///
    /// The result column is labelled by [`label_for`].
    ///
    /// # Example
    /// ```
    /// use propcalc::{
    ///     compiler::{alphabet::Alphabet, lexer::tokenize},
    ///     table::TruthTable,
    /// };
    ///
    /// let table = TruthTable::from_tokens(&tokenize("~P", &Alphabet::builder())).unwrap();
    /// assert_eq!(table.header(), vec!["P", "¬ P"]);
    /// assert_eq!(table.rows.len(), 2);
    /// ```
    pub fn from_tokens(tokens: &[Token]) -> CompileResult<Self> {
        Self::build(&compile(tokens), label_for(tokens))
    }

    /// Enumerates the truth table of an existing compilation.
    ///
    /// Row `mask` gives the `i`-th of `n` variables the value of bit
    /// `n - 1 - i`, so the first discovered variable is the most significant
    /// and row 0 is all `false`.
    ///
    /// A formula with 64 variables or more has more rows than a mask can
    /// count, and gets a table with no rows.
    ///
    /// # Errors
    /// Returns the compilation's error if it failed.
    pub fn build(compilation: &Compilation, label: impl Into<String>) -> CompileResult<Self> {
        let instructions = compilation.result().map_err(CompileError::clone)?;
        let variables = compilation.variables.clone();
        let count = variables.len();

        let row_count = u32::try_from(count).ok()
                                            .and_then(|shift| 1_u64.checked_shl(shift))
                                            .unwrap_or_else(|| {
                                                warn!("{count} variables are too many to enumerate");
                                                0
                                            });

        let reserved = usize::try_from(row_count).map_or(0, |rows| rows.min(PREALLOCATED_ROWS));
        let mut rows = Vec::with_capacity(reserved);
        for mask in 0..row_count {
            let assignment = assignment_for(&variables, mask);
            rows.push(Row { values: variables.iter().map(|v| assignment[v]).collect(),
                            result: evaluate(instructions, &assignment), });
        }

        debug!("enumerated {} rows over {count} variables", rows.len());

        Ok(Self { variables,
                  label: label.into(),
                  rows })
    }

    /// Column headers: each variable, then the formula label.
    #[must_use]
    pub fn header(&self) -> Vec<String> {
        self.variables
            .iter()
            .map(ToString::to_string)
            .chain(std::iter::once(self.label.clone()))
            .collect()
    }

    /// True in every row.
    #[must_use]
    pub fn is_tautology(&self) -> bool {
        self.rows.iter().all(|row| row.result)
    }

    /// False in every row.
    #[must_use]
    pub fn is_contradiction(&self) -> bool {
        self.rows.iter().all(|row| !row.result)
    }

    /// Lays the table out for terminal output, `T` in green and `F` in red.
    #[must_use]
    pub fn to_table(&self) -> Table {
        let mut t_cell = Cell::new("T").style_spec("Fg");
        let mut f_cell = Cell::new("F").style_spec("Fr");
        t_cell.align(Alignment::CENTER);
        f_cell.align(Alignment::CENTER);
        let cell = |value: bool| if value { t_cell.clone() } else { f_cell.clone() };

        let mut table = Table::new();
        table.set_titles(TableRow::new(self.header().iter().map(|h| Cell::new(h)).collect()));

        for row in &self.rows {
            let mut cells: Vec<Cell> = row.values.iter().map(|&v| cell(v)).collect();
            cells.push(cell(row.result));
            table.add_row(TableRow::new(cells));
        }

        table
    }
}

/// The tokens joined by spaces, or [`DEFAULT_LABEL`] when there are none.
#[must_use]
pub fn label_for(tokens: &[Token]) -> String {
    if tokens.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        join_tokens(tokens)
    }
}

/// Builds the assignment for row `mask`; the first variable is the most
/// significant bit.
#[must_use]
pub fn assignment_for(variables: &[char], mask: u64) -> Assignment {
    let count = variables.len();
    variables.iter()
             .enumerate()
             .map(|(i, &name)| (name, (mask >> (count - 1 - i)) & 1 == 1))
             .collect()
}
