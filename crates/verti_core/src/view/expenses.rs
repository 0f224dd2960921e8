//! Expense aggregation.

use crate::model::expense::{Amount, Expense};
use crate::model::record::{MalformedRecordError, RecordDefect, RecordKind};
use crate::store::SessionState;

/// Sum of all logged expense amounts; zero when nothing is logged.
///
/// # Errors
/// - `MalformedRecordError` for the first stored expense with a negative
///   amount, or for the expense whose addition overflows the total.
pub fn expense_total(state: &SessionState) -> Result<Amount, MalformedRecordError> {
    checked_expenses(state)?
        .enumerate()
        .try_fold(Amount::ZERO, |total, (index, expense)| {
            total
                .checked_add(expense.amount)
                .ok_or(MalformedRecordError {
                    kind: RecordKind::Expense,
                    index,
                    defect: RecordDefect::TotalOverflow,
                })
        })
}

/// One `date, item, amount, category` line per expense, in append order.
///
/// Used as the body of the expense summary prompt.
pub fn expense_report_lines(state: &SessionState) -> Result<Vec<String>, MalformedRecordError> {
    Ok(checked_expenses(state)?
        .map(|expense| {
            format!(
                "{}, {}, {}, {}",
                expense.date, expense.item, expense.amount, expense.category
            )
        })
        .collect())
}

pub(crate) fn checked_expenses(
    state: &SessionState,
) -> Result<impl Iterator<Item = &Expense>, MalformedRecordError> {
    for (index, expense) in state.expenses().iter().enumerate() {
        expense
            .validate()
            .map_err(|defect| MalformedRecordError {
                kind: RecordKind::Expense,
                index,
                defect,
            })?;
    }
    Ok(state.expenses().iter())
}
