//! Income/expense aggregation over a transaction set.

use serde::Serialize;

/// The transaction type that counts towards income. Anything else counts as
/// an expense.
pub const INCOME_TYPE: &str = "income";

/// Derived totals over a set of transactions.
///
/// Never persisted; computed fresh from the live transaction set on every
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    /// The sum of amounts of transactions typed [INCOME_TYPE].
    pub total_income: f64,
    /// The sum of amounts of every other transaction.
    pub total_expenses: f64,
    /// `total_income - total_expenses`.
    pub current_balance: f64,
}

/// Aggregate `(amount, transaction_type)` pairs into income, expense and
/// balance totals. The empty sequence yields all zeros.
pub fn summarize<'a>(entries: impl IntoIterator<Item = (f64, &'a str)>) -> Summary {
    let mut total_income = 0.0;
    let mut total_expenses = 0.0;

    for (amount, transaction_type) in entries {
        if transaction_type == INCOME_TYPE {
            total_income += amount;
        } else {
            total_expenses += amount;
        }
    }

    Summary {
        total_income,
        total_expenses,
        current_balance: total_income - total_expenses,
    }
}
