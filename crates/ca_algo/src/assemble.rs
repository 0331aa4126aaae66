//! Final result assembly from a settled ledger.

use ca_core::{records::ResultRow, AccountId, ChartOfAccounts};

use crate::ledger::Ledger;

/// One row per ledger entry (chart accounts always have one, zero-amount
/// included), ordered by (parent id, account id) ascending. Ledger entries
/// with no chart account get an empty parent id and name.
pub fn assemble(chart: &ChartOfAccounts, ledger: &Ledger) -> Vec<ResultRow> {
    let index = chart.index();
    let mut rows: Vec<ResultRow> = ledger
        .iter()
        .map(|(id, &amount)| match index.get(id) {
            Some(account) => ResultRow {
                account_id: account.account_id.clone(),
                parent_id: account.parent_id.clone(),
                name: account.name.clone(),
                amount,
            },
            None => ResultRow {
                account_id: id.clone(),
                parent_id: AccountId::root(),
                name: String::new(),
                amount,
            },
        })
        .collect();
    rows.sort_by(|a, b| {
        (a.parent_id.as_str(), a.account_id.as_str())
            .cmp(&(b.parent_id.as_str(), b.account_id.as_str()))
    });
    rows
}
