//! Pending-amount ledger construction.

use std::collections::BTreeMap;

use ca_core::{parse_amount, records::CostRecord, AccountId, ChartOfAccounts, CoreError};

/// Account id → signed pending amount. Owned by one allocation run; the
/// cascade mutates it in place.
pub type Ledger = BTreeMap<AccountId, f64>;

/// Aggregate cost rows into the initial ledger. Repeated rows for one
/// account are additive. Every chart account gets an explicit entry
/// (default 0.0) so it participates in sorted output; cost rows naming
/// accounts outside the chart still enter the ledger as-is.
pub fn build_ledger(chart: &ChartOfAccounts, costs: &[CostRecord]) -> Result<Ledger, CoreError> {
    let mut ledger = Ledger::new();
    for row in costs {
        let id = AccountId::new(&row.account_id);
        let amount = parse_amount(&row.amount)?;
        *ledger.entry(id).or_insert(0.0) += amount;
    }
    for account in &chart.accounts {
        ledger.entry(account.account_id.clone()).or_insert(0.0);
    }
    Ok(ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ca_core::records::AccountRecord;

    fn chart(ids: &[(&str, &str)]) -> ChartOfAccounts {
        let records: Vec<AccountRecord> = ids
            .iter()
            .map(|(id, parent)| AccountRecord {
                account_id: (*id).into(),
                parent_id: (*parent).into(),
                name: String::new(),
            })
            .collect();
        ChartOfAccounts::from_records(&records)
    }

    fn cost(id: &str, amount: &str) -> CostRecord {
        CostRecord {
            account_id: id.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn repeated_rows_are_additive() {
        let ledger = build_ledger(
            &chart(&[("100", "")]),
            &[cost("100", "10"), cost("100", "5,5")],
        )
        .unwrap();
        assert_eq!(ledger[&AccountId::new("100")], 15.5);
    }

    #[test]
    fn every_chart_account_gets_an_entry() {
        let ledger = build_ledger(&chart(&[("100", ""), ("110", "100")]), &[]).unwrap();
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger[&AccountId::new("110")], 0.0);
    }

    #[test]
    fn unknown_account_costs_are_kept() {
        let ledger = build_ledger(&chart(&[("100", "")]), &[cost("777", "3")]).unwrap();
        assert_eq!(ledger[&AccountId::new("777")], 3.0);
    }

    #[test]
    fn unparseable_amount_fails_the_whole_build() {
        let err = build_ledger(&chart(&[("100", "")]), &[cost("100", "ten")]).unwrap_err();
        assert_eq!(err, CoreError::BadNumber("ten".to_string()));
    }
}
