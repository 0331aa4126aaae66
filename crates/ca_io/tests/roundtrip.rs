//! File-level round trip: templates → readers → writer.

use ca_core::AccountId;
use ca_core::records::ResultRow;
use ca_io::{reader, writer};

#[test]
fn templates_read_back_as_typed_records() {
    let dir = tempfile::tempdir().unwrap();
    writer::write_templates(dir.path()).unwrap();

    let chart = reader::read_chart(&dir.path().join("template_coa.csv")).unwrap();
    assert_eq!(chart.len(), 5);
    assert_eq!(chart[0].account_id, "100");
    assert_eq!(chart[0].parent_id, "");

    let costs = reader::read_costs(&dir.path().join("template_costs.csv")).unwrap();
    assert_eq!(costs.len(), 1);
    assert_eq!(costs[0].amount, "100000");

    let keys = reader::read_keys(&dir.path().join("template_keys.csv")).unwrap();
    assert_eq!(keys.len(), 4);
    assert_eq!(keys[3].parent_id, "120");
    assert_eq!(keys[3].weight, "0.7");
}

#[test]
fn written_results_are_parseable_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("out.csv");
    let rows = vec![
        ResultRow {
            account_id: AccountId::new("100"),
            parent_id: AccountId::root(),
            name: "Overheads".into(),
            amount: 0.0,
        },
        ResultRow {
            account_id: AccountId::new("110"),
            parent_id: AccountId::new("100"),
            name: "Office".into(),
            amount: 40_000.0,
        },
    ];
    writer::write_results(&out_path, &rows).unwrap();

    let text = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = text.lines();
    assert_eq!(lines.next().unwrap(), "account_id,parent_id,name,amount");
    assert_eq!(lines.next().unwrap(), "100,,Overheads,0.000000");
    assert_eq!(lines.next().unwrap(), "110,100,Office,40000.000000");
}
