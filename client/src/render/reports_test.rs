use super::*;

fn record(id: i64) -> ReportRecord {
    ReportRecord {
        report_id: Some(id),
        report_type: "space".into(),
        generated_on: Some("2024-03-05T10:00:00Z".into()),
        details: Some("Report Type: space\nStatus: Generated successfully".into()),
    }
}

#[test]
fn row_summarizes_first_detail_line() {
    let row = row(&record(3));
    assert_eq!(row.title, "#3 SPACE");
    assert_eq!(row.generated_on, "3/5/2024");
    assert_eq!(row.summary, "Report Type: space");
}

#[test]
fn history_is_newest_first() {
    let rows = rows(&LoadState::Loaded(vec![record(1), record(2)]));
    let keys: Vec<_> = rows.iter().filter_map(Entry::item).map(|r| r.key.clone()).collect();
    assert_eq!(keys, vec!["2", "1"]);
}
