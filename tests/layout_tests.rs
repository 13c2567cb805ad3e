use agegrid::compare::{CategoryPriority, SortOrder};
use agegrid::error::GridError;
use agegrid::layout::{
    bucket_by_group_key, compute_bounds, layout_grid, max_rank_metric, normalize,
};
use agegrid::record::Record;

fn scenario() -> Vec<Record> {
    vec![
        Record::new("A", 40, "Con", 20000.0),
        Record::new("B", 40, "Lab", 5000.0),
        Record::new("C", 41, "Lab", 9000.0),
    ]
}

fn labour_first() -> SortOrder {
    SortOrder::CategoryThenMetric(CategoryPriority::labour_first())
}

#[test]
fn test_scenario_places_labour_first_in_shared_column() {
    let records = scenario();
    let layout = layout_grid(&records, &labour_first(), max_rank_metric(&records)).unwrap();

    let col40: Vec<&str> = layout
        .column(40)
        .iter()
        .map(|p| p.record.id.as_str())
        .collect();
    assert_eq!(col40, vec!["B", "A"]);

    let b = layout.find("B").unwrap();
    assert_eq!((b.position.column, b.position.row), (40, 0));
    let a = layout.find("A").unwrap();
    assert_eq!((a.position.column, a.position.row), (40, 1));
    let c = layout.find("C").unwrap();
    assert_eq!((c.position.column, c.position.row), (41, 0));

    assert_eq!(layout.bounds.min_group_key, 40);
    assert_eq!(layout.bounds.max_group_key, 41);
    assert_eq!(layout.bounds.max_row_count, 2);
}

#[test]
fn test_placed_records_keep_input_order() {
    let records = scenario();
    let layout = layout_grid(&records, &labour_first(), 20000.0).unwrap();
    let ids: Vec<&str> = layout.placed.iter().map(|p| p.record.id.as_str()).collect();
    assert_eq!(ids, vec!["A", "B", "C"]);
}

#[test]
fn test_layout_does_not_touch_input() {
    let records = scenario();
    let before = records.clone();
    let _ = layout_grid(&records, &labour_first(), 20000.0).unwrap();
    assert_eq!(records, before);
}

#[test]
fn test_normalized_score_uses_given_max() {
    let records = scenario();
    let layout = layout_grid(&records, &labour_first(), 20000.0).unwrap();
    assert_eq!(layout.find("A").unwrap().normalized_score, Some(1.0));
    assert_eq!(layout.find("B").unwrap().normalized_score, Some(0.25));
    assert_eq!(layout.find("C").unwrap().normalized_score, Some(0.45));
}

#[test]
fn test_compute_bounds_empty_input_fails() {
    let result = compute_bounds(&[]);
    assert!(matches!(result, Err(GridError::EmptyInput)));
}

#[test]
fn test_layout_grid_empty_input_fails() {
    let result = layout_grid(&[], &SortOrder::MetricDescending, 1.0);
    assert!(matches!(result, Err(GridError::EmptyInput)));
}

#[test]
fn test_all_zero_metrics_give_no_scores() {
    let records = vec![
        Record::new("A", 30, "Lab", 0.0),
        Record::new("B", 31, "Con", 0.0),
        Record::new("C", 31, "LD", 0.0),
    ];
    let max = max_rank_metric(&records);
    assert_eq!(max, 0.0);

    let layout = layout_grid(&records, &labour_first(), max).unwrap();
    assert!(layout.placed.iter().all(|p| p.normalized_score.is_none()));
}

#[test]
fn test_normalize_rejects_non_finite_denominator() {
    assert_eq!(normalize(5.0, f64::INFINITY), None);
    assert_eq!(normalize(5.0, f64::NAN), None);
    assert_eq!(normalize(5.0, 10.0), Some(0.5));
}

#[test]
fn test_buckets_cover_every_key_in_range() {
    let records = vec![
        Record::new("A", 30, "Lab", 1.0),
        Record::new("B", 34, "Con", 2.0),
    ];
    let buckets = bucket_by_group_key(&records, 30, 34).unwrap();

    assert_eq!(buckets.len(), 5);
    let keys: Vec<u32> = buckets.iter().map(|b| b.group_key).collect();
    assert_eq!(keys, vec![30, 31, 32, 33, 34]);
    assert_eq!(buckets[0].members[0].id, "A");
    assert!(buckets[1].is_empty());
    assert!(buckets[2].is_empty());
    assert!(buckets[3].is_empty());
    assert_eq!(buckets[4].len(), 1);
}

#[test]
fn test_bucket_out_of_range_fails() {
    let records = vec![Record::new("A", 60, "Lab", 1.0)];
    let result = bucket_by_group_key(&records, 30, 50);
    match result {
        Err(GridError::GroupKeyOutOfRange { group_key, min, max }) => {
            assert_eq!((group_key, min, max), (60, 30, 50));
        }
        other => panic!("expected GroupKeyOutOfRange, got {:?}", other),
    }
}

#[test]
fn test_sparse_data_still_spans_full_column_range() {
    let records = vec![
        Record::new("young", 25, "Lab", 1.0),
        Record::new("old", 55, "Con", 1.0),
    ];
    let layout = layout_grid(&records, &SortOrder::MetricDescending, 1.0).unwrap();
    assert_eq!(layout.bounds.column_count(), 31);
    assert!(layout.column(40).is_empty());
}

#[test]
fn test_closure_comparator_is_accepted() {
    let records = scenario();
    // Alphabetical by id, ignoring category.
    let by_id = |a: &Record, b: &Record| a.id.cmp(&b.id);
    let layout = layout_grid(&records, &by_id, 1.0).unwrap();
    assert_eq!(layout.find("A").unwrap().position.row, 0);
    assert_eq!(layout.find("B").unwrap().position.row, 1);
}

#[test]
fn test_cell_lookup() {
    let records = scenario();
    let layout = layout_grid(&records, &labour_first(), 1.0).unwrap();
    assert_eq!(layout.cell(40, 1).unwrap().record.id, "A");
    assert!(layout.cell(40, 2).is_none());
    assert!(layout.cell(39, 0).is_none());
}
