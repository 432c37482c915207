use marketrank_aggregate::compute::{average_roi, combo, top_category};
use marketrank_aggregate::compute_aggregates;
use marketrank_core::config::AggregateConfig;
use marketrank_core::{AggregateMetrics, AggregateRequest, CatalogItem};

fn item(id: &str, category: Option<&str>, roi: Option<f64>) -> CatalogItem {
    let mut item = CatalogItem::new(id, id.to_uppercase());
    item.category = category.map(str::to_string);
    item.roi = roi;
    item
}

fn request(catalog: Vec<CatalogItem>, signals: &[&str], focus: Option<&str>) -> AggregateRequest {
    AggregateRequest {
        catalog,
        signals: signals.iter().map(|s| s.to_string()).collect(),
        focus: focus.map(str::to_string),
    }
}

#[test]
fn empty_catalog_yields_empty_metrics() {
    let metrics = compute_aggregates(
        &request(Vec::new(), &["Health", "Finance"], Some("Health")),
        &AggregateConfig::default(),
    );
    assert_eq!(metrics, AggregateMetrics::default());
    assert!(metrics.average_roi.is_none());
    assert!(metrics.top_category.is_none());
    assert!(metrics.combo.is_empty());
}

#[test]
fn average_roi_ignores_missing_and_non_finite() {
    let catalog = vec![
        item("a", None, Some(5.0)),
        item("b", None, Some(2.0)),
        item("c", None, None),
        item("d", None, Some(f64::NAN)),
    ];
    assert_eq!(average_roi(&catalog), Some(3.5));
    assert_eq!(average_roi(&[item("x", None, None)]), None);
}

#[test]
fn top_category_prefers_average_then_count() {
    let catalog = vec![
        item("b1", Some("Billing"), Some(3.0)),
        item("a1", Some("Analytics"), Some(4.0)),
        item("a2", Some("Analytics"), Some(2.0)),
        item("none", None, Some(10.0)),
    ];
    let top = top_category(&catalog).unwrap();
    assert_eq!(top.category, "Analytics");
    assert_eq!(top.count, 2);
    assert!((top.average_roi - 3.0).abs() < 1e-12);
}

#[test]
fn top_category_ties_go_to_first_seen() {
    let catalog = vec![item("x", Some("Legal"), Some(2.0)), item("y", Some("Sales"), Some(2.0))];
    assert_eq!(top_category(&catalog).unwrap().category, "Legal");
}

#[test]
fn missing_roi_counts_as_zero_within_category() {
    let catalog = vec![
        item("z1", Some("Security"), Some(6.0)),
        item("z2", Some("Security"), None),
        item("o", Some("Ops"), Some(2.5)),
    ];
    let top = top_category(&catalog).unwrap();
    assert_eq!(top.category, "Security");
    assert!((top.average_roi - 3.0).abs() < 1e-12);
}

#[test]
fn top_category_falls_back_to_vertical() {
    let catalog = vec![CatalogItem::new("v", "V").with_vertical("Retail").with_roi(1.0)];
    assert_eq!(top_category(&catalog).unwrap().category, "Retail");
}

#[test]
fn combo_requires_two_overlapping_signals() {
    let catalog = vec![
        CatalogItem::new("p", "P").with_tags(["health", "automation"]).with_roi(2.0),
        CatalogItem::new("q", "Q")
            .with_tags(["health", "automation"])
            .with_category("Compliance")
            .with_roi(1.0),
        CatalogItem::new("r", "R").with_tags(["health"]).with_roi(9.0),
    ];
    let req = request(catalog, &["Health", "health", "Automation", "Compliance"], None);
    let entries = combo(&req, &AggregateConfig::default());

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["q", "p"]);
    assert_eq!(entries[0].overlap, 3);
    assert_eq!(entries[0].matched, ["Health", "Automation", "Compliance"]);
    assert!((entries[0].score - (1.0 + 3.0 * 1.75)).abs() < 1e-12);
    assert!((entries[1].score - (2.0 + 2.0 * 1.75)).abs() < 1e-12);
}

#[test]
fn active_need_adds_focus_bonus() {
    let catalog = vec![CatalogItem::new("p", "P").with_tags(["health", "automation"])];
    let config = AggregateConfig::default();

    let without = combo(&request(catalog.clone(), &["health", "automation"], None), &config);
    let with = combo(&request(catalog.clone(), &["health", "automation"], Some("Health")), &config);
    let blank = combo(&request(catalog, &["health", "automation"], Some("  ")), &config);

    assert!((with[0].score - without[0].score - 2.5).abs() < 1e-12);
    assert_eq!(blank[0].score, without[0].score);
}

#[test]
fn combo_keeps_top_three_in_catalog_order_on_ties() {
    let catalog: Vec<CatalogItem> = ["d", "c", "b", "a"]
        .iter()
        .map(|id| CatalogItem::new(*id, *id).with_tags(["crm", "sales"]))
        .collect();
    let entries = combo(&request(catalog, &["CRM", "Sales"], None), &AggregateConfig::default());

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, ["d", "c", "b"]);
}

#[test]
fn combo_without_signals_is_empty() {
    let catalog = vec![CatalogItem::new("p", "P").with_tags(["health", "automation"])];
    assert!(combo(&request(catalog, &["", "  "], None), &AggregateConfig::default()).is_empty());
}
