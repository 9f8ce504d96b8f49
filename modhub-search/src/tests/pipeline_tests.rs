use super::*;
use crate::facet::AllSelectedTags;
use chrono::TimeZone;
use modhub_catalog::{Tag, TagType};

#[derive(Debug, Clone)]
struct Row {
    name: &'static str,
    downloads: u64,
    day: u32,
    tags: Vec<Tag>,
}

impl Scorable for Row {
    fn name(&self) -> &str {
        self.name
    }

    fn description(&self) -> &str {
        ""
    }
}

impl Rankable for Row {
    fn updated_at(&self) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, self.day, 0, 0, 0).unwrap()
    }

    fn downloads(&self) -> u64 {
        self.downloads
    }

    fn popularity(&self) -> u64 {
        self.downloads
    }
}

impl Tagged for Row {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

fn row(name: &'static str, downloads: u64, day: u32) -> Row {
    Row {
        name,
        downloads,
        day,
        tags: vec![],
    }
}

fn names<T: Scorable>(page: &Page<T>) -> Vec<&str> {
    page.items.iter().map(|r| r.name()).collect()
}

fn run(rows: Vec<Row>, search: Option<&str>, sort: Option<SortBy>, page: usize, limit: usize) -> Page<Row> {
    let tags = FacetSelection::new();
    let request = RankRequest {
        tags: &tags,
        search,
        sort,
        page,
        limit,
    };
    rank(rows, &request, &ScoreEngine::default(), &AllSelectedTags)
}

fn dataset() -> Vec<Row> {
    vec![
        row("beta", 10, 3),
        row("Alpha", 30, 1),
        row("gamma", 10, 2),
        row("alpha map", 20, 4),
    ]
}

#[test]
fn test_default_order_is_popularity() {
    let page = run(dataset(), None, None, 1, 10);
    assert_eq!(names(&page), vec!["Alpha", "alpha map", "beta", "gamma"]);
}

#[test]
fn test_relevance_without_search_uses_popularity() {
    let page = run(dataset(), None, Some(SortBy::Relevance), 1, 10);
    assert_eq!(names(&page), vec!["Alpha", "alpha map", "beta", "gamma"]);
}

#[test]
fn test_downloads_ties_keep_input_order() {
    let page = run(dataset(), None, Some(SortBy::Downloads), 1, 10);
    assert_eq!(names(&page), vec!["Alpha", "alpha map", "beta", "gamma"]);

    let mut reversed = dataset();
    reversed.reverse();
    let page = run(reversed, None, Some(SortBy::Downloads), 1, 10);
    assert_eq!(names(&page), vec!["Alpha", "alpha map", "gamma", "beta"]);
}

#[test]
fn test_updated_at_newest_first() {
    let page = run(dataset(), None, Some(SortBy::UpdatedAt), 1, 10);
    assert_eq!(names(&page), vec!["alpha map", "beta", "gamma", "Alpha"]);
}

#[test]
fn test_name_ascending_case_insensitive() {
    let page = run(dataset(), None, Some(SortBy::Name), 1, 10);
    assert_eq!(names(&page), vec!["Alpha", "alpha map", "beta", "gamma"]);
}

#[test]
fn test_compare_names_is_total() {
    assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_names("Apple", "apple"), Ordering::Less);
    assert_eq!(compare_names("same", "same"), Ordering::Equal);
}

#[test]
fn test_compare_names_ignores_accents_for_letter_order() {
    let mut names = vec!["Zeta", "Élan", "apple", "Ørsted", "ember"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["apple", "Élan", "ember", "Ørsted", "Zeta"]);
    assert_eq!(compare_names("Élan", "Zeta"), Ordering::Less);
}

#[test]
fn test_compare_names_accent_breaks_ties() {
    assert_eq!(compare_names("resume", "résumé"), Ordering::Less);
    assert_eq!(compare_names("Résumé", "résumé"), Ordering::Less);
    assert_eq!(compare_names("Straße", "strasse"), Ordering::Greater);
    assert_eq!(compare_names("Straße", "strasst"), Ordering::Less);
}

#[test]
fn test_compare_names_mixed_scripts() {
    let mut names = vec!["Яблоко", "Ωmega", "Über Pack", "alpha", "Αλφα"];
    names.sort_by(|a, b| compare_names(a, b));
    assert_eq!(names, vec!["alpha", "Über Pack", "Αλφα", "Ωmega", "Яблоко"]);
}

#[test]
fn test_name_sort_places_accented_names_by_base_letter() {
    let rows = vec![
        row("Zeta", 1, 1),
        row("Élan", 1, 1),
        row("apple", 1, 1),
        row("ember", 1, 1),
    ];
    let page = run(rows, None, Some(SortBy::Name), 1, 10);
    assert_eq!(names(&page), vec!["apple", "Élan", "ember", "Zeta"]);
}

#[test]
fn test_search_filters_and_ranks() {
    // "Alpha" exact (100), "alpha map" prefix (50); others score 0
    let page = run(dataset(), Some("alpha"), None, 1, 10);
    assert_eq!(names(&page), vec!["Alpha", "alpha map"]);
    assert_eq!(page.total, 2);
}

#[test]
fn test_relevance_ties_keep_input_order() {
    let rows = vec![row("x map", 1, 1), row("y map", 5, 1), row("z map", 3, 1)];
    let page = run(rows, Some("map"), Some(SortBy::Relevance), 1, 10);
    assert_eq!(names(&page), vec!["x map", "y map", "z map"]);
}

#[test]
fn test_search_with_explicit_sort() {
    let page = run(dataset(), Some("alpha"), Some(SortBy::UpdatedAt), 1, 10);
    assert_eq!(names(&page), vec!["alpha map", "Alpha"]);
}

#[test]
fn test_blank_search_is_ignored() {
    let page = run(dataset(), Some("   "), None, 1, 10);
    assert_eq!(page.total, 4);
}

#[test]
fn test_pagination_slices() {
    let first = run(dataset(), None, None, 1, 3);
    assert_eq!(first.items.len(), 3);
    assert!(first.has_more);
    assert_eq!(first.total, 4);

    let second = run(dataset(), None, None, 2, 3);
    assert_eq!(names(&second), vec!["gamma"]);
    assert!(!second.has_more);
}

#[test]
fn test_page_past_end_is_empty() {
    let page = run(dataset(), None, None, 9, 3);
    assert!(page.items.is_empty());
    assert_eq!(page.total, 4);
    assert!(!page.has_more);
}

#[test]
fn test_zero_page_and_limit_are_clamped() {
    let page = run(dataset(), None, None, 0, 0);
    assert_eq!(page.items.len(), 4);
    assert!(!page.has_more);
}

#[test]
fn test_huge_page_does_not_overflow() {
    let page = run(dataset(), None, None, usize::MAX, usize::MAX);
    assert!(page.items.is_empty());
    assert!(!page.has_more);
}

#[test]
fn test_facet_filter_applies_before_count() {
    let mut rows = dataset();
    rows[0].tags.push(Tag {
        id: "fabric".to_string(),
        name: "Fabric".to_string(),
        tag_type: TagType::Loader,
        color: None,
    });
    let tags = FacetSelection::from_ids(["fabric"]);
    let request = RankRequest {
        tags: &tags,
        search: None,
        sort: None,
        page: 1,
        limit: 10,
    };
    let page = rank(rows, &request, &ScoreEngine::default(), &AllSelectedTags);
    assert_eq!(names(&page), vec!["beta"]);
    assert_eq!(page.total, 1);
}

#[test]
fn test_page_serializes_camel_case() {
    let page: Page<u32> = Page {
        items: vec![1],
        total: 3,
        has_more: true,
    };
    let json = serde_json::to_value(&page).unwrap();
    assert_eq!(json["hasMore"], serde_json::Value::Bool(true));
    assert_eq!(json["total"], 3);
}
