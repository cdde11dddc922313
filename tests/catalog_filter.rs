use sportfamily_storefront::{
    catalog::{Catalog, UNISEX},
    filter::FilterSelection,
};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog")
}

fn ids(catalog: &Catalog, selection: &FilterSelection) -> Vec<i64> {
    catalog.filter(selection).iter().map(|p| p.id).collect()
}

fn select(age: &str, gender: &str, sport: &str, category: &str) -> FilterSelection {
    let field = |v: &str| (!v.is_empty()).then(|| v.to_string());
    FilterSelection {
        age: field(age),
        gender: field(gender),
        sport: field(sport),
        category: field(category),
    }
}

#[test]
fn empty_selection_returns_full_catalog_in_order() {
    let catalog = catalog();
    assert!(FilterSelection::default().is_empty());
    assert_eq!(ids(&catalog, &FilterSelection::default()), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn empty_strings_impose_no_constraint() {
    let catalog = catalog();
    let selection = select("", "", "", "");
    let explicit_empty = FilterSelection {
        age: Some(String::new()),
        ..FilterSelection::default()
    };
    assert!(explicit_empty.is_empty());
    assert_eq!(ids(&catalog, &selection), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(ids(&catalog, &explicit_empty), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn filtering_is_idempotent() {
    let catalog = catalog();
    let selection = select("Взрослые", "", "Фитнес", "");
    let once = catalog.filter(&selection);
    let twice = sportfamily_storefront::filter::apply(&once, &selection);
    assert_eq!(once, twice);
    assert_eq!(ids(&catalog, &selection), vec![3, 4, 6]);
}

#[test]
fn male_selection_passes_unisex_and_excludes_female() {
    let catalog = catalog();
    let visible = catalog.filter(&select("", "Мужской", "", ""));
    assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 4, 5, 6]);
    assert!(visible.iter().all(|p| p.gender == "Мужской" || p.gender == UNISEX));
    assert!(visible.iter().all(|p| p.gender != "Женский"));
}

#[test]
fn unisex_selection_only_matches_unisex_products() {
    let catalog = catalog();
    let visible = catalog.filter(&select("", UNISEX, "", ""));
    assert_eq!(visible.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 4, 5]);
}

#[test]
fn constraints_are_conjunctive() {
    let catalog = catalog();
    let visible = catalog.filter(&select("Дети", "", "Плавание", ""));
    assert_eq!(visible.len(), 1);
    assert_eq!(visible[0].name, "Детские плавательные очки");
}

#[test]
fn field_order_does_not_matter() {
    let catalog = catalog();
    let a = select("Взрослые", "Женский", "Фитнес", "Одежда");
    let b = FilterSelection {
        category: Some("Одежда".into()),
        sport: Some("Фитнес".into()),
        gender: Some("Женский".into()),
        age: Some("Взрослые".into()),
    };
    assert_eq!(ids(&catalog, &a), ids(&catalog, &b));
    assert_eq!(ids(&catalog, &a), vec![3]);
}

#[test]
fn no_match_yields_empty_list() {
    let catalog = catalog();
    assert!(catalog.filter(&select("", "", "Плавание", "Обувь")).is_empty());
}

#[test]
fn unknown_value_matches_nothing() {
    let catalog = catalog();
    assert!(catalog.filter(&select("", "", "Хоккей", "")).is_empty());
    assert!(catalog.filter(&select("Подростки", "", "", "")).is_empty());
}

#[test]
fn unknown_gender_still_passes_unisex_products() {
    let catalog = catalog();
    assert_eq!(ids(&catalog, &select("", "Другой", "", "")), vec![1, 2, 4, 5]);
}
