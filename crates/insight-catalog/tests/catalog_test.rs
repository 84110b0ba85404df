use insight_catalog::{filter_and_sort, CancerCard, CardGender, SortKey};

fn golden_cards() -> Vec<CancerCard> {
    test_fixtures::load_fixture("golden/catalog/cards.json")
}

fn names(cards: &[CancerCard]) -> Vec<&str> {
    cards.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn golden_cards_deserialize() {
    let cards = golden_cards();
    assert_eq!(cards.len(), 8);
    assert_eq!(cards[5].prevalence_rank, None);
    assert_eq!(cards[6].survival, None);
    assert_eq!(cards[3].gender, CardGender::Male);
}

#[test]
fn all_by_prevalence_puts_unranked_last() {
    let sorted = filter_and_sort(&golden_cards(), "all", "prevalence");
    assert_eq!(
        names(&sorted),
        vec![
            "Colorectal Cancer",
            "Breast Cancer",
            "Lung Cancer",
            "Prostate Cancer",
            "liver Cancer",
            "Nasopharyngeal Cancer",
            "Testicular Cancer",
            "Cervical Cancer",
        ]
    );
}

#[test]
fn male_filter_keeps_both_and_male_cards() {
    let sorted = filter_and_sort(&golden_cards(), "male", "prevalence");
    assert_eq!(
        names(&sorted),
        vec![
            "Colorectal Cancer",
            "Lung Cancer",
            "Prostate Cancer",
            "liver Cancer",
            "Nasopharyngeal Cancer",
            "Testicular Cancer",
        ]
    );
}

#[test]
fn female_filter_excludes_male_cards() {
    let sorted = filter_and_sort(&golden_cards(), "female", "alpha");
    assert_eq!(
        names(&sorted),
        vec![
            "Breast Cancer",
            "Cervical Cancer",
            "Colorectal Cancer",
            "liver Cancer",
            "Lung Cancer",
            "Nasopharyngeal Cancer",
        ]
    );
}

#[test]
fn survival_sort_is_descending_and_stable() {
    let sorted = filter_and_sort(&golden_cards(), "all", "survival");
    assert_eq!(
        names(&sorted),
        vec![
            "Prostate Cancer",
            "Testicular Cancer",
            "Breast Cancer",
            "Cervical Cancer",
            "Colorectal Cancer",
            "liver Cancer",
            "Lung Cancer",
            "Nasopharyngeal Cancer",
        ]
    );
}

#[test]
fn unknown_sort_keeps_input_order() {
    let cards = golden_cards();
    let sorted = filter_and_sort(&cards, "all", "popularity");
    assert_eq!(sorted, cards);
}

#[test]
fn unknown_gender_shows_every_card() {
    let cards = golden_cards();
    assert_eq!(filter_and_sort(&cards, "", "none").len(), cards.len());
}

#[test]
fn empty_catalog_is_fine() {
    assert!(filter_and_sort(&[], "male", "alpha").is_empty());
}

#[test]
fn builder_and_sort_key_codes() {
    let mut cards = vec![
        CancerCard::new("b", CardGender::Both).with_prevalence_rank(2),
        CancerCard::new("a", CardGender::Both),
        CancerCard::new("c", CardGender::Both).with_prevalence_rank(1),
    ];
    SortKey::default().sort(&mut cards);
    assert_eq!(names(&cards), vec!["c", "b", "a"]);
    for key in [SortKey::Prevalence, SortKey::Survival, SortKey::Alpha] {
        assert_eq!(SortKey::from_code(key.code()), Some(key));
    }
}

#[test]
fn card_serializes_camel_case_without_missing_fields() {
    let card = CancerCard::new("Lung Cancer", CardGender::Both).with_prevalence_rank(3);
    let json = serde_json::to_value(&card).unwrap();
    assert_eq!(json["prevalenceRank"], 3);
    assert_eq!(json["gender"], "both");
    assert!(json.get("survival").is_none());
}

#[test]
fn empty_sort_value_uses_prevalence_order() {
    let cards = vec![
        CancerCard::new("b", CardGender::Both).with_prevalence_rank(2),
        CancerCard::new("a", CardGender::Both).with_prevalence_rank(1),
    ];
    assert_eq!(names(&filter_and_sort(&cards, "", "")), vec!["a", "b"]);
    assert_eq!(SortKey::from_code(""), Some(SortKey::Prevalence));
    assert_eq!(SortKey::from_code("popularity"), None);
}

#[test]
fn card_without_gender_applies_to_everyone() {
    let cards: Vec<CancerCard> =
        serde_json::from_str(r#"[{"name":"X","prevalenceRank":1}]"#).unwrap();
    assert_eq!(cards[0].gender, CardGender::Both);
    for gender in ["all", "male", "female"] {
        assert_eq!(names(&filter_and_sort(&cards, gender, "prevalence")), vec!["X"]);
    }
}

#[test]
fn rank_zero_counts_as_unranked() {
    let cards = vec![
        CancerCard::new("zero", CardGender::Both).with_prevalence_rank(0),
        CancerCard::new("unranked", CardGender::Both),
        CancerCard::new("tenth", CardGender::Both).with_prevalence_rank(10),
    ];
    assert_eq!(
        names(&filter_and_sort(&cards, "all", "prevalence")),
        vec!["tenth", "zero", "unranked"]
    );
}
