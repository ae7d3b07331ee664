use super::*;

use rand::{rngs::StdRng, SeedableRng};
use shared::domain::{AccentColor, ExhibitionId, ExhibitionKind, ExhibitionStatus, StoryId};

fn story(id: &str, title: &str, theme: &[&str], time_period: &str, geography: &str) -> Story {
    Story {
        id: StoryId::new(id),
        title: title.into(),
        slug: id.into(),
        excerpt: String::new(),
        time_period: time_period.into(),
        geography: geography.into(),
        theme: theme.iter().map(|t| t.to_string()).collect(),
        accent_color: AccentColor::Blue,
    }
}

fn exhibition(id: &str, start: &str, kind: ExhibitionKind, status: ExhibitionStatus) -> Exhibition {
    Exhibition {
        id: ExhibitionId::new(id),
        title: format!("Exhibition {id}"),
        slug: id.into(),
        short_description: String::new(),
        kind,
        status,
        start_date: start.parse().expect("date"),
        end_date: None,
        dates: start.into(),
        location: "Main Gallery".into(),
        accent_color: AccentColor::Orange,
        related_stories: Vec::new(),
    }
}

fn many_stories(n: usize) -> Vec<Story> {
    (0..n)
        .map(|i| story(&format!("s{i}"), &format!("Story {i}"), &["work"], "1945-1970", "Europe"))
        .collect()
}

fn slugs<T: Listable>(items: &[Annotated<T>]) -> Vec<&str> {
    items.iter().map(|item| item.record.slug()).collect()
}

#[test]
fn filters_combine_with_and() {
    let records = vec![
        story("a", "A", &["work"], "1945-1970", "Europe"),
        story("b", "B", &["family"], "1945-1970", "Europe"),
    ];
    let mut rng = StdRng::seed_from_u64(1);

    let both = StoryFilter {
        theme: Some("work".into()),
        geography: Some("Europe".into()),
        ..Default::default()
    };
    let selected = select_stories(&records, &both, SortKey::Oldest, &mut rng);
    assert_eq!(slugs(&selected), vec!["a"]);

    let none = StoryFilter {
        theme: Some("work".into()),
        geography: Some("Asia".into()),
        ..Default::default()
    };
    assert!(select_stories(&records, &none, SortKey::Oldest, &mut rng).is_empty());
}

#[test]
fn empty_filter_values_mean_all() {
    let records = many_stories(4);
    let filter = StoryFilter {
        theme: Some(String::new()),
        time_period: Some(String::new()),
        geography: None,
    };
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(select_stories(&records, &filter, SortKey::Oldest, &mut rng).len(), 4);
}

#[test]
fn unknown_filter_values_match_nothing() {
    let records = vec![exhibition(
        "e1",
        "2024-01-01",
        ExhibitionKind::Event,
        ExhibitionStatus::Current,
    )];
    let filter = ExhibitionFilter {
        kind: Some("concert".into()),
        status: None,
    };
    let mut rng = StdRng::seed_from_u64(3);
    assert!(select_exhibitions(&records, &filter, SortKey::Newest, &mut rng).is_empty());
}

#[test]
fn exhibition_filter_matches_kind_and_status() {
    let records = vec![
        exhibition("e1", "2024-01-01", ExhibitionKind::Event, ExhibitionStatus::Current),
        exhibition("e2", "2024-02-01", ExhibitionKind::Event, ExhibitionStatus::Past),
        exhibition("e3", "2024-03-01", ExhibitionKind::Workshop, ExhibitionStatus::Current),
    ];
    let filter = ExhibitionFilter {
        kind: Some("event".into()),
        status: Some("current".into()),
    };
    let mut rng = StdRng::seed_from_u64(4);
    let selected = select_exhibitions(&records, &filter, SortKey::Oldest, &mut rng);
    assert_eq!(slugs(&selected), vec!["e1"]);
}

#[test]
fn exactly_one_of_first_two_is_featured() {
    let records = many_stories(10);
    let mut saw_first = false;
    let mut saw_second = false;

    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let annotated = annotate_featured(&records, &FeaturedPolicy::default(), &mut rng);
        assert_eq!(annotated.len(), records.len());
        match (annotated[0].is_featured, annotated[1].is_featured) {
            (true, false) => saw_first = true,
            (false, true) => saw_second = true,
            other => panic!("seed {seed}: pinned window was {other:?}"),
        }
    }

    assert!(saw_first && saw_second, "coin flip never landed on one side");
}

#[test]
fn single_record_is_featured_on_a_coin_flip() {
    let records = many_stories(1);
    let mut saw_featured = false;
    let mut saw_plain = false;

    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let annotated = annotate_featured(&records, &FeaturedPolicy::default(), &mut rng);
        assert_eq!(annotated.len(), 1);
        if annotated[0].is_featured {
            saw_featured = true;
        } else {
            saw_plain = true;
        }

        // Only the pinned draw is taken.
        let mut reference = StdRng::seed_from_u64(seed);
        let _ = reference.gen_range(0..FeaturedPolicy::default().pinned_window);
        assert_eq!(rng.gen::<u64>(), reference.gen::<u64>());
    }

    assert!(saw_featured && saw_plain);
}

#[test]
fn later_records_are_featured_at_roughly_the_configured_rate() {
    let records = many_stories(1002);
    let mut rng = StdRng::seed_from_u64(42);
    let annotated = annotate_featured(&records, &FeaturedPolicy::default(), &mut rng);
    let featured = annotated[2..].iter().filter(|item| item.is_featured).count();
    assert!((80..=230).contains(&featured), "featured {featured} of 1000");
}

#[test]
fn rate_bounds_are_respected() {
    let records = many_stories(6);
    let mut rng = StdRng::seed_from_u64(5);

    let never = FeaturedPolicy {
        random_rate: 0.0,
        ..Default::default()
    };
    let annotated = annotate_featured(&records, &never, &mut rng);
    assert!(annotated[2..].iter().all(|item| !item.is_featured));

    let always = FeaturedPolicy {
        random_rate: 1.0,
        ..Default::default()
    };
    let annotated = annotate_featured(&records, &always, &mut rng);
    assert!(annotated[2..].iter().all(|item| item.is_featured));
}

#[test]
fn same_seed_gives_same_annotation() {
    let records = many_stories(20);
    let first = annotate_featured(
        &records,
        &FeaturedPolicy::default(),
        &mut StdRng::seed_from_u64(9),
    );
    let second = annotate_featured(
        &records,
        &FeaturedPolicy::default(),
        &mut StdRng::seed_from_u64(9),
    );
    assert_eq!(first, second);
}

#[test]
fn empty_input_is_valid() {
    let mut rng = StdRng::seed_from_u64(6);
    let selected = select_stories(&[], &StoryFilter::default(), SortKey::Newest, &mut rng);
    assert!(selected.is_empty());
}

#[test]
fn featured_pick_happens_before_filtering() {
    let records = vec![
        story("a", "A", &["work"], "1945-1970", "Europe"),
        story("b", "B", &["work"], "1945-1970", "Europe"),
        story("c", "C", &["family"], "1945-1970", "Europe"),
    ];
    let never = FeaturedPolicy {
        random_rate: 0.0,
        ..Default::default()
    };
    let filter = StoryFilter {
        theme: Some("family".into()),
        ..Default::default()
    };
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let selected = select_and_annotate(&records, &filter, SortKey::Oldest, &never, &mut rng);
        assert_eq!(slugs(&selected), vec!["c"]);
        assert!(!selected[0].is_featured);
    }
}

#[test]
fn story_newest_reverses_insertion_order() {
    let records = many_stories(4);
    let mut rng = StdRng::seed_from_u64(7);
    let newest = select_stories(&records, &StoryFilter::default(), SortKey::Newest, &mut rng);
    assert_eq!(slugs(&newest), vec!["s3", "s2", "s1", "s0"]);
    let oldest = select_stories(&records, &StoryFilter::default(), SortKey::Oldest, &mut rng);
    assert_eq!(slugs(&oldest), vec!["s0", "s1", "s2", "s3"]);
}

#[test]
fn alphabetical_sorts_by_title() {
    let records = vec![
        story("b", "Banana Story", &["work"], "1945-1970", "Europe"),
        story("a", "Apple Story", &["work"], "1945-1970", "Europe"),
    ];
    let mut rng = StdRng::seed_from_u64(8);
    let selected = select_stories(
        &records,
        &StoryFilter::default(),
        SortKey::Alphabetical,
        &mut rng,
    );
    let titles: Vec<_> = selected.iter().map(|item| item.record.title.as_str()).collect();
    assert_eq!(titles, vec!["Apple Story", "Banana Story"]);
}

#[test]
fn title_comparison_folds_case() {
    assert_eq!(compare_titles("apple", "Banana"), Ordering::Less);
    assert_eq!(compare_titles("Zebra", "apple"), Ordering::Greater);
    assert_eq!(compare_titles("same", "same"), Ordering::Equal);
}

#[test]
fn accented_titles_sort_beside_their_base_letter() {
    assert_eq!(compare_titles("Éclair Story", "Zebra Story"), Ordering::Less);
    assert_eq!(compare_titles("Éclair Story", "Dover Story"), Ordering::Greater);
    assert_eq!(compare_titles("élan", "Élan"), Ordering::Less);

    let records = vec![
        story("z", "Zebra Story", &["work"], "1945-1970", "Europe"),
        story("e", "Éclair Story", &["work"], "1945-1970", "Europe"),
        story("a", "Apple Story", &["work"], "1945-1970", "Europe"),
    ];
    let mut rng = StdRng::seed_from_u64(12);
    let selected = select_stories(
        &records,
        &StoryFilter::default(),
        SortKey::Alphabetical,
        &mut rng,
    );
    assert_eq!(slugs(&selected), vec!["a", "e", "z"]);
}

#[test]
fn exhibitions_sort_by_start_date() {
    let records = vec![
        exhibition("e3", "2024-03-01", ExhibitionKind::Exhibition, ExhibitionStatus::Current),
        exhibition("e1", "2024-01-01", ExhibitionKind::Event, ExhibitionStatus::Past),
        exhibition("e5", "2024-05-01", ExhibitionKind::Workshop, ExhibitionStatus::Upcoming),
        exhibition("e2", "2024-02-01", ExhibitionKind::Exhibition, ExhibitionStatus::Past),
        exhibition("e4", "2024-04-01", ExhibitionKind::Event, ExhibitionStatus::Upcoming),
    ];
    let mut rng = StdRng::seed_from_u64(10);

    let newest = select_exhibitions(&records, &ExhibitionFilter::default(), SortKey::Newest, &mut rng);
    assert_eq!(slugs(&newest), vec!["e5", "e4", "e3", "e2", "e1"]);

    let oldest = select_exhibitions(&records, &ExhibitionFilter::default(), SortKey::Oldest, &mut rng);
    assert_eq!(slugs(&oldest), vec!["e1", "e2", "e3", "e4", "e5"]);
}

#[test]
fn sort_key_parses_aliases() {
    assert_eq!("alpha".parse::<SortKey>().expect("alpha"), SortKey::Alphabetical);
    assert_eq!("Newest".parse::<SortKey>().expect("newest"), SortKey::Newest);
    assert!(matches!(
        "random".parse::<SortKey>(),
        Err(DomainError::UnknownSortKey(_))
    ));
}
