use pustok_store::domain::color::Color;
use pustok_store::domain::size::Size;
use pustok_store::repository::seed::{COLOR_SEEDS, SIZE_SEEDS, SchemaReport, seed_timestamp};
use pustok_store::repository::{ColorReader, SizeReader};

mod common;

#[test]
fn initialization_installs_six_sizes() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let mut sizes = repo.list_sizes().expect("list sizes");
    sizes.sort_by_key(|size| std::cmp::Reverse(size.id));

    let seeded: Vec<(i32, &str)> = sizes
        .iter()
        .map(|size| (size.id, size.name.as_str()))
        .collect();
    assert_eq!(
        seeded,
        vec![
            (-1, "X"),
            (-2, "S"),
            (-3, "XS"),
            (-4, "L"),
            (-5, "XL"),
            (-6, "XXL"),
        ]
    );

    for size in &sizes {
        assert_eq!(size.created_at, seed_timestamp());
        assert_eq!(size.updated_at, seed_timestamp());
    }
}

#[test]
fn initialization_installs_six_colors() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let colors = repo.list_colors().expect("list colors");
    assert_eq!(colors.len(), COLOR_SEEDS.len());

    for (id, name) in COLOR_SEEDS {
        let color = repo
            .get_color_by_id(id)
            .expect("get color")
            .expect("seeded color should exist");
        assert_eq!(color.name, name);
        assert_eq!(color.created_at, seed_timestamp());
        assert_eq!(color.updated_at, seed_timestamp());
    }
}

#[test]
fn reinitialization_does_not_duplicate_seed_rows() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let report = repo.initialize_schema().expect("second initialization");
    assert_eq!(report, SchemaReport::default());

    assert_eq!(repo.list_colors().expect("list colors").len(), 6);
    assert_eq!(repo.list_sizes().expect("list sizes").len(), SIZE_SEEDS.len());
}

#[test]
fn reinitialization_keeps_user_rows_and_edits() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let mut uow = repo.begin().expect("begin");
    let blue = uow
        .find::<Color>(&-1)
        .expect("find blue")
        .expect("blue should be seeded");
    if let Some(color) = uow.get_mut(blue) {
        color.name = "Navy".to_string();
    }
    uow.add(Size::new("XXXL"));
    uow.commit().expect("commit");

    repo.initialize_schema().expect("re-run initialization");

    let navy = repo.get_color_by_id(-1).expect("get").expect("exists");
    assert_eq!(navy.name, "Navy");
    assert_eq!(repo.list_sizes().expect("list sizes").len(), 7);
}

#[test]
fn user_created_rows_receive_positive_ids() {
    let test_db = common::TestDb::new();
    let repo = test_db.repo();

    let mut uow = repo.begin().expect("begin");
    let teal = uow.add(Color::new("Teal"));
    let tiny = uow.add(Size::new("XXS"));
    uow.commit().expect("commit");

    let teal_id = uow.get(teal).map(|color| color.id).expect("tracked color");
    let tiny_id = uow.get(tiny).map(|size| size.id).expect("tracked size");
    assert!(teal_id > 0, "expected positive id, got {teal_id}");
    assert!(tiny_id > 0, "expected positive id, got {tiny_id}");
}
