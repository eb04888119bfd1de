use pustok_store::domain::category::Category;
use pustok_store::domain::category_product::CategoryProduct;
use pustok_store::domain::color::Color;
use pustok_store::domain::product::Product;
use pustok_store::domain::product_color::ProductColor;
use pustok_store::domain::product_size::ProductSize;
use pustok_store::repository::errors::RepositoryError;
use pustok_store::repository::unit_of_work::Entity;
use pustok_store::repository::{
    AssociationReader, CategoryReader, ColorReader, DieselRepository, ProductReader, SizeReader,
};

mod common;

use common::TestDb;

fn create_product(repo: &DieselRepository, name: &str) -> i32 {
    let mut uow = repo.begin().expect("begin");
    let key = uow.add(Product::new(name, 1000));
    uow.commit().expect("commit product");
    uow.get(key).map(|product| product.id).expect("tracked product")
}

fn create_category(repo: &DieselRepository, name: &str) -> i32 {
    let mut uow = repo.begin().expect("begin");
    let key = uow.add(Category::new(name));
    uow.commit().expect("commit category");
    uow.get(key).map(|category| category.id).expect("tracked category")
}

fn link<E: Entity>(repo: &DieselRepository, row: E) -> Result<usize, RepositoryError> {
    let mut uow = repo.begin().expect("begin");
    uow.add(row);
    uow.commit()
}

fn delete_product(repo: &DieselRepository, product_id: i32) {
    let mut uow = repo.begin().expect("begin");
    let key = uow
        .find::<Product>(&product_id)
        .expect("find product")
        .expect("product exists");
    uow.remove(key).expect("remove");
    uow.commit().expect("delete product");
}

#[test]
fn duplicate_category_product_pair_is_rejected() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Dracula");
    let category_id = create_category(&repo, "Horror");

    link(&repo, CategoryProduct::new(product_id, category_id)).expect("first link");
    let err = link(&repo, CategoryProduct::new(product_id, category_id))
        .expect_err("duplicate pair must fail");

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert_eq!(repo.list_category_products(product_id).expect("list").len(), 1);
}

#[test]
fn duplicate_product_color_pair_is_rejected() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Frankenstein");

    link(&repo, ProductColor::new(product_id, -3)).expect("first link");
    let err =
        link(&repo, ProductColor::new(product_id, -3)).expect_err("duplicate pair must fail");

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert_eq!(repo.list_product_colors(product_id).expect("list").len(), 1);
}

#[test]
fn duplicate_product_size_pair_is_rejected() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Persuasion");

    link(&repo, ProductSize::new(product_id, -4)).expect("first link");
    let err = link(&repo, ProductSize::new(product_id, -4)).expect_err("duplicate pair must fail");

    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert_eq!(repo.list_product_sizes(product_id).expect("list").len(), 1);
}

#[test]
fn pairs_sharing_one_side_are_allowed() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let first = create_product(&repo, "Mansfield Park");
    let second = create_product(&repo, "Sense and Sensibility");

    link(&repo, ProductSize::new(first, -1)).expect("first/-1");
    link(&repo, ProductSize::new(first, -2)).expect("first/-2");
    link(&repo, ProductSize::new(second, -1)).expect("second/-1");

    assert_eq!(repo.list_product_sizes(first).expect("list").len(), 2);
    assert_eq!(repo.list_product_sizes(second).expect("list").len(), 1);
}

#[test]
fn missing_parent_rows_are_rejected() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Walden");

    let err = link(&repo, ProductColor::new(product_id, 999)).expect_err("unknown color");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let err = link(&repo, CategoryProduct::new(product_id + 100, -1)).expect_err("unknown pair");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn deleting_product_cascades_to_category_products() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Hamlet");
    let category_id = create_category(&repo, "Drama");
    link(&repo, CategoryProduct::new(product_id, category_id)).expect("link");

    delete_product(&repo, product_id);

    assert!(repo.list_category_products(product_id).expect("list").is_empty());
    assert!(repo.get_category_by_id(category_id).expect("get").is_some());
}

#[test]
fn deleting_product_cascades_to_product_colors() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Macbeth");
    link(&repo, ProductColor::new(product_id, -1)).expect("link blue");
    link(&repo, ProductColor::new(product_id, -6)).expect("link black");

    delete_product(&repo, product_id);

    assert!(repo.list_product_colors(product_id).expect("list").is_empty());
    assert_eq!(repo.list_colors().expect("list colors").len(), 6);
}

#[test]
fn deleting_product_cascades_to_product_sizes() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Othello");
    link(&repo, ProductSize::new(product_id, -5)).expect("link");

    delete_product(&repo, product_id);

    assert!(repo.list_product_sizes(product_id).expect("list").is_empty());
    assert!(repo.get_size_by_id(-5).expect("get").is_some());
}

#[test]
fn deleting_color_cascades_only_its_links() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Jane Eyre");

    let mut uow = repo.begin().expect("begin");
    let teal = uow.add(Color::new("Teal"));
    uow.commit().expect("commit color");
    let teal_id = uow.get(teal).expect("tracked").id;

    link(&repo, ProductColor::new(product_id, teal_id)).expect("link teal");
    link(&repo, ProductColor::new(product_id, -2)).expect("link red");

    uow.remove(teal).expect("remove");
    uow.commit().expect("delete color");

    assert_eq!(
        repo.list_product_colors(product_id).expect("list"),
        vec![ProductColor::new(product_id, -2)]
    );
}

#[test]
fn removing_a_join_row_unlinks_the_pair() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Emma");
    let category_id = create_category(&repo, "Romance");
    link(&repo, CategoryProduct::new(product_id, category_id)).expect("link");

    let mut uow = repo.begin().expect("begin");
    let key = uow
        .find::<CategoryProduct>(&(product_id, category_id))
        .expect("find")
        .expect("join row exists");
    uow.remove(key).expect("remove");
    uow.commit().expect("commit");

    assert!(repo.list_category_products(product_id).expect("list").is_empty());
    assert!(repo.list_products_in_category(category_id).expect("list").is_empty());
}

#[test]
fn product_details_follow_every_association() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "The Hobbit");
    let fantasy = create_category(&repo, "Fantasy");
    let children = create_category(&repo, "Children");

    let mut uow = repo.begin().expect("begin");
    uow.add(CategoryProduct::new(product_id, fantasy));
    uow.add(CategoryProduct::new(product_id, children));
    uow.add(ProductColor::new(product_id, -3));
    uow.add(ProductSize::new(product_id, -6));
    uow.add(ProductSize::new(product_id, -1));
    assert_eq!(uow.commit().expect("commit links"), 5);

    let details = repo
        .get_product_details(product_id)
        .expect("details")
        .expect("product exists");

    assert_eq!(details.product.name, "The Hobbit");
    let category_names: Vec<&str> = details.categories.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(category_names, vec!["Children", "Fantasy"]);
    let color_names: Vec<&str> = details.colors.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(color_names, vec!["Green"]);
    let size_names: Vec<&str> = details.sizes.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(size_names, vec!["X", "XXL"]);

    let in_fantasy = repo.list_products_in_category(fantasy).expect("list");
    assert_eq!(in_fantasy.len(), 1);
    assert_eq!(in_fantasy[0].id, product_id);

    assert!(repo.get_product_details(product_id + 1).expect("details").is_none());
}

#[test]
fn new_product_and_its_links_commit_together() {
    let test_db = TestDb::new();
    let repo = test_db.repo();

    let mut uow = repo.begin().expect("begin");
    let product = uow.add(Product::new("Dune", 1999));
    let category = uow.add(Category::new("Science fiction"));
    let genre = uow.link::<CategoryProduct>(product, category);
    let color = uow.link::<ProductColor>(product, -1);
    let size = uow.link::<ProductSize>(product, -2);

    assert_eq!(uow.commit().expect("commit"), 5);

    let product_id = uow.get(product).expect("tracked").id;
    let category_id = uow.get(category).expect("tracked").id;
    assert!(product_id > 0);
    assert_eq!(
        uow.get(genre).copied(),
        Some(CategoryProduct::new(product_id, category_id))
    );
    assert_eq!(uow.get(color).copied(), Some(ProductColor::new(product_id, -1)));
    assert_eq!(uow.get(size).copied(), Some(ProductSize::new(product_id, -2)));

    let details = repo
        .get_product_details(product_id)
        .expect("details")
        .expect("product exists");
    assert_eq!(details.categories.len(), 1);
    assert_eq!(details.colors[0].name, "Blue");
    assert_eq!(details.sizes[0].name, "S");
}

#[test]
fn failed_link_rolls_back_the_new_product() {
    let test_db = TestDb::new();
    let repo = test_db.repo();

    let mut uow = repo.begin().expect("begin");
    let product = uow.add(Product::new("Solaris", 1299));
    uow.link::<ProductColor>(product, -4);
    uow.link::<ProductColor>(product, -4);

    let err = uow.commit().expect_err("duplicate pair must fail");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));

    let (total, _) = repo.list_products(Default::default()).expect("list");
    assert_eq!(total, 0);
}

#[test]
fn link_to_removed_parent_entry_is_rejected() {
    let test_db = TestDb::new();
    let repo = test_db.repo();
    let product_id = create_product(&repo, "Roadside Picnic");

    let mut uow = repo.begin().expect("begin");
    let category = uow.add(Category::new("Abandoned"));
    uow.link::<CategoryProduct>(product_id, category);
    uow.remove(category).expect("remove");

    let err = uow.commit().expect_err("parent never stored");
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
    assert!(repo.list_category_products(product_id).expect("list").is_empty());
}
