use std::sync::Arc;

use pustok_store::domain::email_message::{EmailMessage, EmailMessageListQuery};
use pustok_store::domain::product::{Product, ProductListQuery};
use pustok_store::domain::slide_banner::SlideBanner;
use pustok_store::repository::{EmailMessageReader, ProductReader, SlideBannerReader};

mod common;

use common::{SteppingClock, TestDb, fixed_datetime};

#[test]
fn test_product_listing_search_and_pagination() {
    let test_db = TestDb::new();
    let repo = test_db.repo_with_clock(Arc::new(SteppingClock::starting_at(fixed_datetime())));

    for (name, description) in [
        ("War and Peace", "Napoleonic epic"),
        ("Anna Karenina", "Tragic romance"),
        ("The Idiot", "Dostoevsky novel"),
    ] {
        let mut uow = repo.begin().expect("begin");
        uow.add(Product::new(name, 1500).with_description(description));
        uow.commit().expect("commit");
    }

    let (total, items) = repo
        .list_products(ProductListQuery::new())
        .expect("list all");
    assert_eq!(total, 3);
    let names: Vec<&str> = items.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["The Idiot", "Anna Karenina", "War and Peace"]);

    let (total, items) = repo
        .list_products(ProductListQuery::new().search("romance"))
        .expect("search description");
    assert_eq!(total, 1);
    assert_eq!(items[0].name, "Anna Karenina");

    let (total, items) = repo
        .list_products(ProductListQuery::new().paginate(2, 2))
        .expect("second page");
    assert_eq!(total, 3);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].name, "War and Peace");
}

#[test]
fn test_slide_banners_are_ordered_by_position() {
    let test_db = TestDb::new();
    let repo = test_db.repo();

    let mut uow = repo.begin().expect("begin");
    uow.add(SlideBanner::new("Third", "/img/3.jpg", 3));
    let first =
        uow.add(SlideBanner::new("First", "/img/1.jpg", 1).with_description("New arrivals"));
    uow.add(SlideBanner::new("Second", "/img/2.jpg", 2));
    uow.commit().expect("commit");

    let banners = repo.list_slide_banners().expect("list banners");
    let titles: Vec<&str> = banners.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, vec!["First", "Second", "Third"]);

    let stored = repo
        .get_slide_banner_by_id(uow.get(first).expect("tracked").id)
        .expect("get banner")
        .expect("banner stored");
    assert_eq!(stored.description.as_deref(), Some("New arrivals"));
}

#[test]
fn test_email_messages_filter_by_recipient() {
    let test_db = TestDb::new();
    let repo = test_db.repo();

    let mut uow = repo.begin().expect("begin");
    uow.add(EmailMessage::new(" alice@example.com ", "Order shipped", "On its way"));
    uow.add(EmailMessage::new("bob@example.com", "Welcome", "Hello Bob"));
    uow.add(EmailMessage::new("alice@example.com", "Receipt", "Thanks"));
    assert_eq!(uow.commit().expect("commit"), 3);

    let (total, messages) = repo
        .list_email_messages(EmailMessageListQuery::new().recipient("alice@example.com"))
        .expect("list alice");
    assert_eq!(total, 2);
    let subjects: Vec<&str> = messages.iter().map(|m| m.subject.as_str()).collect();
    assert_eq!(subjects, vec!["Receipt", "Order shipped"]);

    let (total, page) = repo
        .list_email_messages(EmailMessageListQuery::new().paginate(1, 1))
        .expect("first page");
    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].subject, "Receipt");
}

#[test]
fn test_missing_rows_read_as_none() {
    let test_db = TestDb::new();
    let repo = test_db.repo();

    assert!(repo.get_product_by_id(42).expect("get product").is_none());
    assert!(repo.get_email_message_by_id(42).expect("get message").is_none());
    assert!(repo.get_slide_banner_by_id(42).expect("get banner").is_none());
}
