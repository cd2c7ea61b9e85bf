//! Filtering, sorting, and pagination through the service.

use super::helpers::{reference_instant, service_with_clock, TestService};
use chrono::Duration;
use rstest::rstest;
use taskledger::task::{
    domain::{OwnerId, TaskPatch, TaskPriority, TaskStatus},
    query::{SortField, TaskFilter},
    services::{CreateTaskRequest, ListTasksRequest, TaskServiceError},
};

async fn seed_varied_tasks(service: &TestService, owner: &OwnerId) {
    let specs = [
        ("alpha", TaskPriority::Low, Some(Duration::days(5))),
        ("bravo", TaskPriority::Urgent, Some(Duration::days(1))),
        ("charlie", TaskPriority::Medium, None),
        ("delta", TaskPriority::High, Some(Duration::days(3))),
    ];
    for (title, priority, due_offset) in specs {
        let mut request = CreateTaskRequest::new(title).with_priority(priority);
        if let Some(offset) = due_offset {
            request = request.with_due_date(reference_instant() + offset);
        }
        service
            .create(owner, request)
            .await
            .expect("seeding should succeed");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_filter_narrows_results() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");
    seed_varied_tasks(&service, &alice).await;

    let first = service
        .list(&alice, ListTasksRequest::new().with_page_size(1))
        .await
        .expect("listing should succeed");
    let target = first.items.first().expect("one item").id;
    let start = TaskPatch::new().with_status(TaskStatus::InProgress);
    service
        .update(&alice, target, &start)
        .await
        .expect("update should succeed");

    let filter = TaskFilter::new().with_status(TaskStatus::InProgress);
    let page = service
        .list(&alice, ListTasksRequest::new().with_filter(filter))
        .await
        .expect("listing should succeed");
    assert_eq!(page.total, 1);
    assert!(
        page.items
            .iter()
            .all(|view| view.status == TaskStatus::InProgress)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn due_date_range_is_inclusive_and_and_combined() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");
    seed_varied_tasks(&service, &alice).await;

    let filter = TaskFilter::new()
        .with_due_date_from(reference_instant() + Duration::days(1))
        .with_due_date_to(reference_instant() + Duration::days(3));
    let page = service
        .list(&alice, ListTasksRequest::new().with_filter(filter))
        .await
        .expect("listing should succeed");

    // bravo (day 1) and delta (day 3); charlie has no due date and alpha is
    // outside the range.
    assert_eq!(page.total, 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn inverted_due_date_range_is_rejected() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");

    let filter = TaskFilter::new()
        .with_due_date_from(reference_instant() + Duration::days(31))
        .with_due_date_to(reference_instant());
    let result = service
        .list(&alice, ListTasksRequest::new().with_filter(filter))
        .await;

    let err = result.expect_err("listing should fail");
    assert_eq!(err.code(), "invalid_date_range");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn priority_sort_descends_from_urgent() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");
    seed_varied_tasks(&service, &alice).await;

    let page = service
        .list(
            &alice,
            ListTasksRequest::new()
                .with_sort_by("priority")
                .with_sort_order("desc"),
        )
        .await
        .expect("listing should succeed");

    let priorities: Vec<_> = page.items.iter().map(|view| view.priority).collect();
    assert_eq!(
        priorities,
        vec![
            TaskPriority::Urgent,
            TaskPriority::High,
            TaskPriority::Medium,
            TaskPriority::Low,
        ]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn every_whitelisted_sort_field_lists_successfully() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");
    seed_varied_tasks(&service, &alice).await;

    for field in SortField::ALL {
        let request = ListTasksRequest::new().with_sort_by(field.as_str());
        let page = service
            .list(&alice, request)
            .await
            .expect("whitelisted sort should succeed");
        assert_eq!(page.total, 4, "sort field {field}");
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn non_whitelisted_sort_field_never_reaches_storage() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");

    let result = service
        .list(&alice, ListTasksRequest::new().with_sort_by("owner_id"))
        .await;
    let err = result.expect_err("listing should fail");
    assert!(matches!(
        err,
        TaskServiceError::Query(taskledger::task::query::TaskQueryError::InvalidSortField(_))
    ));
    assert_eq!(err.code(), "invalid_sort_field");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn oversized_page_size_is_rejected_not_clamped() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");

    let result = service
        .list(&alice, ListTasksRequest::new().with_page_size(101))
        .await;
    let err = result.expect_err("listing should fail");
    assert_eq!(err.code(), "validation_error");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn listing_an_empty_collection_is_a_success() {
    let (service, _clock) = service_with_clock();
    let alice = OwnerId::from("u1");

    let page = service
        .list(&alice, ListTasksRequest::new())
        .await
        .expect("listing should succeed");
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_size, 50);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn default_sort_is_newest_first() {
    let (service, clock) = service_with_clock();
    let alice = OwnerId::from("u1");

    service
        .create(&alice, CreateTaskRequest::new("older"))
        .await
        .expect("creation should succeed");
    clock.advance(Duration::minutes(1));
    service
        .create(&alice, CreateTaskRequest::new("newer"))
        .await
        .expect("creation should succeed");

    let page = service
        .list(&alice, ListTasksRequest::new())
        .await
        .expect("listing should succeed");
    let titles: Vec<_> = page
        .items
        .iter()
        .map(|view| view.title.as_str().to_owned())
        .collect();
    assert_eq!(titles, vec!["newer".to_owned(), "older".to_owned()]);
}
