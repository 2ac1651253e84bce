//! In-memory integration tests for the todo item workflow.

use super::helpers::{Workflows, owner, stranger, workflows};
use rstest::rstest;
use todo_lists::todo::{
    domain::{OwnerId, TodoItemId},
    services::{CreateTodoItemRequest, NotFound, TodoServiceError, UpdateTodoItemRequest},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn create_then_list_returns_item_view(
    workflows: Workflows,
    owner: OwnerId,
) -> eyre::Result<()> {
    let list_id = workflows.list_for(&owner, "Groceries").await?;

    let item_id = workflows
        .items
        .create(
            CreateTodoItemRequest::new(list_id, "Buy milk").with_body("two litres"),
            &owner,
        )
        .await?;
    let views = workflows.items.get_all_by_list_id(list_id).await?;

    let [view] = views.as_slice() else {
        eyre::bail!("expected exactly one item, found {}", views.len());
    };
    eyre::ensure!(view.id == item_id, "item ID mismatch");
    eyre::ensure!(view.list_id == list_id, "list ID mismatch");
    eyre::ensure!(view.title == "Buy milk", "title mismatch");
    eyre::ensure!(view.body.as_deref() == Some("two litres"), "body mismatch");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stranger_cannot_add_items_to_foreign_list(
    workflows: Workflows,
    owner: OwnerId,
    stranger: OwnerId,
) -> eyre::Result<()> {
    let list_id = workflows.list_for(&owner, "Groceries").await?;

    let result = workflows
        .items
        .create(CreateTodoItemRequest::new(list_id, "Sneaky"), &stranger)
        .await;

    eyre::ensure!(
        matches!(result, Err(TodoServiceError::NotFound(NotFound::List(id))) if id == list_id),
        "expected list not found, got {result:?}"
    );
    eyre::ensure!(
        workflows.items.get_all_by_list_id(list_id).await?.is_empty(),
        "foreign item was stored"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_replaces_fields_in_place(
    workflows: Workflows,
    owner: OwnerId,
) -> eyre::Result<()> {
    let list_id = workflows.list_for(&owner, "Groceries").await?;
    let first = workflows.item_for(&owner, list_id, "Buy milk").await?;
    let second = workflows.item_for(&owner, list_id, "Buy bread").await?;

    let returned = workflows
        .items
        .update(first, UpdateTodoItemRequest::new(list_id, "Buy oat milk"))
        .await?;

    eyre::ensure!(returned == first, "update changed the item identifier");
    let views = workflows.items.get_all_by_list_id(list_id).await?;
    let summary: Vec<(TodoItemId, &str)> = views
        .iter()
        .map(|view| (view.id, view.title.as_str()))
        .collect();
    eyre::ensure!(
        summary == vec![(first, "Buy oat milk"), (second, "Buy bread")],
        "unexpected items after update: {summary:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn items_of_a_deleted_list_are_gone(
    workflows: Workflows,
    owner: OwnerId,
) -> eyre::Result<()> {
    let list_id = workflows.list_for(&owner, "Groceries").await?;
    let item_id = workflows.item_for(&owner, list_id, "Buy milk").await?;
    workflows.lists.delete(&owner, list_id).await?;

    let update = workflows
        .items
        .update(item_id, UpdateTodoItemRequest::new(list_id, "Too late"))
        .await;
    let delete = workflows.items.delete(item_id).await;

    eyre::ensure!(
        matches!(update, Err(TodoServiceError::NotFound(NotFound::List(_)))),
        "expected list not found on update, got {update:?}"
    );
    eyre::ensure!(
        matches!(delete, Err(TodoServiceError::NotFound(NotFound::Item(_)))),
        "expected item not found on delete, got {delete:?}"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleted_item_disappears_from_listing(
    workflows: Workflows,
    owner: OwnerId,
) -> eyre::Result<()> {
    let list_id = workflows.list_for(&owner, "Groceries").await?;
    let gone = workflows.item_for(&owner, list_id, "Buy milk").await?;
    let kept = workflows.item_for(&owner, list_id, "Buy bread").await?;

    workflows.items.delete(gone).await?;

    let ids: Vec<TodoItemId> = workflows
        .items
        .get_all_by_list_id(list_id)
        .await?
        .iter()
        .map(|view| view.id)
        .collect();
    eyre::ensure!(ids == vec![kept], "unexpected items: {ids:?}");
    Ok(())
}
