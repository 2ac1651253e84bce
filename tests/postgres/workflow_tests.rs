//! List and item workflows over the `PostgreSQL` store.

use super::helpers::TestSchema;
use mockable::DefaultClock;
use std::sync::Arc;
use todo_lists::todo::{
    domain::OwnerId,
    services::{
        CreateTodoItemRequest, CreateTodoListRequest, NotFound, TodoItemService,
        TodoListService, TodoServiceError, UpdateTodoItemRequest,
    },
};

#[tokio::test(flavor = "multi_thread")]
async fn end_to_end_list_and_item_lifecycle() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let store = Arc::new(db.store.clone());
    let clock = Arc::new(DefaultClock);
    let lists = TodoListService::new(Arc::clone(&store), Arc::clone(&clock));
    let items = TodoItemService::new(store, clock);
    let owner = OwnerId::new("u1")?;

    let list_id = lists
        .create(&owner, CreateTodoListRequest::new("Groceries"))
        .await?;
    let item_id = items
        .create(CreateTodoItemRequest::new(list_id, "Buy milk"), &owner)
        .await?;
    items
        .update(
            item_id,
            UpdateTodoItemRequest::new(list_id, "Buy oat milk").with_body("two cartons"),
        )
        .await?;

    let views = items.get_all_by_list_id(list_id).await?;
    let [view] = views.as_slice() else {
        eyre::bail!("expected exactly one item, found {}", views.len());
    };
    eyre::ensure!(view.id == item_id, "item ID mismatch");
    eyre::ensure!(view.title == "Buy oat milk", "title mismatch");
    eyre::ensure!(view.body.as_deref() == Some("two cartons"), "body mismatch");

    lists.delete(&owner, list_id).await?;
    let after = items.delete(item_id).await;
    eyre::ensure!(
        matches!(after, Err(TodoServiceError::NotFound(NotFound::Item(id))) if id == item_id),
        "expected item not found after cascade, got {after:?}"
    );
    eyre::ensure!(lists.get_all(&owner).await?.is_empty(), "list survived");
    Ok(())
}
