//! Repository contract tests for the `PostgreSQL` store.

use super::helpers::TestSchema;
use mockable::DefaultClock;
use todo_lists::todo::{
    domain::{
        OwnerId, PersistedTodoItemData, TodoItem, TodoItemId, TodoItemTitle, TodoList, TodoListId,
        TodoListTitle,
    },
    ports::{TodoItemRepository, TodoListRepository, TodoRepositoryError},
};

fn sample_list(owner: &str, title: &str) -> eyre::Result<TodoList> {
    Ok(TodoList::new(
        OwnerId::new(owner)?,
        TodoListTitle::new(title)?,
        &DefaultClock,
    ))
}

fn sample_item(list: &TodoList, title: &str, body: Option<&str>) -> eyre::Result<TodoItem> {
    Ok(TodoItem::new(
        list.id(),
        list.owner().clone(),
        TodoItemTitle::new(title)?,
        body.map(str::to_owned),
        &DefaultClock,
    ))
}

#[tokio::test(flavor = "multi_thread")]
async fn list_round_trips_through_store() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let list = sample_list("u1", "Groceries")?;

    let stored = db.store.add_list(&list).await?;
    let fetched = db
        .store
        .find_list(list.id())
        .await?
        .ok_or_else(|| eyre::eyre!("list should exist"))?;

    eyre::ensure!(stored == fetched, "returned row differs from fetched row");
    eyre::ensure!(fetched.id() == list.id(), "list ID mismatch");
    eyre::ensure!(fetched.owner() == list.owner(), "owner mismatch");
    eyre::ensure!(fetched.title() == list.title(), "title mismatch");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn duplicate_list_identifier_is_rejected() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let list = sample_list("u1", "Groceries")?;
    db.store.add_list(&list).await?;

    let result = db.store.add_list(&list).await;

    eyre::ensure!(
        matches!(result, Err(TodoRepositoryError::DuplicateList(id)) if id == list.id()),
        "expected duplicate list error, got {result:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn lists_are_filtered_by_owner_in_insertion_order() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let first = sample_list("u1", "First")?;
    let foreign = sample_list("u2", "Foreign")?;
    let second = sample_list("u1", "Second")?;
    for list in [&first, &foreign, &second] {
        db.store.add_list(list).await?;
    }

    let owned = db.store.find_lists_by_owner(first.owner()).await?;

    let ids: Vec<TodoListId> = owned.iter().map(TodoList::id).collect();
    eyre::ensure!(
        ids == vec![first.id(), second.id()],
        "unexpected lists: {ids:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn item_without_parent_list_is_rejected() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let unsaved = sample_list("u1", "Groceries")?;
    let item = sample_item(&unsaved, "Buy milk", None)?;

    let result = db.store.add_item(&item).await;

    eyre::ensure!(
        matches!(result, Err(TodoRepositoryError::ListNotFound(id)) if id == unsaved.id()),
        "expected list not found, got {result:?}"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn item_update_persists_title_and_body() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let list = sample_list("u1", "Groceries")?;
    db.store.add_list(&list).await?;
    let mut item = sample_item(&list, "Buy milk", Some("semi-skimmed"))?;
    db.store.add_item(&item).await?;

    item.revise(TodoItemTitle::new("Buy oat milk")?, None, &DefaultClock);
    db.store.update_item(&item).await?;

    let fetched = db
        .store
        .find_item(item.id())
        .await?
        .ok_or_else(|| eyre::eyre!("item should exist"))?;
    eyre::ensure!(fetched.title().as_str() == "Buy oat milk", "title mismatch");
    eyre::ensure!(fetched.body().is_none(), "body should be cleared");
    eyre::ensure!(fetched.list_id() == list.id(), "list ID mismatch");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn item_update_leaves_parent_owner_and_creation_time() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let home = sample_list("u1", "Groceries")?;
    let elsewhere = sample_list("u2", "Hardware")?;
    db.store.add_list(&home).await?;
    db.store.add_list(&elsewhere).await?;
    let item = db
        .store
        .add_item(&sample_item(&home, "Buy milk", None)?)
        .await?;

    let rewritten = TodoItem::from_persisted(PersistedTodoItemData {
        id: item.id(),
        list_id: elsewhere.id(),
        owner: elsewhere.owner().clone(),
        title: TodoItemTitle::new("Buy oat milk")?,
        body: Some("two cartons".to_owned()),
        created_at: item.created_at() - chrono::Duration::days(1),
        updated_at: item.updated_at() + chrono::Duration::seconds(5),
    });
    db.store.update_item(&rewritten).await?;

    let fetched = db
        .store
        .find_item(item.id())
        .await?
        .ok_or_else(|| eyre::eyre!("item should exist"))?;
    eyre::ensure!(fetched.list_id() == home.id(), "parent reference changed");
    eyre::ensure!(fetched.owner() == home.owner(), "owner changed");
    eyre::ensure!(
        fetched.created_at() == item.created_at(),
        "creation time changed"
    );
    eyre::ensure!(fetched.title().as_str() == "Buy oat milk", "title mismatch");
    eyre::ensure!(fetched.body() == Some("two cartons"), "body mismatch");
    eyre::ensure!(
        db.store.find_items_by_list(elsewhere.id()).await?.is_empty(),
        "item appeared under another list"
    );
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_list_cascades_to_items() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let list = sample_list("u1", "Groceries")?;
    db.store.add_list(&list).await?;
    let first = sample_item(&list, "Buy milk", None)?;
    let second = sample_item(&list, "Buy bread", None)?;
    db.store.add_item(&first).await?;
    db.store.add_item(&second).await?;

    let before: Vec<TodoItemId> = db
        .store
        .find_items_by_list(list.id())
        .await?
        .iter()
        .map(TodoItem::id)
        .collect();
    db.store.delete_list(list.id()).await?;

    eyre::ensure!(
        before == vec![first.id(), second.id()],
        "unexpected items before delete: {before:?}"
    );
    eyre::ensure!(
        db.store.find_items_by_list(list.id()).await?.is_empty(),
        "items survived list deletion"
    );
    eyre::ensure!(db.store.find_item(first.id()).await?.is_none(), "orphan item");
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn writes_against_missing_rows_report_not_found() -> eyre::Result<()> {
    let Some(db) = TestSchema::provision().await? else {
        return Ok(());
    };
    let list = sample_list("u1", "Groceries")?;
    let item = sample_item(&list, "Buy milk", None)?;

    let results = [
        db.store.delete_list(list.id()).await,
        db.store.update_item(&item).await,
        db.store.delete_item(item.id()).await,
    ];

    for result in results {
        eyre::ensure!(
            result.as_ref().is_err_and(TodoRepositoryError::is_not_found),
            "expected not found, got {result:?}"
        );
    }
    Ok(())
}
