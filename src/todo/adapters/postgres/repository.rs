//! `PostgreSQL` store implementation for todo lists and items.

use super::{
    models::{NewTodoItemRow, NewTodoListRow, TodoItemRow, TodoListRow},
    schema::{todo_items, todo_lists},
};
use crate::todo::{
    domain::{
        OwnerId, PersistedTodoItemData, PersistedTodoListData, TodoItem, TodoItemId,
        TodoItemTitle, TodoList, TodoListId, TodoListTitle,
    },
    ports::{TodoItemRepository, TodoListRepository, TodoRepositoryError, TodoRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by todo adapters.
pub type TodoPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed store implementing both todo repository ports.
#[derive(Debug, Clone)]
pub struct PostgresTodoStore {
    pool: TodoPgPool,
}

impl PostgresTodoStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TodoPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, operation: F) -> TodoRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TodoRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TodoRepositoryError::persistence)?;
            operation(&mut connection)
        })
        .await
        .map_err(TodoRepositoryError::persistence)?
    }
}

#[async_trait]
impl TodoListRepository for PostgresTodoStore {
    async fn add_list(&self, list: &TodoList) -> TodoRepositoryResult<TodoList> {
        let list_id = list.id();
        let new_row = to_new_list_row(list);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todo_lists::table)
                .values(&new_row)
                .returning(TodoListRow::as_returning())
                .get_result::<TodoListRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateList(list_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            row_to_list(row)
        })
        .await
    }

    async fn find_list(&self, id: TodoListId) -> TodoRepositoryResult<Option<TodoList>> {
        self.run_blocking(move |connection| {
            let row = todo_lists::table
                .filter(todo_lists::id.eq(id.into_inner()))
                .select(TodoListRow::as_select())
                .first::<TodoListRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_list).transpose()
        })
        .await
    }

    async fn find_lists_by_owner(&self, owner: &OwnerId) -> TodoRepositoryResult<Vec<TodoList>> {
        let owner_key = owner.as_str().to_owned();
        self.run_blocking(move |connection| {
            let rows = todo_lists::table
                .filter(todo_lists::owner.eq(&owner_key))
                .order(todo_lists::position.asc())
                .select(TodoListRow::as_select())
                .load::<TodoListRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_list).collect()
        })
        .await
    }

    async fn delete_list(&self, id: TodoListId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Items go with the list through `ON DELETE CASCADE`.
            let deleted_count =
                diesel::delete(todo_lists::table.filter(todo_lists::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TodoRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(TodoRepositoryError::ListNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl TodoItemRepository for PostgresTodoStore {
    async fn add_item(&self, item: &TodoItem) -> TodoRepositoryResult<TodoItem> {
        let item_id = item.id();
        let list_id = item.list_id();
        let new_row = to_new_item_row(item);

        self.run_blocking(move |connection| {
            let row = diesel::insert_into(todo_items::table)
                .values(&new_row)
                .returning(TodoItemRow::as_returning())
                .get_result::<TodoItemRow>(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TodoRepositoryError::DuplicateItem(item_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TodoRepositoryError::ListNotFound(list_id)
                    }
                    _ => TodoRepositoryError::persistence(err),
                })?;
            row_to_item(row)
        })
        .await
    }

    async fn find_item(&self, id: TodoItemId) -> TodoRepositoryResult<Option<TodoItem>> {
        self.run_blocking(move |connection| {
            let row = todo_items::table
                .filter(todo_items::id.eq(id.into_inner()))
                .select(TodoItemRow::as_select())
                .first::<TodoItemRow>(connection)
                .optional()
                .map_err(TodoRepositoryError::persistence)?;
            row.map(row_to_item).transpose()
        })
        .await
    }

    async fn find_items_by_list(&self, list_id: TodoListId) -> TodoRepositoryResult<Vec<TodoItem>> {
        self.run_blocking(move |connection| {
            let rows = todo_items::table
                .filter(todo_items::list_id.eq(list_id.into_inner()))
                .order(todo_items::position.asc())
                .select(TodoItemRow::as_select())
                .load::<TodoItemRow>(connection)
                .map_err(TodoRepositoryError::persistence)?;
            rows.into_iter().map(row_to_item).collect()
        })
        .await
    }

    async fn update_item(&self, item: &TodoItem) -> TodoRepositoryResult<()> {
        let item_id = item.id();
        let title = item.title().as_str().to_owned();
        let body = item.body().map(str::to_owned);
        let updated_at = item.updated_at();

        self.run_blocking(move |connection| {
            let updated_count =
                diesel::update(todo_items::table.filter(todo_items::id.eq(item_id.into_inner())))
                    .set((
                        todo_items::title.eq(&title),
                        todo_items::body.eq(&body),
                        todo_items::updated_at.eq(updated_at),
                    ))
                    .execute(connection)
                    .map_err(TodoRepositoryError::persistence)?;

            if updated_count == 0 {
                return Err(TodoRepositoryError::ItemNotFound(item_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete_item(&self, id: TodoItemId) -> TodoRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted_count =
                diesel::delete(todo_items::table.filter(todo_items::id.eq(id.into_inner())))
                    .execute(connection)
                    .map_err(TodoRepositoryError::persistence)?;
            if deleted_count == 0 {
                return Err(TodoRepositoryError::ItemNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_list_row(list: &TodoList) -> NewTodoListRow {
    NewTodoListRow {
        id: list.id().into_inner(),
        owner: list.owner().as_str().to_owned(),
        title: list.title().as_str().to_owned(),
        created_at: list.created_at(),
        updated_at: list.updated_at(),
    }
}

fn to_new_item_row(item: &TodoItem) -> NewTodoItemRow {
    NewTodoItemRow {
        id: item.id().into_inner(),
        list_id: item.list_id().into_inner(),
        owner: item.owner().as_str().to_owned(),
        title: item.title().as_str().to_owned(),
        body: item.body().map(str::to_owned),
        created_at: item.created_at(),
        updated_at: item.updated_at(),
    }
}

fn row_to_list(row: TodoListRow) -> TodoRepositoryResult<TodoList> {
    let TodoListRow {
        id,
        owner,
        title,
        created_at,
        updated_at,
        ..
    } = row;

    let data = PersistedTodoListData {
        id: TodoListId::from_uuid(id),
        owner: OwnerId::new(owner).map_err(TodoRepositoryError::invalid_persisted_data)?,
        title: TodoListTitle::new(title).map_err(TodoRepositoryError::invalid_persisted_data)?,
        created_at,
        updated_at,
    };
    Ok(TodoList::from_persisted(data))
}

fn row_to_item(row: TodoItemRow) -> TodoRepositoryResult<TodoItem> {
    let TodoItemRow {
        id,
        list_id,
        owner,
        title,
        body,
        created_at,
        updated_at,
        ..
    } = row;

    let data = PersistedTodoItemData {
        id: TodoItemId::from_uuid(id),
        list_id: TodoListId::from_uuid(list_id),
        owner: OwnerId::new(owner).map_err(TodoRepositoryError::invalid_persisted_data)?,
        title: TodoItemTitle::new(title).map_err(TodoRepositoryError::invalid_persisted_data)?,
        body,
        created_at,
        updated_at,
    };
    Ok(TodoItem::from_persisted(data))
}
