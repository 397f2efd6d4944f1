//! `TodoStore` implementation shared by every sqlx backend.
//!
//! The statements in `sql` run unchanged on Postgres and SQLite, so the
//! backends differ only in their pool and row types. `todo_store!` expands
//! the store struct, its row mapping and the trait impl for one pair.

macro_rules! todo_store {
    ($(#[$meta:meta])* $store:ident, $pool:ty, $row:ty) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $store {
            pool: $pool,
        }

        impl $store {
            /// Create a new store with the given connection pool.
            pub fn new(pool: $pool) -> Self {
                $store { pool }
            }

            pub fn pool(&self) -> &$pool {
                &self.pool
            }

            fn item_from_row(row: &$row) -> Result<$crate::domain::Item, ::sqlx::Error> {
                use ::sqlx::Row;

                let id: i64 = row.try_get("id")?;
                Ok($crate::domain::Item {
                    id,
                    name: row.try_get("name")?,
                    description: row.try_get("description")?,
                    state: $crate::db::parse_state(id, row.try_get("state")?),
                    due_date: row.try_get("dueDate")?,
                    completed_date: row.try_get("completedDate")?,
                    created_date: row.try_get("createdDate")?,
                    updated_date: row.try_get("updatedDate")?,
                    list_id: row.try_get("listId")?,
                })
            }

            fn list_from_row(row: &$row) -> Result<$crate::domain::TodoList, ::sqlx::Error> {
                use ::sqlx::Row;

                Ok($crate::domain::TodoList {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                    description: row.try_get("description")?,
                    created_date: row.try_get("createdDate")?,
                    updated_date: row.try_get("updatedDate")?,
                })
            }
        }

        #[::async_trait::async_trait]
        impl $crate::db::TodoStore for $store {
            async fn list_items(
                &self,
                page: $crate::domain::Page,
            ) -> Result<Vec<$crate::domain::Item>, ::sqlx::Error> {
                let rows = ::sqlx::query($crate::db::sql::LIST_ITEMS)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await?;
                rows.iter().map(Self::item_from_row).collect()
            }

            async fn get_item(
                &self,
                id: i64,
            ) -> Result<Option<$crate::domain::Item>, ::sqlx::Error> {
                let row = ::sqlx::query($crate::db::sql::GET_ITEM)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
                row.as_ref().map(Self::item_from_row).transpose()
            }

            async fn create_item(
                &self,
                item: &$crate::domain::ItemIn,
            ) -> Result<$crate::domain::Item, ::sqlx::Error> {
                let now = ::chrono::Utc::now();
                let row = ::sqlx::query($crate::db::sql::INSERT_ITEM)
                    .bind(item.name.as_str())
                    .bind(item.description.as_deref())
                    .bind(item.state.map(|s| s.as_str()))
                    .bind(item.due_date)
                    .bind(item.completed_date(now))
                    .bind(now)
                    .bind(item.list_id)
                    .fetch_one(&self.pool)
                    .await?;
                Self::item_from_row(&row)
            }

            async fn update_item(
                &self,
                id: i64,
                item: &$crate::domain::ItemIn,
            ) -> Result<Option<$crate::domain::Item>, ::sqlx::Error> {
                let now = ::chrono::Utc::now();
                let row = ::sqlx::query($crate::db::sql::UPDATE_ITEM)
                    .bind(id)
                    .bind(item.name.as_str())
                    .bind(item.description.as_deref())
                    .bind(item.state.map(|s| s.as_str()))
                    .bind(item.due_date)
                    .bind(item.completed_date(now))
                    .bind(now)
                    .bind(item.list_id)
                    .fetch_optional(&self.pool)
                    .await?;
                row.as_ref().map(Self::item_from_row).transpose()
            }

            async fn delete_item(&self, id: i64) -> Result<bool, ::sqlx::Error> {
                let result = ::sqlx::query($crate::db::sql::DELETE_ITEM)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }

            async fn list_lists(
                &self,
                page: $crate::domain::Page,
            ) -> Result<Vec<$crate::domain::TodoList>, ::sqlx::Error> {
                let rows = ::sqlx::query($crate::db::sql::LIST_LISTS)
                    .bind(page.limit())
                    .bind(page.offset())
                    .fetch_all(&self.pool)
                    .await?;
                rows.iter().map(Self::list_from_row).collect()
            }

            async fn get_list(
                &self,
                id: i64,
            ) -> Result<Option<$crate::domain::TodoList>, ::sqlx::Error> {
                let row = ::sqlx::query($crate::db::sql::GET_LIST)
                    .bind(id)
                    .fetch_optional(&self.pool)
                    .await?;
                row.as_ref().map(Self::list_from_row).transpose()
            }

            async fn create_list(
                &self,
                list: &$crate::domain::TodoListIn,
            ) -> Result<$crate::domain::TodoList, ::sqlx::Error> {
                let row = ::sqlx::query($crate::db::sql::INSERT_LIST)
                    .bind(list.name.as_str())
                    .bind(list.description.as_deref())
                    .bind(::chrono::Utc::now())
                    .fetch_one(&self.pool)
                    .await?;
                Self::list_from_row(&row)
            }

            async fn update_list(
                &self,
                id: i64,
                list: &$crate::domain::TodoListIn,
            ) -> Result<Option<$crate::domain::TodoList>, ::sqlx::Error> {
                let row = ::sqlx::query($crate::db::sql::UPDATE_LIST)
                    .bind(id)
                    .bind(list.name.as_str())
                    .bind(list.description.as_deref())
                    .bind(::chrono::Utc::now())
                    .fetch_optional(&self.pool)
                    .await?;
                row.as_ref().map(Self::list_from_row).transpose()
            }

            async fn delete_list(&self, id: i64) -> Result<bool, ::sqlx::Error> {
                let result = ::sqlx::query($crate::db::sql::DELETE_LIST)
                    .bind(id)
                    .execute(&self.pool)
                    .await?;
                Ok(result.rows_affected() > 0)
            }

            async fn ping(&self) -> Result<(), ::sqlx::Error> {
                ::sqlx::query($crate::db::sql::PING)
                    .execute(&self.pool)
                    .await?;
                Ok(())
            }

            async fn close(&self) {
                self.pool.close().await;
            }
        }
    };
}
