//! Statement text shared by the Postgres and SQLite stores.
//!
//! Both engines accept `$N` placeholders and `RETURNING`, so each statement
//! is written once. Camel-case identifiers are quoted to keep their case on
//! Postgres.

pub const LIST_ITEMS: &str = r#"
    SELECT id, name, description, state, "dueDate", "completedDate",
           "createdDate", "updatedDate", "listId"
    FROM items
    ORDER BY id ASC
    LIMIT $1 OFFSET $2
"#;

pub const GET_ITEM: &str = r#"
    SELECT id, name, description, state, "dueDate", "completedDate",
           "createdDate", "updatedDate", "listId"
    FROM items
    WHERE id = $1
"#;

/// `$6` fills both `createdDate` and `updatedDate`.
pub const INSERT_ITEM: &str = r#"
    INSERT INTO items (
        name, description, state, "dueDate", "completedDate",
        "createdDate", "updatedDate", "listId"
    ) VALUES ($1, $2, $3, $4, $5, $6, $6, $7)
    RETURNING id, name, description, state, "dueDate", "completedDate",
              "createdDate", "updatedDate", "listId"
"#;

pub const UPDATE_ITEM: &str = r#"
    UPDATE items
    SET name = $2, description = $3, state = $4, "dueDate" = $5,
        "completedDate" = $6, "updatedDate" = $7, "listId" = $8
    WHERE id = $1
    RETURNING id, name, description, state, "dueDate", "completedDate",
              "createdDate", "updatedDate", "listId"
"#;

pub const DELETE_ITEM: &str = "DELETE FROM items WHERE id = $1";

pub const LIST_LISTS: &str = r#"
    SELECT id, name, description, "createdDate", "updatedDate"
    FROM "todoLists"
    ORDER BY id ASC
    LIMIT $1 OFFSET $2
"#;

pub const GET_LIST: &str = r#"
    SELECT id, name, description, "createdDate", "updatedDate"
    FROM "todoLists"
    WHERE id = $1
"#;

pub const INSERT_LIST: &str = r#"
    INSERT INTO "todoLists" (name, description, "createdDate", "updatedDate")
    VALUES ($1, $2, $3, $3)
    RETURNING id, name, description, "createdDate", "updatedDate"
"#;

pub const UPDATE_LIST: &str = r#"
    UPDATE "todoLists"
    SET name = $2, description = $3, "updatedDate" = $4
    WHERE id = $1
    RETURNING id, name, description, "createdDate", "updatedDate"
"#;

pub const DELETE_LIST: &str = r#"DELETE FROM "todoLists" WHERE id = $1"#;

pub const PING: &str = "SELECT 1";
