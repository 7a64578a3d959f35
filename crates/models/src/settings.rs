//! `settings` table: one opaque JSON document per server-generated key.
//!
//! The free functions here are the only code that builds queries against the
//! table. Each is a single statement except [`list_page`], which reads the
//! page and the row count inside one read-only snapshot.

use sea_orm::{
    entity::prelude::*, sea_query::Expr, AccessMode, ActiveModelTrait, DatabaseConnection, IsolationLevel,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Set, TransactionTrait,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// PostgreSQL `OFFSET` and `LIMIT` are signed 64-bit values.
pub const MAX_OFFSET: u64 = i64::MAX as u64;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "settings")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub data: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Documents may be any JSON value except `null`. `jsonb` cannot hold the
/// NUL character, so strings and keys containing `\u0000` are refused too.
pub fn validate_data(data: &Json) -> Result<(), ModelError> {
    if data.is_null() {
        return Err(ModelError::Validation("data must not be null".into()));
    }
    if contains_nul(data) {
        return Err(ModelError::Validation("data must not contain \\u0000".into()));
    }
    Ok(())
}

fn contains_nul(value: &Json) -> bool {
    match value {
        Json::String(s) => s.contains('\0'),
        Json::Array(items) => items.iter().any(contains_nul),
        Json::Object(map) => map.iter().any(|(k, v)| k.contains('\0') || contains_nul(v)),
        _ => false,
    }
}

/// Fresh identifier for a new row.
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

pub async fn create<C: ConnectionTrait>(db: &C, data: Json) -> Result<Model, ModelError> {
    validate_data(&data)?;
    let am = ActiveModel {
        id: Set(generate_id()),
        data: Set(data),
    };
    Ok(am.insert(db).await?)
}

pub async fn find<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find_by_id(id.to_owned()).one(db).await?)
}

/// Rows `skip..skip + limit` in primary-key order, plus the table's total row count.
pub async fn list_page(db: &DatabaseConnection, skip: u64, limit: u64) -> Result<(Vec<Model>, u64), ModelError> {
    let txn = db
        .begin_with_config(Some(IsolationLevel::RepeatableRead), Some(AccessMode::ReadOnly))
        .await?;
    let items = Entity::find()
        .order_by_asc(Column::Id)
        .offset(skip.min(MAX_OFFSET))
        .limit(limit.min(MAX_OFFSET))
        .all(&txn)
        .await?;
    let total = Entity::find().count(&txn).await?;
    txn.commit().await?;
    Ok((items, total))
}

/// Overwrite the whole document of an existing row. `None` when no row has `id`.
pub async fn replace_data<C: ConnectionTrait>(db: &C, id: &str, data: Json) -> Result<Option<Model>, ModelError> {
    validate_data(&data)?;
    let mut rows = Entity::update_many()
        .col_expr(Column::Data, Expr::value(data))
        .filter(Column::Id.eq(id))
        .exec_with_returning(db)
        .await?;
    Ok(rows.pop())
}

/// Returns whether a row was removed.
pub async fn delete<C: ConnectionTrait>(db: &C, id: &str) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(id.to_owned()).exec(db).await?;
    Ok(res.rows_affected > 0)
}
