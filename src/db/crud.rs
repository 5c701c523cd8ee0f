use sqlx::{Executor, Result, Sqlite, SqlitePool};

use super::FaceRecord;

/// 添加人脸记录，返回新记录的 ID
pub async fn add_face<'c, E>(executor: E, user_name: &str, vector: &str) -> Result<i64>
where
    E: Executor<'c, Database = Sqlite>,
{
    let id = sqlx::query_scalar(
        r#"
        INSERT INTO face (user_name, vector)
        VALUES (?, ?)
        RETURNING id
        "#,
    )
    .bind(user_name)
    .bind(vector)
    .fetch_one(executor)
    .await?;

    Ok(id)
}

/// 根据用户名查找人脸记录
///
/// NOTE: 用户名没有唯一约束，存在重复时返回最早注册的那条
pub async fn find_face_by_user(
    executor: &SqlitePool,
    user_name: &str,
) -> Result<Option<FaceRecord>> {
    sqlx::query_as(
        r#"
        SELECT id, user_name, vector, created_at FROM face
        WHERE user_name = ? ORDER BY id ASC LIMIT 1
        "#,
    )
    .bind(user_name)
    .fetch_optional(executor)
    .await
}

/// 获取所有人脸记录
pub async fn get_faces(executor: &SqlitePool) -> Result<Vec<FaceRecord>> {
    sqlx::query_as(
        r#"
        SELECT id, user_name, vector, created_at FROM face ORDER BY id ASC
        "#,
    )
    .fetch_all(executor)
    .await
}

/// 查询人脸记录数量
pub async fn count_faces(executor: &SqlitePool) -> Result<i64> {
    sqlx::query_scalar(r#"SELECT COUNT(*) FROM face"#).fetch_one(executor).await
}
