use log::{debug, info, warn};

use crate::db::encode_vector;
use crate::errors::{FaceError, FaceResult};
use crate::matcher::{MatchPolicy, MatchResult};
use crate::metrics::{self, Outcome};
use crate::store::FaceStore;

/// 注册人脸
///
/// 不检查用户名是否已存在，重复注册会产生新的记录
///
/// # Arguments
///
/// * `store` - 人脸存储
/// * `user_name` - 用户名
/// * `vector` - 人脸向量
pub async fn register(store: &dyn FaceStore, user_name: &str, vector: &[f64]) -> FaceResult<i64> {
    let result = async {
        let raw = encode_vector(vector)?;
        store.insert(user_name, &raw).await
    }
    .await;

    match &result {
        Ok(id) => {
            info!("注册用户 {user_name:?}，记录 ID {id}，向量维数 {}", vector.len());
            metrics::inc_register_count(Outcome::Success);
        }
        Err(e) => {
            warn!("注册用户 {user_name:?} 失败: {e}");
            metrics::inc_register_count(Outcome::Error);
        }
    }
    result
}

/// 验证人脸
///
/// 比对失败不是错误，通过 [`MatchResult::matched`] 区分
///
/// # Arguments
///
/// * `store` - 人脸存储
/// * `policy` - 匹配策略
/// * `user_name` - 用户名
/// * `vector` - 待验证的人脸向量
pub async fn verify(
    store: &dyn FaceStore,
    policy: &MatchPolicy,
    user_name: &str,
    vector: &[f64],
) -> FaceResult<MatchResult> {
    let result = async {
        let record = store
            .find_by_user(user_name)
            .await?
            .ok_or_else(|| FaceError::NotFound(user_name.to_string()))?;
        let stored = record.decode_vector()?;
        if stored.len() != vector.len() {
            debug!("向量维数不一致: 输入 {}，记录 {}", vector.len(), stored.len());
        }
        Ok::<_, FaceError>(policy.evaluate(vector, &stored))
    }
    .await;

    match &result {
        Ok(result) => {
            info!("验证用户 {user_name:?}: 距离 {:.4}，匹配 {}", result.distance, result.matched);
            metrics::observe_verify_distance(result.distance);
            let outcome = if result.matched { Outcome::Success } else { Outcome::Failure };
            metrics::inc_verify_count(outcome);
        }
        Err(FaceError::NotFound(_)) => {
            info!("验证用户 {user_name:?}: 用户不存在");
            metrics::inc_verify_count(Outcome::NotFound);
        }
        Err(e) => {
            warn!("验证用户 {user_name:?} 失败: {e}");
            metrics::inc_verify_count(Outcome::Error);
        }
    }
    result
}
