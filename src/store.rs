use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::db::FaceRecord;
use crate::errors::FaceResult;

/// 人脸记录的存储接口
///
/// 存储层只负责保存和读取编码后的向量文本，编解码由调用方完成
#[async_trait]
pub trait FaceStore: Send + Sync {
    /// 插入一条新记录，返回记录 ID
    async fn insert(&self, user_name: &str, vector: &str) -> FaceResult<i64>;

    /// 查找用户名对应的记录，存在重复时返回最早注册的那条
    async fn find_by_user(&self, user_name: &str) -> FaceResult<Option<FaceRecord>>;

    /// 列出所有记录，按 ID 升序
    async fn list(&self) -> FaceResult<Vec<FaceRecord>>;
}

/// 内存存储，主要用于测试
#[derive(Debug, Default)]
pub struct MemoryFaceStore {
    records: RwLock<Vec<FaceRecord>>,
}

impl MemoryFaceStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl FaceStore for MemoryFaceStore {
    async fn insert(&self, user_name: &str, vector: &str) -> FaceResult<i64> {
        let mut records = self.records.write().await;
        let id = records.len() as i64 + 1;
        records.push(FaceRecord {
            id,
            user_name: user_name.to_string(),
            vector: vector.to_string(),
            created_at: String::new(),
        });
        Ok(id)
    }

    async fn find_by_user(&self, user_name: &str) -> FaceResult<Option<FaceRecord>> {
        let records = self.records.read().await;
        Ok(records.iter().find(|record| record.user_name == user_name).cloned())
    }

    async fn list(&self) -> FaceResult<Vec<FaceRecord>> {
        Ok(self.records.read().await.clone())
    }
}
