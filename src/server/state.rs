use std::sync::Arc;

use crate::matcher::MatchPolicy;
use crate::store::FaceStore;

/// 应用状态
pub struct AppState {
    /// 人脸存储
    pub store: Arc<dyn FaceStore>,
    /// 匹配策略
    pub policy: MatchPolicy,
}

impl AppState {
    /// 创建新的应用状态
    pub fn new(store: Arc<dyn FaceStore>, policy: MatchPolicy) -> Arc<Self> {
        Arc::new(AppState { store, policy })
    }
}
