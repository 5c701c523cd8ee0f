use sqlx::FromRow;

use crate::errors::{FaceError, FaceResult};

/// 人脸记录
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FaceRecord {
    /// 记录 ID，自增
    pub id: i64,
    /// 用户名，不保证唯一
    pub user_name: String,
    /// 人脸向量，以 JSON 数组文本保存
    pub vector: String,
    /// 创建时间 (UTC)
    pub created_at: String,
}

impl FaceRecord {
    /// 解码保存的人脸向量
    pub fn decode_vector(&self) -> FaceResult<Vec<f64>> {
        serde_json::from_str(&self.vector)
            .map_err(|source| FaceError::Decode { id: self.id, source })
    }
}

/// 将人脸向量编码为保存用的文本
pub fn encode_vector(vector: &[f64]) -> FaceResult<String> {
    serde_json::to_string(vector).map_err(FaceError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(vector: &str) -> FaceRecord {
        FaceRecord {
            id: 7,
            user_name: "alice".to_string(),
            vector: vector.to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn test_encode_then_decode() {
        let vector = vec![0.1, -0.25, 3.0, 1e-9];
        let encoded = encode_vector(&vector).unwrap();
        assert_eq!(record(&encoded).decode_vector().unwrap(), vector);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_vector(&[]).unwrap(), "[]");
        assert!(record("[]").decode_vector().unwrap().is_empty());
    }

    #[test]
    fn test_decode_integers() {
        assert_eq!(record("[1, 2, 3]").decode_vector().unwrap(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_decode_corrupt() {
        for raw in ["", "not json", "[1, \"x\"]", "{\"a\": 1}", "[1, 2"] {
            match record(raw).decode_vector() {
                Err(FaceError::Decode { id, .. }) => assert_eq!(id, 7),
                other => panic!("unexpected result for {raw:?}: {other:?}"),
            }
        }
    }
}
