use async_trait::async_trait;
use log::debug;

use crate::config::ConfDir;
use crate::db::{self, Database, FaceRecord, crud};
use crate::errors::FaceResult;
use crate::store::FaceStore;

pub struct FaceDBBuilder {
    conf_dir: ConfDir,
    wal: bool,
}

impl FaceDBBuilder {
    pub fn new(conf_dir: ConfDir) -> Self {
        Self { conf_dir, wal: true }
    }

    /// 是否使用 WAL 模式
    pub fn wal(mut self, wal: bool) -> Self {
        self.wal = wal;
        self
    }

    /// 打开数据库，不存在时自动创建并完成迁移
    pub async fn open(self) -> FaceResult<FaceDB> {
        std::fs::create_dir_all(self.conf_dir.path())?;
        let db = db::init_db(self.conf_dir.database(), self.wal).await?;
        Ok(FaceDB { db })
    }
}

/// 基于 SQLite 的人脸数据库
pub struct FaceDB {
    db: Database,
}

impl FaceDB {
    /// 已保存的记录数量
    pub async fn count(&self) -> FaceResult<i64> {
        Ok(crud::count_faces(&self.db).await?)
    }
}

#[async_trait]
impl FaceStore for FaceDB {
    async fn insert(&self, user_name: &str, vector: &str) -> FaceResult<i64> {
        let id = crud::add_face(&self.db, user_name, vector).await?;
        debug!("添加人脸记录 {id}: {user_name}");
        Ok(id)
    }

    async fn find_by_user(&self, user_name: &str) -> FaceResult<Option<FaceRecord>> {
        Ok(crud::find_face_by_user(&self.db, user_name).await?)
    }

    async fn list(&self) -> FaceResult<Vec<FaceRecord>> {
        Ok(crud::get_faces(&self.db).await?)
    }
}
