use anyhow::Result;
use clap::Parser;

use crate::cli::SubCommandExtend;
use crate::config::{FaceVector, Opts};
use crate::{FaceDBBuilder, auth};

#[derive(Parser, Debug, Clone)]
pub struct RegisterCommand {
    /// 用户名
    pub user_name: String,
    /// 人脸向量，JSON 数组格式
    #[arg(value_name = "VECTOR")]
    pub vector: FaceVector,
}

impl SubCommandExtend for RegisterCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;
        auth::register(&db, &self.user_name, &self.vector.0).await?;
        println!("User registered");
        Ok(())
    }
}
