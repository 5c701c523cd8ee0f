use anyhow::Result;
use clap::Parser;
use serde_json::json;

use crate::cli::SubCommandExtend;
use crate::config::{FaceVector, MatchOptions, Opts, OutputFormat};
use crate::matcher::{MatchPolicy, MatchResult};
use crate::{FaceDBBuilder, auth};

#[derive(Parser, Debug, Clone)]
pub struct VerifyCommand {
    #[command(flatten)]
    pub matching: MatchOptions,
    /// 用户名
    pub user_name: String,
    /// 待验证的人脸向量，JSON 数组格式
    #[arg(value_name = "VECTOR")]
    pub vector: FaceVector,
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for VerifyCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;
        let policy = MatchPolicy::from(&self.matching);
        let result = auth::verify(&db, &policy, &self.user_name, &self.vector.0).await?;
        print_result(&result, self.output_format)
    }
}

fn print_result(result: &MatchResult, format: OutputFormat) -> Result<()> {
    let message = if result.matched { "Face authorized" } else { "Face not recognized" };
    match format {
        OutputFormat::Json => {
            let value = json!({
                "status": if result.matched { "success" } else { "failure" },
                "message": message,
                "distance": result.distance,
            });
            println!("{}", serde_json::to_string_pretty(&value)?)
        }
        OutputFormat::Table => {
            // 长度不一致时距离为 f64::MAX
            if result.distance == f64::MAX {
                println!("-\t{message}");
            } else {
                println!("{:.4}\t{message}", result.distance);
            }
        }
    }
    Ok(())
}
