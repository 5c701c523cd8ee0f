use anyhow::Result;
use clap::Parser;
use serde_json::json;

use crate::FaceDBBuilder;
use crate::cli::SubCommandExtend;
use crate::config::{Opts, OutputFormat};
use crate::store::FaceStore;

#[derive(Parser, Debug, Clone)]
pub struct ListCommand {
    /// 输出格式
    #[arg(long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Table)]
    pub output_format: OutputFormat,
}

impl SubCommandExtend for ListCommand {
    async fn run(&self, opts: &Opts) -> Result<()> {
        let db = FaceDBBuilder::new(opts.conf_dir.clone()).open().await?;
        let records = db.list().await?;

        match self.output_format {
            OutputFormat::Json => {
                let value = records
                    .iter()
                    .map(|record| {
                        json!({
                            "id": record.id,
                            "user_name": record.user_name,
                            "dimension": record.decode_vector().ok().map(|v| v.len()),
                            "created_at": record.created_at,
                        })
                    })
                    .collect::<Vec<_>>();
                println!("{}", serde_json::to_string_pretty(&value)?);
            }
            OutputFormat::Table => {
                for record in &records {
                    // 无法解码的记录维数显示为 ?
                    let dimension = match record.decode_vector() {
                        Ok(v) => v.len().to_string(),
                        Err(_) => "?".to_string(),
                    };
                    println!(
                        "{}\t{}\t{}\t{}",
                        record.id, record.user_name, dimension, record.created_at
                    );
                }
            }
        }
        Ok(())
    }
}
