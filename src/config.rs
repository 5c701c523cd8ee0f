use std::convert::Infallible;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::LazyLock;

use clap::{Parser, Subcommand, ValueEnum};
use directories::ProjectDirs;

use crate::cli::*;
use crate::matcher::{DEFAULT_THRESHOLD, MatchPolicy};

static CONF_DIR: LazyLock<ConfDir> = LazyLock::new(|| {
    let proj_dirs = ProjectDirs::from("", "faceauth", "faceauth").expect("failed to get project dir");
    ConfDir { path: proj_dirs.config_dir().to_path_buf() }
});

fn default_config_dir() -> &'static str {
    CONF_DIR.path().to_str().unwrap()
}

#[derive(Parser, Debug, Clone)]
pub struct MatchOptions {
    /// 判定为同一张人脸的欧氏距离阈值，距离严格小于该值才算匹配
    #[arg(long, value_name = "DISTANCE", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,
}

impl From<&MatchOptions> for MatchPolicy {
    fn from(opts: &MatchOptions) -> Self {
        MatchPolicy::new(opts.threshold)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "faceauth", version)]
pub struct Opts {
    #[command(subcommand)]
    pub subcmd: SubCommand,
    /// faceauth 配置文件目录
    #[arg(short, long, default_value = default_config_dir())]
    pub conf_dir: ConfDir,
}

#[derive(Subcommand, Debug, Clone)]
pub enum SubCommand {
    /// 启动 HTTP 认证服务
    Server(ServerCommand),
    /// 注册用户的人脸向量
    Register(RegisterCommand),
    /// 验证用户的人脸向量
    Verify(VerifyCommand),
    /// 列出已注册的人脸记录
    List(ListCommand),
}

#[derive(Debug, Clone)]
pub struct ConfDir {
    path: PathBuf,
}

impl ConfDir {
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    /// 返回数据库文件的路径
    pub fn database(&self) -> PathBuf {
        self.path.join("faceauth.db")
    }
}

impl FromStr for ConfDir {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { path: PathBuf::from(s) })
    }
}

/// 命令行传入的人脸向量，格式为 JSON 数组，例如 `[0.1,0.2,0.3]`
#[derive(Debug, Clone, PartialEq)]
pub struct FaceVector(pub Vec<f64>);

impl FromStr for FaceVector {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s).map(Self).map_err(|e| format!("无效的人脸向量: {e}"))
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Table,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_face_vector() {
        assert_eq!("[0.1, 2, -3.5]".parse::<FaceVector>().unwrap().0, vec![0.1, 2.0, -3.5]);
        assert!("[]".parse::<FaceVector>().unwrap().0.is_empty());
        assert!("0.1,0.2".parse::<FaceVector>().is_err());
        assert!("[\"a\"]".parse::<FaceVector>().is_err());
    }

    #[test]
    fn test_parse_opts() {
        let opts = Opts::try_parse_from([
            "faceauth",
            "-c",
            "/tmp/faceauth",
            "verify",
            "--threshold",
            "0.4",
            "alice",
            "[0.1,0.2]",
        ])
        .unwrap();
        assert_eq!(opts.conf_dir.database(), Path::new("/tmp/faceauth/faceauth.db"));
        match opts.subcmd {
            SubCommand::Verify(cmd) => {
                assert_eq!(cmd.matching.threshold, 0.4);
                assert_eq!(cmd.user_name, "alice");
                assert_eq!(cmd.vector.0, vec![0.1, 0.2]);
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }

    #[test]
    fn test_default_threshold() {
        let opts = Opts::try_parse_from(["faceauth", "server"]).unwrap();
        match opts.subcmd {
            SubCommand::Server(cmd) => {
                assert_eq!(MatchPolicy::from(&cmd.matching), MatchPolicy::default());
                assert_eq!(cmd.addr, "127.0.0.1:8000");
                assert!(cmd.allow_origin.is_empty());
            }
            other => panic!("unexpected subcommand: {other:?}"),
        }
    }
}
