mod list;
mod register;
pub mod server;
mod verify;

pub use list::*;
pub use register::*;
pub use server::*;
pub use verify::*;

use crate::config::Opts;

pub trait SubCommandExtend {
    fn run(&self, opts: &Opts) -> impl std::future::Future<Output = anyhow::Result<()>> + Send;
}
