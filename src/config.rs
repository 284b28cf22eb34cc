use crate::loader::DEFAULT_SHEET;
use clap::Args;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Where the study sheet comes from and how the tree root is labelled.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Spreadsheet holding branch, topic, subtopic and description columns
    #[arg(long, default_value = "data.xlsx")]
    pub data: PathBuf,

    /// Worksheet to read (ignored for CSV)
    #[arg(long, default_value = DEFAULT_SHEET)]
    pub sheet: String,

    /// Label of the root toggle
    #[arg(long, default_value = "Physics")]
    pub title: String,
}

impl Default for DataArgs {
    fn default() -> Self {
        DataArgs {
            data: PathBuf::from("data.xlsx"),
            sheet: DEFAULT_SHEET.to_string(),
            title: "Physics".to_string(),
        }
    }
}

/// Options of the web server.
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1:3000")]
    pub addr: SocketAddr,

    /// Directory served under /static
    #[arg(long, default_value = "static")]
    pub assets: PathBuf,
}

impl Default for ServeArgs {
    fn default() -> Self {
        ServeArgs {
            data: DataArgs::default(),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            assets: PathBuf::from("static"),
        }
    }
}
