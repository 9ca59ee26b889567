use std::path::PathBuf;
use charming::theme::Theme;
use crate::cli::Cli;

pub const CHART_WIDTH : u32 = 1000;
pub const CHART_HEIGHT: u32 = 600;
pub const CHART_THEME: Theme = Theme::Default;
pub const CHART_BACKGROUND: &str = "#ffffff";

/// Reader count every compared series is taken at.
pub const NUM_READERS: u64 = 3;

pub const WRITE_PATH: &str = "plots/write.png";
pub const READ_PATH : &str = "plots/read.png";

#[derive(Clone, Debug, PartialEq)]
pub struct PlotConfig {
    pub data: PathBuf,
    pub include_zmq: bool,
    pub num_readers: u64,
    pub write_path: PathBuf,
    pub read_path : PathBuf,
    pub width : u32,
    pub height: u32,
}

impl PlotConfig {
    pub fn new(data: impl Into<PathBuf>) -> Self {
        Self {
            data: data.into(),
            include_zmq: false,
            num_readers: NUM_READERS,
            write_path: PathBuf::from(WRITE_PATH),
            read_path : PathBuf::from(READ_PATH),
            width : CHART_WIDTH,
            height: CHART_HEIGHT,
        }
    }
}

impl From<&Cli> for PlotConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            include_zmq: cli.zmq,
            ..Self::new(&cli.data)
        }
    }
}
