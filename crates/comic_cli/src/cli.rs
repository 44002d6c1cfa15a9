use anyhow::bail;
use clap::Parser;
use comic_api::Selection;
use comic_term::{ImageProtocol, CAPTION_WIDTH};

use crate::present::PresentOptions;

#[derive(Debug, Parser)]
#[command(name = "xkcd", version, about = "Show xkcd comics inline in the terminal")]
pub struct Cli {
    /// Show a random comic
    #[arg(long)]
    pub random: bool,

    /// Print the title without the comic number
    #[arg(long)]
    pub no_number: bool,

    /// Comic number to show; the latest comic when omitted
    #[arg(value_name = "NUMBER", allow_negative_numbers = true)]
    pub numbers: Vec<String>,
}

impl Cli {
    /// `--random` takes precedence over positional arguments.
    pub fn selection(&self) -> anyhow::Result<Selection> {
        if self.random {
            return Ok(Selection::Random);
        }

        match self.numbers.as_slice() {
            [] => Ok(Selection::Latest),
            [number] => Ok(Selection::Number(number.clone())),
            _ => bail!("too many arguments"),
        }
    }

    pub fn present_options(&self, protocol: ImageProtocol) -> PresentOptions {
        PresentOptions {
            show_number: !self.no_number,
            caption_width: CAPTION_WIDTH,
            protocol,
        }
    }
}

/// First line of a clap error without its `error: ` prefix.
pub fn usage_message(error: &clap::Error) -> String {
    let rendered = error.to_string();
    let first = rendered.lines().next().unwrap_or_default().trim();
    first.strip_prefix("error:").unwrap_or(first).trim().to_owned()
}
