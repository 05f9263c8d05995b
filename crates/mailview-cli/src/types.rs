use clap::ValueEnum;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Markdown,
    Ids,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
            OutputFormat::Ids => write!(f, "ids"),
        }
    }
}

impl From<OutputFormat> for mailview_render::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => mailview_render::OutputFormat::Json,
            OutputFormat::Markdown => mailview_render::OutputFormat::Markdown,
            OutputFormat::Ids => mailview_render::OutputFormat::IdsOnly,
        }
    }
}
