use clap::ValueEnum;
use std::fmt;

use clipstash_engine::ResetMode;
use clipstash_types::ContentType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ContentTypeArg {
    Text,
    Image,
    Files,
}

impl From<ContentTypeArg> for ContentType {
    fn from(arg: ContentTypeArg) -> Self {
        match arg {
            ContentTypeArg::Text => ContentType::Text,
            ContentTypeArg::Image => ContentType::Image,
            ContentTypeArg::Files => ContentType::Files,
        }
    }
}

impl fmt::Display for ContentTypeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentTypeArg::Text => write!(f, "text"),
            ContentTypeArg::Image => write!(f, "image"),
            ContentTypeArg::Files => write!(f, "files"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ResetModeArg {
    Auto,
    On,
    Off,
}

impl From<ResetModeArg> for ResetMode {
    fn from(arg: ResetModeArg) -> Self {
        match arg {
            ResetModeArg::Auto => ResetMode::Auto,
            ResetModeArg::On => ResetMode::On,
            ResetModeArg::Off => ResetMode::Off,
        }
    }
}

impl fmt::Display for ResetModeArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResetModeArg::Auto => write!(f, "auto"),
            ResetModeArg::On => write!(f, "on"),
            ResetModeArg::Off => write!(f, "off"),
        }
    }
}
