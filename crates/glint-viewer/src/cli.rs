use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};

/// Parsed viewer options.
///
/// Screen dimensions and texture paths are external configuration, not
/// compile-time constants.
#[derive(Debug, Clone)]
pub struct Options {
    pub width: u32,
    pub height: u32,
    pub title: String,
    pub texture_paths: Vec<PathBuf>,
    pub capture_cursor: bool,
    pub pulse: bool,
    pub log_filter: Option<String>,
}

pub fn command() -> Command {
    Command::new("glint-viewer")
        .about("Textured-quad viewer with a first-person camera")
        .version("0.1")
        .arg(
            Arg::new("width")
                .long("width")
                .value_name("PIXELS")
                .value_parser(clap::value_parser!(u32).range(1..))
                .default_value("800")
                .help("Window width in logical pixels"),
        )
        .arg(
            Arg::new("height")
                .long("height")
                .value_name("PIXELS")
                .value_parser(clap::value_parser!(u32).range(1..))
                .default_value("600")
                .help("Window height in logical pixels"),
        )
        .arg(
            Arg::new("title")
                .long("title")
                .value_name("TEXT")
                .default_value("glint viewer")
                .help("Window title"),
        )
        .arg(
            Arg::new("texture")
                .short('t')
                .long("texture")
                .value_name("FILE")
                .action(ArgAction::Append)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Texture image; pass twice for a two-texture blend, omit for an untextured quad"),
        )
        .arg(
            Arg::new("capture-cursor")
                .long("capture-cursor")
                .action(ArgAction::SetTrue)
                .help("Grab the cursor for mouse-look"),
        )
        .arg(
            Arg::new("no-pulse")
                .long("no-pulse")
                .action(ArgAction::SetTrue)
                .help("Disable the time-varying tint pulse"),
        )
        .arg(
            Arg::new("log")
                .long("log")
                .value_name("FILTER")
                .help("Log filter, e.g. 'info' or 'glint_engine=debug' (overrides RUST_LOG)"),
        )
}

pub fn parse(matches: &ArgMatches) -> Result<Options> {
    let texture_paths: Vec<PathBuf> = matches
        .get_many::<PathBuf>("texture")
        .map(|paths| paths.cloned().collect())
        .unwrap_or_default();

    if texture_paths.len() > 2 {
        bail!(
            "at most two textures are supported, got {}",
            texture_paths.len()
        );
    }

    Ok(Options {
        width: *matches.get_one::<u32>("width").unwrap_or(&800),
        height: *matches.get_one::<u32>("height").unwrap_or(&600),
        title: matches
            .get_one::<String>("title")
            .cloned()
            .unwrap_or_else(|| "glint viewer".to_string()),
        texture_paths,
        capture_cursor: matches.get_flag("capture-cursor"),
        pulse: !matches.get_flag("no-pulse"),
        log_filter: matches.get_one::<String>("log").cloned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_args(args: &[&str]) -> Result<Options> {
        let matches = command().try_get_matches_from(args).expect("clap parse");
        parse(&matches)
    }

    #[test]
    fn defaults() {
        let opts = parse_args(&["glint-viewer"]).unwrap();
        assert_eq!(opts.width, 800);
        assert_eq!(opts.height, 600);
        assert!(opts.texture_paths.is_empty());
        assert!(opts.pulse);
        assert!(!opts.capture_cursor);
    }

    #[test]
    fn two_textures_accepted() {
        let opts = parse_args(&["glint-viewer", "-t", "a.png", "-t", "b.png"]).unwrap();
        assert_eq!(opts.texture_paths.len(), 2);
    }

    #[test]
    fn three_textures_rejected() {
        let err = parse_args(&["glint-viewer", "-t", "a.png", "-t", "b.png", "-t", "c.png"]);
        assert!(err.is_err());
    }

    #[test]
    fn flags_and_dimensions() {
        let opts = parse_args(&[
            "glint-viewer",
            "--width",
            "1280",
            "--height",
            "720",
            "--no-pulse",
            "--capture-cursor",
        ])
        .unwrap();
        assert_eq!((opts.width, opts.height), (1280, 720));
        assert!(!opts.pulse);
        assert!(opts.capture_cursor);
    }
}
