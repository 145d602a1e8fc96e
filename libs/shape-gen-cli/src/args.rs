//! Command-line parsing.

use anyhow::{anyhow, bail, Result};
use config::constants::{
    GeneratorConfig, CYLINDER_SEGMENTS, DEFAULT_OUTPUT_DIR, IMAGE_MODEL_FILE,
    SPHERE_SUBDIVISIONS, TEXT_MODEL_FILE,
};
use std::path::PathBuf;

pub const USAGE: &str = r#"shape-gen

Turn a photo or a short description into a primitive 3D model (OBJ).

USAGE:
  shape-gen text <prompt...> [options]
  shape-gen image <path> [options]
  shape-gen shapes

OPTIONS:
  --out <path>         OBJ output (default: output/text_model.obj or output/image_model.obj)
  --preview <path>     Also write an SVG preview
  --segments <n>       Cylinder segments (default: 32)
  --subdivisions <n>   Sphere subdivision level (default: 2)
  --json               Print a JSON report instead of text
  -v, --verbose        Debug logging
  -h, --help           Show this help
"#;

/// What to generate from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Text(String),
    Image(PathBuf),
}

/// A parsed invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Shapes,
    Generate(GenerateArgs),
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerateArgs {
    pub source: Source,
    pub out: PathBuf,
    pub preview: Option<PathBuf>,
    pub config: GeneratorConfig,
    pub json: bool,
    pub verbose: bool,
}

struct Args {
    args: Vec<String>,
    pos: usize,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { args, pos: 0 }
    }

    fn next(&mut self) -> Option<String> {
        let arg = self.args.get(self.pos)?.clone();
        self.pos += 1;
        Some(arg)
    }

    fn value(&mut self, flag: &str) -> Result<String> {
        self.next().ok_or_else(|| anyhow!("missing value for {flag}"))
    }

    fn number(&mut self, flag: &str) -> Result<u32> {
        let raw = self.value(flag)?;
        raw.parse()
            .map_err(|_| anyhow!("{flag} expects a non-negative integer, got {raw:?}"))
    }
}

/// Parses arguments (without the program name).
pub fn parse(args: Vec<String>) -> Result<Command> {
    let mut args = Args::new(args);

    let Some(command) = args.next() else {
        return Ok(Command::Help);
    };

    let image = match command.as_str() {
        "-h" | "--help" | "help" => return Ok(Command::Help),
        "shapes" => return Ok(Command::Shapes),
        "text" => false,
        "image" => true,
        other => bail!("unknown command {other:?}\n\n{USAGE}"),
    };

    let mut positional = Vec::new();
    let mut out = None;
    let mut preview = None;
    let mut segments = CYLINDER_SEGMENTS;
    let mut subdivisions = SPHERE_SUBDIVISIONS;
    let mut json = false;
    let mut verbose = false;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out = Some(PathBuf::from(args.value("--out")?)),
            "--preview" => preview = Some(PathBuf::from(args.value("--preview")?)),
            "--segments" => segments = args.number("--segments")?,
            "--subdivisions" => subdivisions = args.number("--subdivisions")?,
            "--json" => json = true,
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with("--") => bail!("unknown option {flag}"),
            _ => positional.push(arg),
        }
    }

    let config = GeneratorConfig::new(segments, subdivisions).map_err(|e| anyhow!(e))?;

    let source = if image {
        match positional.as_slice() {
            [path] => Source::Image(PathBuf::from(path)),
            [] => bail!("image: missing <path>"),
            _ => bail!("image: expected exactly one path"),
        }
    } else {
        let prompt = positional.join(" ");
        if prompt.trim().is_empty() {
            bail!("text: the prompt must not be empty");
        }
        Source::Text(prompt)
    };

    let out = out.unwrap_or_else(|| {
        let file = if image { IMAGE_MODEL_FILE } else { TEXT_MODEL_FILE };
        PathBuf::from(DEFAULT_OUTPUT_DIR).join(file)
    });

    Ok(Command::Generate(GenerateArgs {
        source,
        out,
        preview,
        config,
        json,
        verbose,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(line: &str) -> Result<Command> {
        parse(line.split_whitespace().map(String::from).collect())
    }

    fn generate(line: &str) -> GenerateArgs {
        match parse_str(line).unwrap() {
            Command::Generate(args) => args,
            other => panic!("expected Generate, got {:?}", other),
        }
    }

    #[test]
    fn no_arguments_shows_help() {
        assert_eq!(parse(Vec::new()).unwrap(), Command::Help);
        assert_eq!(parse_str("--help").unwrap(), Command::Help);
    }

    #[test]
    fn text_prompt_joins_words() {
        let args = generate("text A small toy car");
        assert_eq!(args.source, Source::Text("A small toy car".into()));
        assert_eq!(args.out, PathBuf::from("output/text_model.obj"));
        assert_eq!(args.config, GeneratorConfig::default());
        assert!(!args.json);
    }

    #[test]
    fn image_uses_image_default_output() {
        let args = generate("image photo.jpg --preview p.svg --json");
        assert_eq!(args.source, Source::Image(PathBuf::from("photo.jpg")));
        assert_eq!(args.out, PathBuf::from("output/image_model.obj"));
        assert_eq!(args.preview, Some(PathBuf::from("p.svg")));
        assert!(args.json);
    }

    #[test]
    fn tessellation_flags() {
        let args = generate("text tube --segments 12 --subdivisions 1 -v --out m.obj");
        assert_eq!(args.config, GeneratorConfig::new(12, 1).unwrap());
        assert_eq!(args.out, PathBuf::from("m.obj"));
        assert!(args.verbose);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(parse_str("text").is_err());
        assert!(parse_str("image").is_err());
        assert!(parse_str("image a.jpg b.jpg").is_err());
        assert!(parse_str("text ball --segments 2").is_err());
        assert!(parse_str("text ball --segments many").is_err());
        assert!(parse_str("text ball --out").is_err());
        assert!(parse_str("text ball --color red").is_err());
        assert!(parse_str("render ball").is_err());
    }

    #[test]
    fn blank_prompt_is_a_usage_error() {
        let args = vec!["text".to_string(), "   ".to_string()];
        let err = parse(args).unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn shapes_command() {
        assert_eq!(parse_str("shapes").unwrap(), Command::Shapes);
    }
}
