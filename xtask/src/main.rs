use std::{
    error::Error,
    fs,
    io::{self, Write},
    path::PathBuf,
};

use assets::{AssetConfig, AssetSet, DirBundle, FontWeight};
use bundle::manifest::write_manifest;
use clap::{Parser, Subcommand};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = Xtask::parse().run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

#[derive(Debug, Parser)]
#[command(name = "xtask", about = "Asset bundle utilities", version)]
struct Xtask {
    #[command(subcommand)]
    command: XtaskCommand,
}

#[derive(Debug, Subcommand)]
enum XtaskCommand {
    /// Load every font, image and icon in a directory and report what was
    /// found. Fails on the first malformed asset.
    Check {
        /// Asset directory to scan.
        dir: PathBuf,
        /// JSON loader configuration.
        #[arg(long)]
        config: Option<PathBuf>,
        /// Overrides the configured default font weight.
        #[arg(long, value_parser = parse_weight)]
        default_weight: Option<FontWeight>,
    },
    /// Generate the `AssetSpec` table that embeds a directory.
    Manifest {
        /// Asset directory to embed.
        dir: PathBuf,
        /// Name of the generated constant.
        #[arg(long, default_value = "ASSETS")]
        name: String,
        /// Only embed files with these extensions.
        #[arg(long = "ext")]
        extensions: Vec<String>,
        /// Write to this file instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

impl Xtask {
    fn run(self) -> Result<(), Box<dyn Error>> {
        match self.command {
            XtaskCommand::Check {
                dir,
                config,
                default_weight,
            } => check(dir, config, default_weight),
            XtaskCommand::Manifest {
                dir,
                name,
                extensions,
                out,
            } => manifest(dir, &name, &extensions, out),
        }
    }
}

fn check(
    dir: PathBuf,
    config: Option<PathBuf>,
    default_weight: Option<FontWeight>,
) -> Result<(), Box<dyn Error>> {
    if !dir.is_dir() {
        return Err(format!("asset directory '{}' not found", dir.display()).into());
    }

    let mut config = match config {
        Some(path) => AssetConfig::from_json(&fs::read(path)?)?,
        None => AssetConfig::default(),
    };
    if default_weight.is_some() {
        config.fonts.default_weight = default_weight;
    }

    let set = AssetSet::load(&DirBundle::new(dir), &config)?;

    println!("fonts ({}):", set.fonts.len());
    for (index, face) in set.fonts.iter().enumerate() {
        println!("  {index:>3}  {}", face.descriptor());
    }

    let mut images: Vec<_> = set.images.iter().collect();
    images.sort_by(|a, b| a.0.cmp(b.0));
    println!("images ({}):", images.len());
    for (name, image) in images {
        println!("  {name} {}x{}", image.width(), image.height());
    }

    let mut vectors: Vec<_> = set.vectors.names().collect();
    vectors.sort_unstable();
    println!("vectors ({}):", vectors.len());
    for name in vectors {
        println!("  {name}");
    }

    Ok(())
}

fn manifest(
    dir: PathBuf,
    name: &str,
    extensions: &[String],
    out: Option<PathBuf>,
) -> Result<(), Box<dyn Error>> {
    let root = fs::canonicalize(&dir)
        .map_err(|err| format!("asset directory '{}': {err}", dir.display()))?;
    let extensions: Vec<&str> = extensions.iter().map(String::as_str).collect();

    let mut buffer = Vec::new();
    write_manifest(&mut buffer, &root, name, &extensions)?;

    match out {
        Some(path) => {
            fs::write(&path, buffer)?;
            log::info!("wrote {}", path.display());
        }
        None => io::stdout().write_all(&buffer)?,
    }
    Ok(())
}

fn parse_weight(token: &str) -> Result<FontWeight, String> {
    FontWeight::from_token(token).map_err(|err| err.to_string())
}
