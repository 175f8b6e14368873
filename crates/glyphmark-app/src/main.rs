//! Glyphmark command line entry point.

use clap::{Args, Parser, Subcommand};
use env_logger::Env;
use glyphmark_app::{
    AppConfig, GlyphTool, IconError, PaletteChoice, ProcessRunner, SetupError, SetupOptions,
    run_setup,
};
use glyphmark_core::input::IconRequest;
use std::path::PathBuf;
use std::process;

/// glyphmark: Monogram icon generator for Capacitor example apps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate the monogram icon SVG
    Icon {
        #[command(flatten)]
        names: NameArgs,

        /// Path of the SVG file to write
        #[arg(short, long, default_value = "assets/logo.svg")]
        output: PathBuf,

        /// Directory the glyph tool runs in
        #[arg(long, default_value = ".")]
        work_dir: PathBuf,

        #[command(flatten)]
        glyphs: GlyphArgs,
    },
    /// Generate the icon and platform assets for an example app
    Setup {
        #[command(flatten)]
        names: NameArgs,

        /// Example-app directory containing package.json
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,

        /// Skip installing and running @capacitor/assets
        #[arg(long)]
        skip_assets: bool,

        #[command(flatten)]
        glyphs: GlyphArgs,
    },
}

#[derive(Args, Debug)]
struct NameArgs {
    /// Up to three letters drawn on the icon
    short_name: Option<String>,

    /// Full plugin name, e.g. "home indicator"
    full_name: Vec<String>,
}

impl NameArgs {
    fn request(&self) -> Result<IconRequest, IconError> {
        let args: Vec<&str> = self
            .short_name
            .iter()
            .chain(self.full_name.iter())
            .map(String::as_str)
            .collect();
        Ok(IconRequest::parse(&args)?)
    }
}

#[derive(Args, Debug)]
struct GlyphArgs {
    /// Font used for the letters
    #[arg(long, default_value = glyphmark_app::DEFAULT_FONT)]
    font: String,

    /// Catalog palette index (random when omitted)
    #[arg(long)]
    palette: Option<usize>,

    /// Glyph tool program to run instead of the bundled Swift helper
    #[arg(long)]
    glyph_tool: Option<PathBuf>,

    /// Extra argument passed to the glyph tool before the font and text
    #[arg(long, allow_hyphen_values = true, requires = "glyph_tool")]
    glyph_tool_arg: Vec<String>,
}

impl GlyphArgs {
    fn config(self, work_dir: PathBuf) -> AppConfig {
        let glyph_tool = match self.glyph_tool {
            Some(program) => GlyphTool::Command {
                program,
                args: self.glyph_tool_arg,
            },
            None => GlyphTool::Swift,
        };
        AppConfig {
            font: self.font,
            work_dir,
            glyph_tool,
            palette: self
                .palette
                .map_or(PaletteChoice::Random, PaletteChoice::Catalog),
            ..AppConfig::default()
        }
    }
}

const USAGE: &str = "Usage: glyphmark <icon|setup> <SHORT_NAME> <FULL_NAME>...";

fn run(cli: Cli) -> Result<(), SetupError> {
    match cli.command {
        Commands::Icon {
            names,
            output,
            work_dir,
            glyphs,
        } => {
            let request = names.request()?;
            let config = glyphs.config(work_dir);
            let icon = config.icon_generator().generate(&request, &output)?;
            log::info!("Generated icon at {}", icon.output_path.display());
            log::info!("Palette: {}", icon.palette.hex_codes().join(", "));
        }
        Commands::Setup {
            names,
            project_dir,
            skip_assets,
            glyphs,
        } => {
            let request = names.request()?;
            let config = glyphs.config(project_dir.clone());
            let options = SetupOptions {
                project_dir,
                skip_assets,
            };
            let summary = run_setup(
                &request,
                &options,
                &mut config.icon_generator(),
                &mut ProcessRunner,
            )?;
            log::info!("{} is ready ({})", summary.display_name, summary.app_id);
        }
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        log::error!("{}", err);
        if matches!(err, SetupError::Icon(IconError::Validation(_))) {
            eprintln!("{}", USAGE);
        }
        process::exit(1);
    }
}
