//! Example-app setup: asset tooling, icon generation and asset export.

use crate::glyph_source::GlyphSource;
use crate::icon::{GeneratedIcon, IconError, IconGenerator};
use glyphmark_core::input::IconRequest;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Dev dependency that turns `assets/logo.svg` into platform icons.
pub const ASSETS_PACKAGE: &str = "@capacitor/assets";

/// Arguments for `npx @capacitor/assets generate`.
const ASSETS_GENERATE_ARGS: [&str; 9] = [
    "generate",
    "--iconBackgroundColor",
    "#eeeeee",
    "--iconBackgroundColorDark",
    "#222222",
    "--splashBackgroundColor",
    "#eeeeee",
    "--splashBackgroundColorDark",
    "#111111",
];

/// Setup errors.
#[derive(Debug, Error)]
pub enum SetupError {
    #[error(transparent)]
    Icon(#[from] IconError),
    #[error("Command failed ({command}) with exit code {code}")]
    CommandFailed { command: String, code: i32 },
    #[error("IO error: {0}")]
    Io(String),
    #[error("Invalid package.json: {0}")]
    PackageJson(String),
}

/// Runs external commands on behalf of the pipeline.
pub trait CommandRunner {
    fn run(&mut self, program: &str, args: &[&str], cwd: &Path) -> Result<(), SetupError>;
}

/// Runs commands as child processes sharing this process's stdio.
#[derive(Debug, Default)]
pub struct ProcessRunner;

impl CommandRunner for ProcessRunner {
    fn run(&mut self, program: &str, args: &[&str], cwd: &Path) -> Result<(), SetupError> {
        let command = format!("{} {}", program, args.join(" "));
        log::info!("Running command: {}", command);
        let status = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .status()
            .map_err(|e| SetupError::Io(format!("Failed to execute {}: {}", program, e)))?;
        if !status.success() {
            return Err(SetupError::CommandFailed {
                command,
                code: status.code().unwrap_or(-1),
            });
        }
        Ok(())
    }
}

/// Options for [`run_setup`].
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Example-app directory containing `package.json`.
    pub project_dir: PathBuf,
    /// Skip installing and running the asset tooling.
    pub skip_assets: bool,
}

/// What setup produced.
#[derive(Debug, Clone)]
pub struct SetupSummary {
    pub app_id: String,
    pub display_name: String,
    pub icon: GeneratedIcon,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageJson {
    #[serde(default)]
    dev_dependencies: BTreeMap<String, serde_json::Value>,
}

fn read_package_json(path: &Path) -> Result<PackageJson, SetupError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| SetupError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| SetupError::PackageJson(format!("{}: {}", path.display(), e)))
}

/// Install the asset tooling as a dev dependency unless already present.
pub fn ensure_assets_package<R: CommandRunner>(project_dir: &Path, runner: &mut R) -> Result<(), SetupError> {
    let package_json = project_dir.join("package.json");
    log::info!("Checking dev dependency '{}' in {}", ASSETS_PACKAGE, package_json.display());

    if read_package_json(&package_json)?.dev_dependencies.contains_key(ASSETS_PACKAGE) {
        log::info!("'{}' already present", ASSETS_PACKAGE);
        return Ok(());
    }

    log::info!("'{}' not found. Installing as dev dependency", ASSETS_PACKAGE);
    runner
        .run("npm", &["install", "--save-dev", ASSETS_PACKAGE], project_dir)
        .inspect_err(|_| log::error!("Failed to install {}", ASSETS_PACKAGE))?;

    if read_package_json(&package_json)?.dev_dependencies.contains_key(ASSETS_PACKAGE) {
        log::info!("Verified '{}' installation", ASSETS_PACKAGE);
    } else {
        log::warn!("Unable to verify '{}' installation from package.json", ASSETS_PACKAGE);
    }
    Ok(())
}

/// Export platform icons and splash screens from `assets/`.
pub fn generate_platform_assets<R: CommandRunner>(project_dir: &Path, runner: &mut R) -> Result<(), SetupError> {
    log::info!("Running {} generate", ASSETS_PACKAGE);
    let mut args = vec![ASSETS_PACKAGE];
    args.extend(ASSETS_GENERATE_ARGS);
    runner
        .run("npx", &args, project_dir)
        .inspect_err(|_| log::error!("Failed to run {} generate", ASSETS_PACKAGE))
}

/// Run the example-app setup for `request`.
pub fn run_setup<S: GlyphSource, R: CommandRunner>(
    request: &IconRequest,
    options: &SetupOptions,
    generator: &mut IconGenerator<S>,
    runner: &mut R,
) -> Result<SetupSummary, SetupError> {
    log::info!("Short name: {}", request.short_name);
    log::info!("Full name: {}", request.full_name);

    let app_id = request.app_id();
    let display_name = request.display_name();
    log::info!("App identity: {} ({})", display_name, app_id);

    if !options.skip_assets {
        ensure_assets_package(&options.project_dir, runner)?;
    }

    let svg_path = options.project_dir.join("assets").join("logo.svg");
    let icon = generator.generate(request, &svg_path)?;
    log::info!(
        "Generated icon at {} using palette {}",
        icon.output_path.display(),
        icon.palette.hex_codes().join(", ")
    );

    if !options.skip_assets {
        generate_platform_assets(&options.project_dir, runner)?;
    }

    log::info!("Setup completed successfully");
    Ok(SetupSummary {
        app_id,
        display_name,
        icon,
    })
}
