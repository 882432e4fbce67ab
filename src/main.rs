use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use easel::export::{self, FileExportConfig};
use easel::input::Script;
use easel::tools::ToolKind;
use easel::{Config, InputState};
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("EASEL_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(version = VERSION, about = "Replay drawing scripts onto a canvas and export the result")]
struct Cli {
    /// JSON script of drawing actions to replay
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Output file (.png, .jpg, .bmp, .gif, .tiff, .ps or .eps); defaults to a timestamped file in the save directory
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,

    /// Config file to use instead of ~/.config/easel/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Tool to start with, overriding drawing.default_tool
    #[arg(long, short = 't', value_enum, value_name = "TOOL")]
    tool: Option<ToolKind>,

    /// Write the default config file and exit
    #[arg(long, action = ArgAction::SetTrue, conflicts_with = "script")]
    init_config: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = Config::create_default_file()?;
        println!("Created default config at {}", path.display());
        return Ok(());
    }

    let Some(script_path) = cli.script else {
        println!("easel: shape-brush drawing canvas");
        println!();
        println!("Usage:");
        println!("  easel --script drawing.json [--output out.png]   Replay and export");
        println!("  easel --init-config                              Write default config");
        println!("  easel --help                                     Show help");
        println!();
        println!("Script actions:");
        println!("  press, motion, release, drag, cancel, select_tool, set_color,");
        println!("  set_brush_size, increase_brush_size, decrease_brush_size,");
        println!("  set_background, undo, redo, clear");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let script = Script::load(&script_path)?;
    let mut state = InputState::from_config(&config);
    if let Some(tool) = cli.tool {
        state.select_tool(tool);
    }
    let applied = state.run_script(&script);
    log::info!("Applied {applied} of {} action(s)", script.len());

    let file_config = FileExportConfig::from_config(&config.export);
    let output = match cli.output {
        Some(path) => path,
        None => file_config.next_path()?,
    };

    let outcome = export::export_canvas(&state.canvas, &output, file_config.postscript_fallback)
        .with_context(|| format!("Failed to export drawing to {}", output.display()))?;

    if outcome.used_fallback {
        println!("Raster export failed, saved PostScript instead");
    }
    println!("Saved {}", outcome.path.display());
    println!("{}", state.status_line());
    println!(
        "History: {}/{} snapshot(s), {applied}/{} action(s) applied",
        state.history.index().map_or(0, |index| index + 1),
        state.history.len(),
        script.len()
    );

    Ok(())
}
