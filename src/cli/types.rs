use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::crop::{AxisRange, CropBounds};
use crate::model::{Axis, Coords};

#[derive(Debug, Parser)]
#[command(
    name = "cropper",
    version,
    about = "Crop multi-dimensional microscopy datasets along time, z, channel and position"
)]
pub(super) struct Cli {
    #[command(subcommand)]
    pub(super) command: Commands,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Prints the summary metadata, axis lengths and image count of a dataset directory.
    Info { input: PathBuf },
    /// Lists the axes that hold more than one plane, with their lengths.
    Axes { input: PathBuf },
    /// Writes a new dataset holding only the images inside the given bounds.
    /// Bounds are 1-based and inclusive; `--bound` entries override the recipe.
    Crop {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        #[arg(long)]
        recipe: Option<PathBuf>,
        #[arg(long = "bound", value_name = "AXIS=MIN:MAX", value_parser = parse_bound)]
        bounds: Vec<(Axis, AxisRange)>,
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Saves the plane shown while a bound on AXIS is moved to INDEX.
    Preview {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        axis: String,
        #[arg(long)]
        index: usize,
        /// Coordinate currently on display; unset axes are 0.
        #[arg(long = "at", value_name = "AXIS=INDEX", value_parser = parse_position)]
        at: Vec<(Axis, usize)>,
        #[arg(long)]
        output: PathBuf,
    },
}

fn parse_bound(raw: &str) -> Result<(Axis, AxisRange), String> {
    CropBounds::parse_assignment(raw).map_err(|error| error.to_string())
}

fn parse_position(raw: &str) -> Result<(Axis, usize), String> {
    let (axis, index) = raw
        .split_once('=')
        .ok_or_else(|| format!("position `{raw}` must look like `axis=index`"))?;
    let index = index
        .trim()
        .parse::<usize>()
        .map_err(|_| format!("`{index}` is not a non-negative integer"))?;
    Ok((Axis::new(axis.trim()), index))
}

#[derive(Debug, Serialize)]
pub(super) struct AxisInfo {
    pub(super) axis: String,
    pub(super) length: usize,
    pub(super) croppable: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct DatasetInfo {
    pub(super) name: Option<String>,
    pub(super) images: usize,
    pub(super) axes: Vec<AxisInfo>,
    pub(super) channel_names: Vec<String>,
    pub(super) pixel_type: String,
    pub(super) intended_dimensions: Option<Coords>,
    pub(super) frozen: bool,
}
