use clap::Parser;
use log::warn;
use serde_json::json;

use crate::crop::CropBounds;
use crate::model::{Coords, DataProvider};
use crate::runtime::AppContext;
use crate::workflow::CropRecipe;

use super::types::{AxisInfo, Cli, Commands, DatasetInfo};

pub fn run_cli() -> Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command {
        Commands::Info { input } => {
            let dataset = app
                .io_service()
                .read(&input)
                .map_err(|error| error.to_string())?;
            app.dataset_service()
                .validate(&dataset)
                .map_err(|error| error.to_string())?;
            let summary = dataset.summary_metadata().cloned().unwrap_or_default();
            let info = DatasetInfo {
                name: summary.name,
                images: dataset.num_images(),
                axes: dataset
                    .axes()
                    .into_iter()
                    .map(|axis| {
                        let length = dataset.axis_length(axis.name());
                        AxisInfo {
                            axis: axis.to_string(),
                            length,
                            croppable: length > 1,
                        }
                    })
                    .collect(),
                channel_names: summary.channel_names,
                pixel_type: format!("{:?}", summary.pixel_type),
                intended_dimensions: summary.intended_dimensions,
                frozen: dataset.is_frozen(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&info).map_err(|error| error.to_string())?
            );
        }
        Commands::Axes { input } => {
            let dataset = app
                .io_service()
                .read(&input)
                .map_err(|error| error.to_string())?;
            let axes = app
                .dataset_service()
                .croppable_axes(&dataset)
                .into_iter()
                .map(|(axis, length)| json!({"axis": axis, "min": 1, "max": length}))
                .collect::<Vec<_>>();
            println!(
                "{}",
                serde_json::to_string_pretty(&axes).map_err(|error| error.to_string())?
            );
        }
        Commands::Crop {
            input,
            output,
            recipe,
            bounds,
            report,
        } => {
            let dataset = app
                .io_service()
                .read(&input)
                .map_err(|error| error.to_string())?;
            app.dataset_service()
                .validate(&dataset)
                .map_err(|error| error.to_string())?;
            let mut recipe = match recipe {
                Some(path) => app
                    .crop_service()
                    .load_recipe(&path)
                    .map_err(|error| error.to_string())?,
                None => CropRecipe::default(),
            };
            let overrides = bounds.into_iter().collect::<CropBounds>();
            app.crop_service().merge_bounds(&mut recipe, &overrides);
            if recipe.bounds.is_empty() {
                warn!("no bounds given; the full dataset will be copied");
            }
            let (mut cropped, crop_report) = app
                .crop_service()
                .run(&recipe, &dataset)
                .map_err(|error| error.to_string())?;
            cropped.freeze();
            app.io_service()
                .write(&output, &cropped)
                .map_err(|error| error.to_string())?;
            if let Some(report_path) = report {
                app.crop_service()
                    .save_report(report_path, &crop_report)
                    .map_err(|error| error.to_string())?;
            }
            println!(
                "{}",
                serde_json::to_string_pretty(&crop_report).map_err(|error| error.to_string())?
            );
        }
        Commands::Preview {
            input,
            axis,
            index,
            at,
            output,
        } => {
            let dataset = app
                .io_service()
                .read(&input)
                .map_err(|error| error.to_string())?;
            let displayed = at.into_iter().collect::<Coords>();
            let image = app
                .crop_service()
                .preview(&dataset, displayed, &axis, index)
                .map_err(|error| error.to_string())?;
            app.io_service()
                .save_preview(image, &output)
                .map_err(|error| error.to_string())?;
            println!(
                "{}",
                json!({"status": "ok", "coords": image.coords(), "output": output})
            );
        }
    }

    Ok(())
}
