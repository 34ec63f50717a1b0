use std::fs;

use ndarray::Array2;
use tempfile::tempdir;

use crate::crop::{AxisRange, CropBounds};
use crate::model::{Axis, Coords, DataProvider, Datastore, Image, SummaryMetadata};

use super::{CropRecipe, CropReport, load_recipe, run_recipe, save_report};

fn test_store() -> Datastore {
    let mut store = Datastore::new();
    store
        .set_summary_metadata(
            SummaryMetadata::default().with_channel_names(vec!["DAPI".into(), "GFP".into()]),
        )
        .expect("summary");
    for time in 0..4 {
        for channel in 0..2 {
            store
                .put_image(Image::new(
                    Array2::zeros((2, 2)),
                    Coords::from_pairs([(Axis::TIME, time), (Axis::CHANNEL, channel)]),
                ))
                .expect("insert");
        }
    }
    store.freeze();
    store
}

#[test]
fn yaml_recipe_loads_bounds() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("recipe.yaml");
    fs::write(
        &path,
        "name: late\nbounds:\n  time: { min: 3, max: 4 }\n  channel: { min: 2, max: 2 }\n",
    )
    .expect("write recipe");
    let recipe = load_recipe(&path).expect("load recipe");
    assert_eq!(recipe.name.as_deref(), Some("late"));
    assert_eq!(recipe.bounds.get(Axis::TIME), Some(AxisRange::new(3, 4)));
    assert_eq!(recipe.bounds.get(Axis::CHANNEL), Some(AxisRange::new(2, 2)));
}

#[test]
fn json_recipe_with_inverted_range_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("recipe.json");
    fs::write(&path, r#"{"bounds": {"time": {"min": 4, "max": 2}}}"#).expect("write recipe");
    let error = load_recipe(&path).expect_err("inverted range");
    assert!(error.to_string().contains("min <= max"));
}

#[test]
fn recipe_run_reports_crop() {
    let recipe = CropRecipe {
        name: Some("late".into()),
        bounds: CropBounds::new()
            .with(Axis::TIME, 3, 4)
            .with(Axis::CHANNEL, 2, 2),
    };
    let (cropped, report) = run_recipe(&recipe, &test_store()).expect("run recipe");
    assert_eq!(cropped.num_images(), 2);
    assert_eq!(report.source_images, 8);
    assert_eq!(report.retained_images, 2);
    assert_eq!(report.channel_names, vec!["GFP"]);
    assert_eq!(
        report.output_dimensions,
        Coords::from_pairs([(Axis::TIME, 2), (Axis::CHANNEL, 1)])
    );
}

#[test]
fn recipe_bounds_are_checked_against_source() {
    let recipe = CropRecipe {
        name: None,
        bounds: CropBounds::new().with(Axis::TIME, 1, 9),
    };
    assert!(run_recipe(&recipe, &test_store()).is_err());
}

#[test]
fn report_roundtrips_through_yaml() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("report.yml");
    let recipe = CropRecipe {
        name: None,
        bounds: CropBounds::new().with(Axis::TIME, 2, 2),
    };
    let (_, report) = run_recipe(&recipe, &test_store()).expect("run recipe");
    save_report(&path, &report).expect("save report");
    let raw = fs::read_to_string(&path).expect("read report");
    let restored: CropReport = serde_yaml::from_str(&raw).expect("parse report");
    assert_eq!(restored, report);
}
