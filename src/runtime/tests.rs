use ndarray::Array2;
use tempfile::tempdir;

use crate::crop::CropBounds;
use crate::model::{Axis, Coords, DataProvider, Datastore, Image, SummaryMetadata};
use crate::workflow::CropRecipe;

use super::{AppContext, AppError};

fn stack() -> Datastore {
    let mut store = Datastore::new();
    store
        .set_summary_metadata(SummaryMetadata::default().with_axis_order(vec![Axis::z()]))
        .expect("summary");
    for z in 0..4 {
        store
            .put_image(Image::new(
                Array2::from_elem((3, 3), z as f32),
                Coords::from_pairs([(Axis::Z, z)]),
            ))
            .expect("insert");
    }
    store.freeze();
    store
}

#[test]
fn crop_roundtrips_through_directories() {
    let app = AppContext::new();
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("input");
    let output = dir.path().join("output");
    app.io_service().write(&input, &stack()).expect("write input");

    let source = app.io_service().read(&input).expect("read input");
    app.dataset_service().validate(&source).expect("valid");
    assert_eq!(
        app.dataset_service().croppable_axes(&source),
        vec![(Axis::z(), 4)]
    );

    let recipe = CropRecipe {
        name: Some("middle".into()),
        bounds: CropBounds::new().with(Axis::Z, 2, 3),
    };
    let (mut cropped, report) = app.crop_service().run(&recipe, &source).expect("crop");
    assert_eq!(report.retained_images, 2);
    cropped.freeze();
    app.io_service().write(&output, &cropped).expect("write output");

    let restored = app.io_service().read(&output).expect("read output");
    assert_eq!(restored.axis_length(Axis::Z), 2);
    let first = restored
        .image(&Coords::from_pairs([(Axis::Z, 0)]))
        .expect("first plane");
    assert_eq!(first.pixels()[[0, 0]], 1.0);
}

#[test]
fn preview_picks_requested_plane() {
    let app = AppContext::new();
    let source = stack();
    let image = app
        .crop_service()
        .preview(&source, Coords::from_pairs([(Axis::Z, 0)]), Axis::Z, 3)
        .expect("preview");
    assert_eq!(image.coords(), &Coords::from_pairs([(Axis::Z, 2)]));

    let error = app
        .crop_service()
        .preview(&source, Coords::new(), Axis::TIME, 1)
        .expect_err("time is not croppable");
    assert!(matches!(error, AppError::Crop(_)));
}

#[test]
fn command_line_bounds_override_recipe() {
    let app = AppContext::new();
    let mut recipe = CropRecipe {
        name: None,
        bounds: CropBounds::new().with(Axis::Z, 1, 2).with(Axis::TIME, 1, 1),
    };
    app.crop_service()
        .merge_bounds(&mut recipe, &CropBounds::new().with(Axis::Z, 3, 4));
    assert_eq!(
        recipe.bounds,
        CropBounds::new().with(Axis::Z, 3, 4).with(Axis::TIME, 1, 1)
    );
}
