pub(crate) fn to_u8_samples(values: &[f32]) -> Vec<u8> {
    values
        .iter()
        .map(|value| value.round().clamp(0.0, f32::from(u8::MAX)) as u8)
        .collect()
}

pub(crate) fn to_u16_samples(values: &[f32]) -> Vec<u16> {
    values
        .iter()
        .map(|value| value.round().clamp(0.0, f32::from(u16::MAX)) as u16)
        .collect()
}

/// Linear stretch of `min..=max` onto 0..=255, for display only.
pub(crate) fn stretch_to_u8(values: &[f32], (min, max): (f32, f32)) -> Vec<u8> {
    values
        .iter()
        .map(|value| {
            let normalized = if (max - min).abs() < f32::EPSILON {
                0.0
            } else {
                (*value - min) / (max - min)
            };
            (normalized.clamp(0.0, 1.0) * 255.0).round() as u8
        })
        .collect()
}
