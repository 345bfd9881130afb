/// Edge weight type
pub type Weight = f64;
/// Mean earth radius in kilometers
pub const EARTH_RADIUS_KM: Weight = 6371.0;
/// Mean earth radius in statute miles
pub const EARTH_RADIUS_MI: Weight = 3960.0;
