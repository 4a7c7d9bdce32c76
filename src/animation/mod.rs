/// Easing curves.
pub mod ease;
/// Interpolation of animatable values.
pub mod lerp;
