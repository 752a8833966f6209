//! Translated (partially) from https://github.com/maplibre/maplibre-native/blob/4add9ea/include/mbgl/util/constants.hpp
//! Style defaults used for label layout.

/// ONE_EM constant used to go between "em" units used in style spec and "points" used internally for layout.
pub const ONE_EM: f64 = 24.0;

/// Default of the `symbol-spacing` layout property, in pixels.
pub const DEFAULT_SYMBOL_SPACING: f64 = 250.0;

/// Default of the `text-max-angle` layout property, in degrees.
pub const DEFAULT_TEXT_MAX_ANGLE: f64 = 45.0;
