use serde::{Deserialize, Serialize};

/// Table dimensions in table-local units.
/// The origin is the top-left corner of the playing surface, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Playable width (W).
    pub width: f64,
    /// Playable height (H).
    pub height: f64,
    /// Ball radius (r).
    pub ball_radius: f64,
    /// Visual margin drawn around the playing surface on every side.
    pub margin: f64,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 500.0,
            ball_radius: 12.0,
            margin: 40.0,
        }
    }
}

impl TableConfig {
    /// Parse a table config from a JSON string. Missing fields keep their defaults.
    /// A table too small to hold a ball, or with negative or non-finite values, is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let config: Self = serde_json::from_str(json)?;
        config
            .validate()
            .map_err(<serde_json::Error as serde::de::Error>::custom)?;
        Ok(config)
    }

    /// Check that a ball fits between opposite rails.
    pub fn validate(&self) -> Result<(), &'static str> {
        let values = [self.width, self.height, self.ball_radius, self.margin];
        if !values.iter().all(|v| v.is_finite()) {
            return Err("table values must be finite");
        }
        if self.ball_radius < 0.0 || self.margin < 0.0 {
            return Err("ball_radius and margin must not be negative");
        }
        if self.width <= 2.0 * self.ball_radius || self.height <= 2.0 * self.ball_radius {
            return Err("width and height must exceed the ball diameter");
        }
        Ok(())
    }

    /// Width of the rendered frame including the margin.
    pub fn outer_width(&self) -> f64 {
        self.width + 2.0 * self.margin
    }

    /// Height of the rendered frame including the margin.
    pub fn outer_height(&self) -> f64 {
        self.height + 2.0 * self.margin
    }
}

/// Hit-test tuning for pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionConfig {
    /// Pocket hit radius for precise pointers.
    pub pocket_hit_radius: f64,
    /// Pocket hit radius multiplier for touch pointers.
    pub coarse_pocket_scale: f64,
    /// Extra multiplier applied while dragging between pockets.
    pub pocket_drag_scale: f64,
    /// Ball hit radius = ball radius × this, for precise pointers.
    pub fine_ball_scale: f64,
    /// Ball hit radius = ball radius × this, for touch pointers.
    pub coarse_ball_scale: f64,
    /// Half side of the square grab area around the rail marker.
    pub rail_marker_half_size: f64,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            pocket_hit_radius: 34.0,
            coarse_pocket_scale: 1.5,
            pocket_drag_scale: 1.25,
            fine_ball_scale: 1.5,
            coarse_ball_scale: 2.5,
            rail_marker_half_size: 18.0,
        }
    }
}

impl InteractionConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
