//! Chart render mode selected in the UI.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// 2D chart or 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartDimension {
    #[default]
    #[serde(rename = "2d")]
    TwoD,
    #[serde(rename = "3d")]
    ThreeD,
}

/// Chart style within a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartStyle {
    #[default]
    Bar,
    Line,
    Pie,
}

impl ChartStyle {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ChartStyle::Bar => "Bar Chart",
            ChartStyle::Line => "Line Chart",
            ChartStyle::Pie => "Pie Chart",
        }
    }
}

/// The active render mode. Defaults to a 2D bar chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ChartMode {
    pub dimension: ChartDimension,
    pub style: ChartStyle,
}

impl ChartMode {
    pub fn new(dimension: ChartDimension, style: ChartStyle) -> Self {
        Self { dimension, style }
    }
}

impl fmt::Display for ChartDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDimension::TwoD => write!(f, "2d"),
            ChartDimension::ThreeD => write!(f, "3d"),
        }
    }
}

impl fmt::Display for ChartStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartStyle::Bar => write!(f, "bar"),
            ChartStyle::Line => write!(f, "line"),
            ChartStyle::Pie => write!(f, "pie"),
        }
    }
}

impl fmt::Display for ChartMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.dimension, self.style)
    }
}

impl FromStr for ChartDimension {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "2d" | "2" | "flat" => Ok(ChartDimension::TwoD),
            "3d" | "3" | "scene" => Ok(ChartDimension::ThreeD),
            _ => Err(format!("Unknown chart dimension: {}. Use 2d or 3d.", s)),
        }
    }
}

impl FromStr for ChartStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "bar" => Ok(ChartStyle::Bar),
            "line" => Ok(ChartStyle::Line),
            "pie" => Ok(ChartStyle::Pie),
            _ => Err(format!("Unknown chart style: {}. Use bar, line, or pie.", s)),
        }
    }
}
