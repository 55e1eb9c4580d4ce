//! Projects and the plots subdividing them.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    self, check_overlap, is_inside_boundary, BoundaryCheck, Coordinate, Measurement,
    OverlapCheck, PolygonError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotStatus {
    #[default]
    Available,
    Sold,
    Reserved,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plot {
    pub id: String,
    #[serde(default)]
    pub status: PlotStatus,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub property_id: Option<String>,
    pub polygon: Vec<Coordinate>,
}

impl Plot {
    pub fn area(&self) -> f64 {
        geometry::area(&self.polygon)
    }

    pub fn perimeter(&self) -> f64 {
        geometry::perimeter(&self.polygon)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub boundary: Vec<Coordinate>,
    pub center: Coordinate,
    pub zoom: u8,
    #[serde(default)]
    pub plots: Vec<Plot>,
}

/// Everything the plot editor needs to decide whether a drawn polygon may be
/// saved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotPlacement {
    pub measurement: Measurement,
    pub invalid: Option<PolygonError>,
    pub boundary: BoundaryCheck,
    pub overlap: OverlapCheck,
    pub overlapping_plot_id: Option<String>,
}

impl PlotPlacement {
    pub fn is_acceptable(&self) -> bool {
        self.invalid.is_none() && self.boundary.inside && !self.overlap.overlaps
    }
}

impl Project {
    /// A project centred on its boundary, with no plots yet.
    pub fn new(id: impl Into<String>, boundary: Vec<Coordinate>, zoom: u8) -> Self {
        let center = geometry::centroid(&boundary).unwrap_or_default();

        Self {
            id: id.into(),
            name: String::new(),
            boundary,
            center,
            zoom,
            plots: vec![],
        }
    }

    /// Checks `candidate` against the boundary and every sibling plot. When a
    /// plot is being re-drawn, `ignore_id` names it so it does not collide
    /// with its own previous outline.
    pub fn check_plot(&self, candidate: &[Coordinate], ignore_id: Option<&str>) -> PlotPlacement {
        let siblings: Vec<&Plot> = self
            .plots
            .iter()
            .filter(|plot| Some(plot.id.as_str()) != ignore_id)
            .collect();
        let outlines: Vec<&[Coordinate]> =
            siblings.iter().map(|plot| plot.polygon.as_slice()).collect();

        let overlap = check_overlap(candidate, &outlines);
        let overlapping_plot_id = overlap
            .overlapping_index
            .map(|index| siblings[index].id.clone());

        let placement = PlotPlacement {
            measurement: geometry::measure(candidate),
            invalid: geometry::validate(candidate).err(),
            boundary: is_inside_boundary(candidate, &self.boundary),
            overlap,
            overlapping_plot_id,
        };

        log::debug!(
            "plot check in project {}: acceptable = {}",
            self.id,
            placement.is_acceptable()
        );

        placement
    }

    pub fn plots_with_status(&self, status: PlotStatus) -> impl Iterator<Item = &Plot> {
        self.plots.iter().filter(move |plot| plot.status == status)
    }

    pub fn total_area(&self) -> f64 {
        self.plots.iter().map(Plot::area).sum()
    }

    pub fn plot(&self, id: &str) -> Option<&Plot> {
        self.plots.iter().find(|plot| plot.id == id)
    }
}
