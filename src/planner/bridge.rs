//! JSON-Brücke zu einem fremd-implementierten Planer.
//!
//! Der Fremd-Planer spricht an der Grenze `[{"x":..,"y":..}, …]` in beide
//! Richtungen und meldet Fehler als Text.

use super::{PathPlanner, PlanError};
use crate::core::{Coordinate, Route};
use serde::{Deserialize, Serialize};

/// Punktformat an der Brücken-Grenze.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlannerPoint {
    pub x: f64,
    pub y: f64,
}

impl From<Coordinate> for PlannerPoint {
    fn from(c: Coordinate) -> Self {
        Self { x: c.x, y: c.y }
    }
}

impl From<PlannerPoint> for Coordinate {
    fn from(p: PlannerPoint) -> Self {
        Coordinate::new(p.x, p.y)
    }
}

/// Planer, der einen Fremd-Aufruf über JSON-Text anspricht.
pub struct JsonPlannerBridge<F> {
    call: F,
}

impl<F> JsonPlannerBridge<F>
where
    F: Fn(&str) -> Result<String, String>,
{
    pub fn new(call: F) -> Self {
        Self { call }
    }

    /// Serialisiert das Polygon in das Grenzformat.
    pub fn encode_area(area: &[Coordinate]) -> Result<String, PlanError> {
        let points: Vec<PlannerPoint> = area.iter().copied().map(PlannerPoint::from).collect();
        serde_json::to_string(&points).map_err(|e| PlanError::Serialization(e.to_string()))
    }

    /// Liest die Antwort des Fremd-Planers als Route.
    pub fn decode_route(json: &str) -> Result<Route, PlanError> {
        let points: Vec<PlannerPoint> =
            serde_json::from_str(json).map_err(|e| PlanError::Serialization(e.to_string()))?;
        Ok(points.into_iter().map(Coordinate::from).collect())
    }
}

impl<F> PathPlanner for JsonPlannerBridge<F>
where
    F: Fn(&str) -> Result<String, String>,
{
    fn plan(&self, area: &[Coordinate]) -> Result<Route, PlanError> {
        let request = Self::encode_area(area)?;
        let response = (self.call)(&request).map_err(PlanError::Bridge)?;
        Self::decode_route(&response)
    }
}
