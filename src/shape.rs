//! Extraction of the single coordinate sequence to encode.
//!
//! This is the only module that inspects `geo` geometry variants. Lines are
//! encoded as-is; polygons are encoded by their exterior ring, holes ignored.

use geo::{Coord, Geometry, LineString};
use geozero::ToGeo;
use geozero::wkt::Wkt;

use crate::error::{ALLOWED_SHAPE_KINDS, EncodeError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// An open path.
    Path(LineString<f64>),
    /// The exterior ring of a polygon.
    BoundaryRing(LineString<f64>),
}

impl Shape {
    pub fn from_geometry(geometry: Geometry<f64>) -> Result<Self> {
        let shape = match geometry {
            Geometry::LineString(line) => Shape::Path(line),
            Geometry::Polygon(polygon) => Shape::BoundaryRing(polygon.into_inner().0),
            other => {
                return Err(EncodeError::UnsupportedShapeKind {
                    kind: geometry_kind(&other),
                    allowed: ALLOWED_SHAPE_KINDS,
                });
            }
        };

        if shape.coords().is_empty() {
            return Err(EncodeError::EmptyShape);
        }
        Ok(shape)
    }

    /// Parse WKT text. Parser failures surface as
    /// [`EncodeError::MalformedInput`].
    pub fn from_wkt(wkt: &str) -> Result<Self> {
        let geometry = Wkt(wkt).to_geo()?;
        Self::from_geometry(geometry)
    }

    pub fn coords(&self) -> &[Coord<f64>] {
        match self {
            Shape::Path(line) | Shape::BoundaryRing(line) => &line.0,
        }
    }

    pub fn is_closed_boundary(&self) -> bool {
        matches!(self, Shape::BoundaryRing(_))
    }
}

impl TryFrom<Geometry<f64>> for Shape {
    type Error = EncodeError;

    fn try_from(geometry: Geometry<f64>) -> Result<Self> {
        Shape::from_geometry(geometry)
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
