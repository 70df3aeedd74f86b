// SPDX-License-Identifier: MIT OR Apache-2.0
//! Objects placed on the canvas.

use crate::geometry::BoundingBox;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Width/height used when an object carries no usable size
pub const DEFAULT_OBJECT_SIZE: f64 = 100.0;

/// Unique identifier for a canvas object
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub String);

impl ObjectId {
    /// Create an object ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ObjectId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// 2D placement of an object in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Horizontal scale
    pub scale_x: f64,
    /// Vertical scale
    pub scale_y: f64,
    /// Rotation in degrees (not applied to bounds)
    #[serde(default)]
    pub rotation: f64,
}

impl Transform {
    /// Unscaled placement at a point
    pub const fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
            rotation: 0.0,
        }
    }

    /// Set the scale factors
    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::at(0.0, 0.0)
    }
}

/// Shape primitive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    /// Axis-aligned rectangle
    Rectangle,
    /// Circle or ellipse
    Circle,
    /// Closed polygon
    Polygon,
}

/// Type-specific payload.
///
/// Flattened into [`CanvasObject`] as a `type` tag beside `id` with the
/// payload under `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "lowercase")]
pub enum ObjectData {
    /// Bitmap image
    Image {
        /// Source URL
        url: String,
        /// Intrinsic width
        width: f64,
        /// Intrinsic height
        height: f64,
    },
    /// Video clip
    Video {
        /// Source URL
        url: String,
        /// Intrinsic width
        width: f64,
        /// Intrinsic height
        height: f64,
        /// Length in seconds
        #[serde(default)]
        duration: f64,
    },
    /// Text block
    Text {
        /// Text content
        text: String,
        /// Font size in points
        #[serde(default, rename = "fontSize")]
        font_size: Option<f64>,
    },
    /// Vector shape
    Shape {
        /// Primitive
        #[serde(rename = "shapeType")]
        shape: ShapeKind,
        /// Width, when the shape has one
        #[serde(default)]
        width: Option<f64>,
        /// Height, when the shape has one
        #[serde(default)]
        height: Option<f64>,
    },
}

/// Object type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Bitmap image
    Image,
    /// Video clip
    Video,
    /// Text block
    Text,
    /// Vector shape
    Shape,
}

impl ObjectData {
    /// Type tag
    pub fn kind(&self) -> ObjectKind {
        match self {
            Self::Image { .. } => ObjectKind::Image,
            Self::Video { .. } => ObjectKind::Video,
            Self::Text { .. } => ObjectKind::Text,
            Self::Shape { .. } => ObjectKind::Shape,
        }
    }

    /// Unscaled width and height.
    ///
    /// Text has no intrinsic box and sizeless shapes (circles by radius,
    /// polygons by points) fall back to [`DEFAULT_OBJECT_SIZE`]; so does a
    /// zero or NaN dimension.
    pub fn size(&self) -> (f64, f64) {
        match self {
            Self::Image { width, height, .. } | Self::Video { width, height, .. } => {
                (or_default(*width), or_default(*height))
            }
            Self::Shape { width: Some(width), height, .. } => {
                (or_default(*width), or_default(height.unwrap_or(DEFAULT_OBJECT_SIZE)))
            }
            Self::Text { .. } | Self::Shape { width: None, .. } => {
                (DEFAULT_OBJECT_SIZE, DEFAULT_OBJECT_SIZE)
            }
        }
    }
}

fn or_default(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() {
        DEFAULT_OBJECT_SIZE
    } else {
        value
    }
}

/// An object on the canvas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasObject {
    /// Unique object ID
    pub id: ObjectId,
    /// Stacking order; higher draws on top
    #[serde(default)]
    pub layer_index: i32,
    /// World placement
    pub transform: Transform,
    /// Whether the object is shown
    #[serde(default = "default_visibility", rename = "visibility")]
    pub visible: bool,
    /// Whether the object ignores pointer edits
    #[serde(default)]
    pub locked: bool,
    /// Type tag and payload
    #[serde(flatten)]
    pub data: ObjectData,
}

fn default_visibility() -> bool {
    true
}

impl CanvasObject {
    /// Create a visible, unlocked object
    pub fn new(id: impl Into<ObjectId>, transform: Transform, data: ObjectData) -> Self {
        Self {
            id: id.into(),
            layer_index: 0,
            transform,
            visible: true,
            locked: false,
            data,
        }
    }

    /// Image object of the given size at a point
    pub fn image(id: impl Into<ObjectId>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(
            id,
            Transform::at(x, y),
            ObjectData::Image {
                url: String::new(),
                width,
                height,
            },
        )
    }

    /// Text object at a point
    pub fn text(id: impl Into<ObjectId>, x: f64, y: f64, text: impl Into<String>) -> Self {
        Self::new(
            id,
            Transform::at(x, y),
            ObjectData::Text {
                text: text.into(),
                font_size: None,
            },
        )
    }

    /// Set the stacking order
    pub fn with_layer(mut self, layer_index: i32) -> Self {
        self.layer_index = layer_index;
        self
    }

    /// Type tag
    pub fn kind(&self) -> ObjectKind {
        self.data.kind()
    }

    /// World-space bounds: origin plus intrinsic size times scale.
    ///
    /// Rotation is ignored.
    pub fn bounds(&self) -> BoundingBox {
        let (width, height) = self.data.size();
        BoundingBox::from_origin_size(
            self.transform.x,
            self.transform.y,
            width * self.transform.scale_x,
            height * self.transform.scale_y,
        )
    }
}

/// Free-function form of [`CanvasObject::bounds`]
pub fn object_bounds(object: &CanvasObject) -> BoundingBox {
    object.bounds()
}
