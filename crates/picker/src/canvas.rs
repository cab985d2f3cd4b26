//! The vector-canvas capability the host implements.
//!
//! The core only ever writes: it creates nodes at construction and pokes
//! attributes and transforms during updates. It never reads the scene back,
//! so hosts are free to retain, batch or immediately rasterize.

use crate::color::Rgb;

/// Opaque handle to a canvas node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u64);

/// Opaque handle to a gradient definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GradientId(pub u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GradientKind {
    Linear,
    Radial,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f32,
    pub color: Rgb,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgb),
    Gradient(GradientId),
    /// Explicitly unfilled / unstroked.
    None,
}

/// Partial attribute set; only the populated fields are applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Attrs {
    pub fill: Option<Paint>,
    pub stroke: Option<Paint>,
    pub stroke_width: Option<f32>,
    pub opacity: Option<f32>,
    pub corner_radius: Option<f32>,
}

impl Attrs {
    pub fn fill(mut self, paint: Paint) -> Self {
        self.fill = Some(paint);
        self
    }

    pub fn stroke(mut self, paint: Paint) -> Self {
        self.stroke = Some(paint);
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = Some(width);
        self
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate { x: f32, y: f32 },
}

/// Host-provided vector canvas. Coordinates are local to the widget, y-down.
pub trait Canvas {
    fn group(&mut self, parent: Option<NodeId>, attrs: Attrs) -> NodeId;

    fn circle(&mut self, parent: NodeId, cx: f32, cy: f32, radius: f32, attrs: Attrs) -> NodeId;

    /// Circular arc centered at `(cx, cy)`, swept clockwise from
    /// `start_deg` to `end_deg`, stroked per `attrs`.
    fn arc(
        &mut self,
        parent: NodeId,
        cx: f32,
        cy: f32,
        radius: f32,
        start_deg: f32,
        end_deg: f32,
        attrs: Attrs,
    ) -> NodeId;

    fn rect(
        &mut self,
        parent: NodeId,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        attrs: Attrs,
    ) -> NodeId;

    fn gradient(&mut self, kind: GradientKind, stops: &[GradientStop]) -> GradientId;

    fn set_attrs(&mut self, node: NodeId, attrs: Attrs);

    fn set_transform(&mut self, node: NodeId, transform: Transform);

    /// Restyle a single stop of an existing gradient.
    fn set_gradient_stop(&mut self, gradient: GradientId, index: usize, stop: GradientStop);
}
