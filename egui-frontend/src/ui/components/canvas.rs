//! # Canvas Module
//!
//! A retained drawing surface of fixed pixel size. Chart renderers record
//! shapes into a [`Canvas`] once per refresh cycle; the canvas then repaints
//! those items every frame until the next refresh clears them.
//!
//! ## Coordinates:
//! All item coordinates are local to the canvas (origin at the top-left
//! corner). Angles are in degrees measured clockwise from 12 o'clock.
//!
//! ## Arcs:
//! egui has no native arc primitive, so filled arcs are painted as a triangle
//! fan and their outline as a polyline of short segments.

use eframe::egui;
use egui::{Align2, Color32, FontId, Pos2, Rect, Stroke, Vec2};

/// One recorded drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum CanvasItem {
    Circle {
        center: Pos2,
        radius: f32,
        fill: Color32,
        stroke: Stroke,
    },
    /// Pie slice starting at `start_degrees` and sweeping clockwise
    Arc {
        center: Pos2,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
        fill: Color32,
        outline: Stroke,
    },
    Line {
        from: Pos2,
        to: Pos2,
        stroke: Stroke,
    },
    Rect {
        rect: Rect,
        fill: Color32,
        stroke: Stroke,
    },
    Text {
        pos: Pos2,
        anchor: Align2,
        text: String,
        font_size: f32,
        color: Color32,
    },
}

/// Fixed-size retained drawing surface
#[derive(Debug, Clone)]
pub struct Canvas {
    size: Vec2,
    background: Color32,
    items: Vec<CanvasItem>,
}

impl Canvas {
    pub fn new(width: f32, height: f32, background: Color32) -> Self {
        Self {
            size: egui::vec2(width, height),
            background,
            items: Vec::new(),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn items(&self) -> &[CanvasItem] {
        &self.items
    }

    /// Remove everything drawn so far
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn circle(&mut self, center: Pos2, radius: f32, fill: Color32, stroke: Stroke) {
        self.items.push(CanvasItem::Circle {
            center,
            radius,
            fill,
            stroke,
        });
    }

    pub fn arc(
        &mut self,
        center: Pos2,
        radius: f32,
        start_degrees: f32,
        sweep_degrees: f32,
        fill: Color32,
        outline: Stroke,
    ) {
        self.items.push(CanvasItem::Arc {
            center,
            radius,
            start_degrees,
            sweep_degrees,
            fill,
            outline,
        });
    }

    pub fn line(&mut self, from: Pos2, to: Pos2, stroke: Stroke) {
        self.items.push(CanvasItem::Line { from, to, stroke });
    }

    pub fn rect(&mut self, rect: Rect, fill: Color32, stroke: Stroke) {
        self.items.push(CanvasItem::Rect { rect, fill, stroke });
    }

    pub fn text(
        &mut self,
        pos: Pos2,
        anchor: Align2,
        text: impl Into<String>,
        font_size: f32,
        color: Color32,
    ) {
        self.items.push(CanvasItem::Text {
            pos,
            anchor,
            text: text.into(),
            font_size,
            color,
        });
    }

    /// Allocate the canvas in `ui` and paint its background and items
    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let (rect, response) = ui.allocate_exact_size(self.size(), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::Rounding::ZERO, self.background);
        self.paint(&painter, rect.min);
        response
    }

    /// Paint all items with the canvas origin at `origin`
    pub fn paint(&self, painter: &egui::Painter, origin: Pos2) {
        let offset = origin.to_vec2();
        for item in &self.items {
            match item {
                CanvasItem::Circle {
                    center,
                    radius,
                    fill,
                    stroke,
                } => {
                    painter.circle(*center + offset, *radius, *fill, *stroke);
                }
                CanvasItem::Arc {
                    center,
                    radius,
                    start_degrees,
                    sweep_degrees,
                    fill,
                    outline,
                } => {
                    paint_pie_slice(
                        painter,
                        *center + offset,
                        *radius,
                        *start_degrees,
                        *sweep_degrees,
                        *fill,
                        *outline,
                    );
                }
                CanvasItem::Line { from, to, stroke } => {
                    painter.line_segment([*from + offset, *to + offset], *stroke);
                }
                CanvasItem::Rect { rect, fill, stroke } => {
                    painter.rect(rect.translate(offset), egui::Rounding::ZERO, *fill, *stroke);
                }
                CanvasItem::Text {
                    pos,
                    anchor,
                    text,
                    font_size,
                    color,
                } => {
                    painter.text(
                        *pos + offset,
                        *anchor,
                        text,
                        FontId::proportional(*font_size),
                        *color,
                    );
                }
            }
        }
    }
}

/// Point on a circle at `degrees` clockwise from 12 o'clock
pub fn point_on_circle(center: Pos2, radius: f32, degrees: f32) -> Pos2 {
    let radians = degrees.to_radians();
    egui::pos2(
        center.x + radius * radians.sin(),
        center.y - radius * radians.cos(),
    )
}

/// Number of straight segments used to approximate an arc
pub fn arc_segment_count(radius: f32, sweep_degrees: f32) -> usize {
    // Roughly 3 pixels per segment
    let arc_length = sweep_degrees.abs().to_radians() * radius;
    ((arc_length / 3.0).ceil() as usize).clamp(8, 100)
}

/// Points along an arc, both endpoints included
pub fn arc_points(center: Pos2, radius: f32, start_degrees: f32, sweep_degrees: f32) -> Vec<Pos2> {
    let segments = arc_segment_count(radius, sweep_degrees);
    let step = sweep_degrees / segments as f32;
    (0..=segments)
        .map(|i| point_on_circle(center, radius, start_degrees + step * i as f32))
        .collect()
}

fn paint_pie_slice(
    painter: &egui::Painter,
    center: Pos2,
    radius: f32,
    start_degrees: f32,
    sweep_degrees: f32,
    fill: Color32,
    outline: Stroke,
) {
    if sweep_degrees == 0.0 {
        return;
    }

    let rim = arc_points(center, radius, start_degrees, sweep_degrees);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(center, fill);
    for point in &rim {
        mesh.colored_vertex(*point, fill);
    }
    for i in 1..rim.len() as u32 {
        mesh.add_triangle(0, i, i + 1);
    }
    painter.add(egui::Shape::mesh(mesh));

    if outline.width > 0.0 {
        let mut path = Vec::with_capacity(rim.len() + 1);
        path.push(center);
        path.extend(rim);
        painter.add(egui::Shape::closed_line(path, outline));
    }
}
