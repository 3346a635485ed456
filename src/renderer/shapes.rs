//! Shape generation for 2D primitives

use super::vertex::Vertex;
use crate::sim::Rect;

/// Two triangles covering `rect`
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    if rect.size.x <= 0.0 || rect.size.y <= 0.0 {
        return Vec::new();
    }
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
    ]
}

/// Border of `rect` drawn inward with the given line width
pub fn rect_outline(rect: &Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let w = width.min(rect.size.x / 2.0).min(rect.size.y / 2.0);
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    let edges = [
        // Top and bottom span the full width
        Rect::new(l, t, rect.size.x, w),
        Rect::new(l, b - w, rect.size.x, w),
        // Left and right fill the gap between them
        Rect::new(l, t + w, w, rect.size.y - 2.0 * w),
        Rect::new(r - w, t + w, w, rect.size.y - 2.0 * w),
    ];
    edges.iter().flat_map(|e| filled_rect(e, color)).collect()
}
