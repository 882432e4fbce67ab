//! Drawing surface contract and the in-memory canvas implementation.

use super::color::{Color, WHITE};
use super::shape::{ShapeDescriptor, ShapeKind, ShapeStyle, StyleKey, StyleValue};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Handle to an item rendered on a [`Surface`].
///
/// Ids are never reused by a surface, so a stale handle simply stops resolving.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Minimal shape creation and inspection contract the drawing core depends on.
///
/// Tools render through it and history captures and replays through it, so
/// neither needs a real display. [`Canvas`] is the in-memory implementation.
pub trait Surface {
    /// Adds an item on top of everything already drawn.
    fn create_item(&mut self, shape: ShapeDescriptor) -> ItemId;

    /// Adds an item carrying a tag that [`Surface::delete_tagged`] can match.
    fn create_tagged(&mut self, shape: ShapeDescriptor, tag: &str) -> ItemId;

    /// Removes one item. Returns `false` when the handle no longer resolves.
    fn delete(&mut self, id: ItemId) -> bool;

    /// Removes every item carrying `tag`, returning how many were removed.
    fn delete_tagged(&mut self, tag: &str) -> usize;

    /// Removes every item.
    fn clear(&mut self);

    /// All live item handles in draw order (bottom first).
    fn find_all(&self) -> Vec<ItemId>;

    /// Descriptor of a live item.
    fn item(&self, id: ItemId) -> Option<&ShapeDescriptor>;

    /// Color erasing tools paint with.
    fn background(&self) -> Color;

    fn set_background(&mut self, color: Color);

    fn create_oval(&mut self, coords: [f64; 4], style: ShapeStyle) -> ItemId {
        self.create_item(ShapeDescriptor::new(ShapeKind::Oval, coords.to_vec(), style))
    }

    fn create_rectangle(&mut self, coords: [f64; 4], style: ShapeStyle) -> ItemId {
        self.create_item(ShapeDescriptor::new(
            ShapeKind::Rectangle,
            coords.to_vec(),
            style,
        ))
    }

    fn create_line(&mut self, coords: Vec<f64>, style: ShapeStyle) -> ItemId {
        self.create_item(ShapeDescriptor::new(ShapeKind::Line, coords, style))
    }

    fn create_polygon(&mut self, coords: Vec<f64>, style: ShapeStyle) -> ItemId {
        self.create_item(ShapeDescriptor::new(ShapeKind::Polygon, coords, style))
    }

    fn kind(&self, id: ItemId) -> Option<ShapeKind> {
        self.item(id).map(|shape| shape.kind)
    }

    fn coords(&self, id: ItemId) -> Option<&[f64]> {
        self.item(id).map(|shape| shape.coords.as_slice())
    }

    fn item_style(&self, id: ItemId, key: StyleKey) -> Option<StyleValue> {
        self.item(id).and_then(|shape| shape.style.get(key))
    }

    /// Number of live items.
    fn len(&self) -> usize {
        self.find_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone)]
struct CanvasItem {
    id: ItemId,
    tag: Option<String>,
    shape: ShapeDescriptor,
}

/// In-memory surface holding items in draw order.
///
/// The canvas also knows its pixel size so export can rasterise it.
#[derive(Debug, Clone)]
pub struct Canvas {
    items: Vec<CanvasItem>,
    next_id: u64,
    background: Color,
    width: u32,
    height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl Canvas {
    /// Creates an empty white canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
            background: WHITE,
            width,
            height,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Descriptors of every live item in draw order.
    pub fn shapes(&self) -> impl Iterator<Item = &ShapeDescriptor> {
        self.items.iter().map(|item| &item.shape)
    }

    /// Tag attached to an item, if any.
    pub fn tag(&self, id: ItemId) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .and_then(|item| item.tag.as_deref())
    }

    fn push(&mut self, shape: ShapeDescriptor, tag: Option<String>) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        self.items.push(CanvasItem { id, tag, shape });
        id
    }
}

impl Surface for Canvas {
    fn create_item(&mut self, shape: ShapeDescriptor) -> ItemId {
        self.push(shape, None)
    }

    fn create_tagged(&mut self, shape: ShapeDescriptor, tag: &str) -> ItemId {
        self.push(shape, Some(tag.to_string()))
    }

    fn delete(&mut self, id: ItemId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    fn delete_tagged(&mut self, tag: &str) -> usize {
        let before = self.items.len();
        self.items.retain(|item| item.tag.as_deref() != Some(tag));
        before - self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn find_all(&self) -> Vec<ItemId> {
        self.items.iter().map(|item| item.id).collect()
    }

    fn item(&self, id: ItemId) -> Option<&ShapeDescriptor> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .map(|item| &item.shape)
    }

    fn background(&self) -> Color {
        self.background
    }

    fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
