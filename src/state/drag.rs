// Drag-and-drop state: what a sprite hands over when picked up, and how the
// aquarium turns the release point into a clamped position.
use serde::{Deserialize, Serialize};

use crate::config::DropStrategy;
use crate::model::{Position, ThemeAnimal};

/// Kinds a drag source can be tagged with. The aquarium accepts only `Animal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DragKind {
    Animal,
}

impl DragKind {
    pub fn tag(self) -> &'static str {
        match self {
            DragKind::Animal => "animal",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimalDragItem {
    pub id: String,
    pub position: Position,
    pub image: String,
    pub name: String,
}

impl From<&ThemeAnimal> for AnimalDragItem {
    fn from(animal: &ThemeAnimal) -> Self {
        Self {
            id: animal.id.clone(),
            position: animal.position,
            image: animal.image.clone(),
            name: animal.name.clone(),
        }
    }
}

/// One in-flight pointer gesture. Client coordinates are viewport pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct DragSession {
    pub kind: DragKind,
    pub item: AnimalDragItem,
    /// Rendered square size of the sprite being dragged.
    pub footprint: f64,
    pub pointer_id: i32,
    pub pickup_x: f64,
    pub pickup_y: f64,
    pub pointer_x: f64,
    pub pointer_y: f64,
}

impl DragSession {
    pub fn start(
        kind: DragKind,
        item: AnimalDragItem,
        footprint: f64,
        pointer_id: i32,
        client_x: f64,
        client_y: f64,
    ) -> Self {
        Self {
            kind,
            item,
            footprint,
            pointer_id,
            pickup_x: client_x,
            pickup_y: client_y,
            pointer_x: client_x,
            pointer_y: client_y,
        }
    }

    pub fn update(&mut self, client_x: f64, client_y: f64) {
        self.pointer_x = client_x;
        self.pointer_y = client_y;
    }

    pub fn delta(&self) -> (f64, f64) {
        (self.pointer_x - self.pickup_x, self.pointer_y - self.pickup_y)
    }

    /// Sprite origin moved by the pointer delta; not clamped.
    pub fn preview_position(&self) -> Position {
        let (dx, dy) = self.delta();
        Position::new(self.item.position.x + dx, self.item.position.y + dy)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerSize {
    pub width: f64,
    pub height: f64,
}

/// Surface bounding box in client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SurfaceRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn contains(&self, client_x: f64, client_y: f64) -> bool {
        client_x >= self.left
            && client_x <= self.left + self.width
            && client_y >= self.top
            && client_y <= self.top + self.height
    }
}

/// Keep a sprite of `footprint` fully inside the container. A container
/// smaller than the footprint pins the sprite to the origin.
pub fn clamp_to_surface(raw: Position, container: ContainerSize, footprint: f64) -> Position {
    let max_x = (container.width - footprint).max(0.0);
    let max_y = (container.height - footprint).max(0.0);
    Position::new(raw.x.clamp(0.0, max_x), raw.y.clamp(0.0, max_y))
}

/// Unclamped top-left placement for a release, per strategy.
pub fn raw_drop_position(strategy: DropStrategy, session: &DragSession, surface: SurfaceRect) -> Position {
    match strategy {
        DropStrategy::AbsolutePointer => {
            let half = session.footprint / 2.0;
            Position::new(
                session.pointer_x - surface.left - half,
                session.pointer_y - surface.top - half,
            )
        }
        DropStrategy::RelativeDelta => {
            let moved = session.preview_position();
            Position::new(moved.x.round(), moved.y.round())
        }
    }
}

/// Where the ghost is drawn inside the surface: the unclamped drop point for
/// the active strategy, so the ghost previews exactly where a release lands.
pub fn ghost_position(strategy: DropStrategy, session: &DragSession, surface: Option<SurfaceRect>) -> Position {
    match surface {
        Some(surface) => raw_drop_position(strategy, session, surface),
        None => session.preview_position(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DropOutcome {
    Moved { animal_id: String, position: Position },
    /// Released outside the surface.
    Cancelled,
    /// The surface does not accept this kind.
    Rejected(DragKind),
}

pub fn resolve_drop(
    strategy: DropStrategy,
    accepts: &[DragKind],
    session: &DragSession,
    surface: SurfaceRect,
    container: ContainerSize,
) -> DropOutcome {
    if !accepts.contains(&session.kind) {
        return DropOutcome::Rejected(session.kind);
    }
    if !surface.contains(session.pointer_x, session.pointer_y) {
        return DropOutcome::Cancelled;
    }
    let raw = raw_drop_position(strategy, session, surface);
    DropOutcome::Moved {
        animal_id: session.item.id.clone(),
        position: clamp_to_surface(raw, container, session.footprint),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SURFACE: SurfaceRect = SurfaceRect {
        left: 0.0,
        top: 0.0,
        width: 800.0,
        height: 600.0,
    };
    const CONTAINER: ContainerSize = ContainerSize {
        width: 800.0,
        height: 600.0,
    };

    fn session_at(start: Position, footprint: f64, pickup: (f64, f64)) -> DragSession {
        let item = AnimalDragItem {
            id: "bluefin".into(),
            position: start,
            image: "/logos/bluefin.webp".into(),
            name: "Bluefin".into(),
        };
        DragSession::start(DragKind::Animal, item, footprint, 1, pickup.0, pickup.1)
    }

    fn moved(outcome: DropOutcome) -> Position {
        match outcome {
            DropOutcome::Moved { position, .. } => position,
            other => panic!("expected a move, got {other:?}"),
        }
    }

    #[test]
    fn kind_tag_matches_wire_name() {
        assert_eq!(DragKind::Animal.tag(), "animal");
        assert_eq!(serde_json::to_string(&DragKind::Animal).unwrap(), "\"animal\"");
    }

    #[test]
    fn payload_carries_id_position_image_name() {
        let animal = ThemeAnimal::new("cetus", "Cetus", "/logos/cetus.webp", Position::new(4.0, 5.0), 4, 5);
        let item = AnimalDragItem::from(&animal);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], "cetus");
        assert_eq!(json["name"], "Cetus");
        assert_eq!(json["image"], "/logos/cetus.webp");
        assert_eq!(json["position"]["x"], 4.0);
    }

    #[test]
    fn absolute_drop_near_origin_clamps_to_zero() {
        let mut s = session_at(Position::new(300.0, 300.0), 100.0, (350.0, 350.0));
        s.update(10.0, 10.0);
        let out = resolve_drop(DropStrategy::AbsolutePointer, &[DragKind::Animal], &s, SURFACE, CONTAINER);
        assert_eq!(moved(out), Position::new(0.0, 0.0));
    }

    #[test]
    fn absolute_drop_near_far_corner_clamps_to_max() {
        let mut s = session_at(Position::new(300.0, 300.0), 100.0, (350.0, 350.0));
        s.update(790.0, 590.0);
        assert_eq!(
            raw_drop_position(DropStrategy::AbsolutePointer, &s, SURFACE),
            Position::new(740.0, 540.0)
        );
        let out = resolve_drop(DropStrategy::AbsolutePointer, &[DragKind::Animal], &s, SURFACE, CONTAINER);
        assert_eq!(moved(out), Position::new(700.0, 500.0));
    }

    #[test]
    fn absolute_drop_respects_surface_origin() {
        let surface = SurfaceRect {
            left: 100.0,
            top: 40.0,
            ..SURFACE
        };
        let mut s = session_at(Position::default(), 60.0, (0.0, 0.0));
        s.update(330.0, 270.0);
        let out = resolve_drop(DropStrategy::AbsolutePointer, &[DragKind::Animal], &s, surface, CONTAINER);
        assert_eq!(moved(out), Position::new(200.0, 200.0));
    }

    #[test]
    fn relative_drop_adds_rounded_delta() {
        let mut s = session_at(Position::new(50.0, 50.0), 78.0, (100.0, 100.0));
        s.update(130.4, 89.6);
        let out = resolve_drop(DropStrategy::RelativeDelta, &[DragKind::Animal], &s, SURFACE, CONTAINER);
        assert_eq!(moved(out), Position::new(80.0, 40.0));
    }

    #[test]
    fn relative_drop_uses_sprite_footprint_for_clamp() {
        let mut s = session_at(Position::new(700.0, 500.0), 78.0, (100.0, 100.0));
        s.update(400.0, 400.0);
        let out = resolve_drop(DropStrategy::RelativeDelta, &[DragKind::Animal], &s, SURFACE, CONTAINER);
        assert_eq!(moved(out), Position::new(722.0, 522.0));
    }

    #[test]
    fn clamp_holds_for_far_outside_coordinates() {
        let footprint = 100.0;
        for raw in [
            Position::new(-10_000.0, -10_000.0),
            Position::new(10_000.0, -3.0),
            Position::new(-1.0, 99_999.0),
            Position::new(f64::MAX, f64::MAX),
        ] {
            let p = clamp_to_surface(raw, CONTAINER, footprint);
            assert!(p.x >= 0.0 && p.x <= CONTAINER.width - footprint, "{p:?}");
            assert!(p.y >= 0.0 && p.y <= CONTAINER.height - footprint, "{p:?}");
        }
    }

    #[test]
    fn tiny_container_pins_to_origin() {
        let tiny = ContainerSize {
            width: 50.0,
            height: 20.0,
        };
        assert_eq!(
            clamp_to_surface(Position::new(30.0, 30.0), tiny, 100.0),
            Position::new(0.0, 0.0)
        );
    }

    #[test]
    fn release_outside_surface_cancels() {
        let mut s = session_at(Position::default(), 60.0, (10.0, 10.0));
        s.update(900.0, 10.0);
        let out = resolve_drop(DropStrategy::RelativeDelta, &[DragKind::Animal], &s, SURFACE, CONTAINER);
        assert_eq!(out, DropOutcome::Cancelled);
    }

    #[test]
    fn unaccepted_kind_is_rejected() {
        let s = session_at(Position::default(), 60.0, (10.0, 10.0));
        let out = resolve_drop(DropStrategy::RelativeDelta, &[], &s, SURFACE, CONTAINER);
        assert_eq!(out, DropOutcome::Rejected(DragKind::Animal));
    }

    #[test]
    fn ghost_follows_absolute_pointer_not_grab_offset() {
        let surface = SurfaceRect {
            left: 20.0,
            top: 10.0,
            ..SURFACE
        };
        // grabbed near the sprite's corner, then moved
        let mut session = session_at(Position::new(100.0, 100.0), 80.0, (125.0, 115.0));
        session.update(425.0, 315.0);
        let at = ghost_position(DropStrategy::AbsolutePointer, &session, Some(surface));
        assert_eq!(at, Position::new(365.0, 265.0));
        assert_ne!(at, session.preview_position());
        let outcome = resolve_drop(DropStrategy::AbsolutePointer, &[DragKind::Animal], &session, surface, CONTAINER);
        assert_eq!(moved(outcome), at);
    }

    #[test]
    fn ghost_follows_delta_under_relative_strategy() {
        let mut session = session_at(Position::new(100.0, 100.0), 80.0, (125.0, 115.0));
        session.update(425.0, 315.0);
        let at = ghost_position(DropStrategy::RelativeDelta, &session, Some(SURFACE));
        assert_eq!(at, Position::new(400.0, 300.0));
        assert_eq!(ghost_position(DropStrategy::AbsolutePointer, &session, None), session.preview_position());
    }
}
