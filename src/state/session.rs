// One activation of the image viewer: owns the transform and gesture state for a single image
// and tells subscribers about every change. Nothing outlives `close`.

use super::gesture::{GestureController, InputEvent};
use super::minimap::{self, MinimapRect};
use super::transform::{Mutation, Point, Size, Transform};

pub const BUTTON_ZOOM_STEP: f64 = 0.2;

#[derive(Clone, Debug, PartialEq)]
pub struct ViewerImage {
    pub src: String,
    pub alt: String,
    pub natural_width: f64,
    pub natural_height: f64,
}

impl ViewerImage {
    /// File name offered when saving the image: the last path segment of `src`.
    pub fn file_name(&self) -> &str {
        let path = self.src.split(['?', '#']).next().unwrap_or_default();
        path.rsplit('/').next().unwrap_or_default()
    }
}

/// Everything a renderer needs after a change.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub transform_css: String,
    pub scale: f64,
    pub minimap: Option<MinimapRect>,
    pub dragging: bool,
}

/// Zoom shown in the toolbar, e.g. `140%`.
pub fn zoom_label(scale: f64) -> String {
    format!("{}%", (scale * 100.0).round())
}

type Subscriber = Box<dyn FnMut(&Frame)>;

pub struct ViewerSession {
    image: ViewerImage,
    transform: Transform,
    gestures: GestureController,
    subscribers: Vec<Subscriber>,
    open: bool,
}

impl ViewerSession {
    pub fn open(image: ViewerImage, surface: Size) -> Self {
        let natural = Size::new(image.natural_width, image.natural_height);
        let mut transform = Transform::new(natural, surface);
        transform.reset();
        Self {
            image,
            transform,
            gestures: GestureController::new(),
            subscribers: Vec::new(),
            open: true,
        }
    }

    pub fn image(&self) -> &ViewerImage {
        &self.image
    }

    #[cfg(test)]
    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn frame(&self) -> Frame {
        Frame {
            transform_css: self.transform.css(),
            scale: self.transform.scale(),
            minimap: minimap::project(&self.transform),
            dragging: self.gestures.is_dragging(),
        }
    }

    /// Registers a change listener and immediately hands it the current frame.
    pub fn subscribe(&mut self, mut subscriber: impl FnMut(&Frame) + 'static) {
        if !self.open {
            return;
        }
        subscriber(&self.frame());
        self.subscribers.push(Box::new(subscriber));
    }

    pub fn handle(&mut self, event: &InputEvent) {
        if !self.open {
            return;
        }
        let was_dragging = self.gestures.is_dragging();
        let changed = self.gestures.handle(event, &mut self.transform);
        if changed || was_dragging != self.gestures.is_dragging() {
            self.notify();
        }
    }

    /// Click on the minimap, given as fractions of its bounding box.
    pub fn minimap_click(&mut self, fraction: Point) {
        let target = minimap::recenter_translation(&self.transform, fraction);
        self.mutate(Mutation::TranslateTo(target));
    }

    pub fn resize(&mut self, surface: Size) {
        if !self.open {
            return;
        }
        self.transform.set_surface_size(surface);
        self.notify();
    }

    pub fn zoom_in(&mut self) {
        self.mutate(Mutation::ZoomDelta(BUTTON_ZOOM_STEP));
    }

    pub fn zoom_out(&mut self) {
        self.mutate(Mutation::ZoomDelta(-BUTTON_ZOOM_STEP));
    }

    pub fn reset(&mut self) {
        self.mutate(Mutation::Reset);
    }

    /// Source handed to the file-save collaborator, or `None` once closed.
    pub fn download(&self) -> Option<(&str, &str)> {
        self.open.then(|| (self.image.src.as_str(), self.image.file_name()))
    }

    /// Drops subscribers and resets state. Safe to call more than once.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.subscribers.clear();
        self.gestures = GestureController::new();
        self.transform.reset();
    }

    fn mutate(&mut self, mutation: Mutation) {
        if !self.open {
            return;
        }
        self.transform.apply(mutation);
        self.notify();
    }

    fn notify(&mut self) {
        let frame = self.frame();
        for subscriber in self.subscribers.iter_mut() {
            subscriber(&frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn image() -> ViewerImage {
        ViewerImage {
            src: "assets/diagrams/flow.png?v=2".into(),
            alt: "flow".into(),
            natural_width: 1000.0,
            natural_height: 500.0,
        }
    }

    fn recorded(session: &mut ViewerSession) -> Rc<RefCell<Vec<Frame>>> {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let sink = frames.clone();
        session.subscribe(move |f| sink.borrow_mut().push(f.clone()));
        frames
    }

    #[test]
    fn opens_in_reset_state_with_initial_projection() {
        let mut s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        let frames = recorded(&mut s);
        let frames = frames.borrow();
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].transform_css, "translate(0px, 0px) scale(1)");
        let rect = frames[0].minimap.unwrap();
        assert_eq!((rect.width, rect.height), (50.0, 100.0));
    }

    #[test]
    fn toolbar_zoom_steps_and_clamps() {
        let mut s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        for _ in 0..40 {
            s.zoom_in();
        }
        assert_eq!(s.transform().scale(), 6.0);
        for _ in 0..40 {
            s.zoom_out();
        }
        assert_eq!(s.transform().scale(), 0.2);
        s.reset();
        assert_eq!(s.transform().scale(), 1.0);
    }

    #[test]
    fn every_change_notifies() {
        let mut s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        let frames = recorded(&mut s);
        s.handle(&InputEvent::PointerDown(Point::new(100.0, 100.0)));
        s.handle(&InputEvent::PointerMove(Point::new(150.0, 120.0)));
        s.handle(&InputEvent::PointerUp);
        s.handle(&InputEvent::PointerMove(Point::new(10.0, 10.0)));
        let frames = frames.borrow();
        // initial, drag start, move, release; the stray move is ignored
        assert_eq!(frames.len(), 4);
        assert!(frames[1].dragging);
        assert_eq!(frames[2].transform_css, "translate(50px, 20px) scale(1)");
        assert!(!frames[3].dragging);
    }

    #[test]
    fn frames_report_scale_for_the_zoom_label() {
        let mut s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        let frames = recorded(&mut s);
        s.zoom_in();
        s.zoom_in();
        s.handle(&InputEvent::Wheel { delta_y: 100.0 });
        let frames = frames.borrow();
        assert_eq!(frames.len(), 4);
        assert!((frames[2].scale - 1.4).abs() < 1e-9);
        assert!((frames[3].scale - 1.3).abs() < 1e-9);
        assert_eq!(zoom_label(frames[3].scale), "130%");
    }

    #[test]
    fn minimap_click_recenters() {
        let mut s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        s.minimap_click(Point::new(0.5, 0.5));
        assert_eq!(s.transform().translation(), Point::new(-250.0, 0.0));
    }

    #[test]
    fn close_is_idempotent_and_silences_events() {
        let mut s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        let frames = recorded(&mut s);
        s.close();
        s.close();
        assert!(!s.is_open());
        s.handle(&InputEvent::Wheel { delta_y: -500.0 });
        s.zoom_in();
        s.minimap_click(Point::new(0.1, 0.1));
        assert_eq!(frames.borrow().len(), 1);
        assert_eq!(s.transform().scale(), 1.0);
        assert_eq!(s.download(), None);
    }

    #[test]
    fn download_uses_last_path_segment() {
        let s = ViewerSession::open(image(), Size::new(500.0, 500.0));
        assert_eq!(s.download(), Some(("assets/diagrams/flow.png?v=2", "flow.png")));
    }

    #[test]
    fn sessions_are_independent() {
        let mut a = ViewerSession::open(image(), Size::new(500.0, 500.0));
        let b = ViewerSession::open(image(), Size::new(500.0, 500.0));
        a.zoom_in();
        assert_eq!(b.transform().scale(), 1.0);
    }

    #[test]
    fn resize_reprojects() {
        let mut s = ViewerSession::open(image(), Size::new(0.0, 0.0));
        assert_eq!(s.frame().minimap, None);
        s.resize(Size::new(250.0, 500.0));
        assert_eq!(s.frame().minimap.unwrap().width, 25.0);
    }
}
