use lintel::components::popover::{
    CONTAINER_SPACER, Popover, PopoverPosition, PopoverProps, position_below,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use webdom::{Element, EventKind, Rect, SharedRect, Window, WindowEvent};

struct Fixture {
    popover: Popover,
    window: Window,
    requests: Arc<AtomicUsize>,
}

fn fixture(anchor: Rect) -> Fixture {
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();
    let props = PopoverProps {
        anchor: Arc::new(anchor),
        container: Arc::new(Rect::new(100.0, 50.0, 200.0, 150.0)),
        viewport: Arc::new(Rect::new(0.0, 0.0, 1000.0, 800.0)),
    };
    let popover = Popover::new("menu", props, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    let window = Window::new();
    popover.mount(&window);
    Fixture {
        popover,
        window,
        requests,
    }
}

fn click(window: &Window, target: Option<&str>, x: f64, y: f64) {
    window.dispatch(&WindowEvent::Click {
        target: target.map(str::to_string),
        x,
        y,
    });
}

#[test]
fn test_position_below_anchor() {
    let anchor = Rect::new(100.0, 20.0, 80.0, 30.0);
    assert_eq!(
        position_below(&anchor, 200.0, 1000.0),
        PopoverPosition { left: 100.0, top: 50.0 + CONTAINER_SPACER }
    );
}

#[test]
fn test_position_pulled_left_on_overflow() {
    let anchor = Rect::new(900.0, 0.0, 50.0, 20.0);
    // 1000 - 900 - 200 = -100 overflow, minus the spacer.
    let position = position_below(&anchor, 200.0, 1000.0);
    assert_eq!(position.left, 795.0);
    assert_eq!(position.top, 25.0);
}

#[test]
fn test_outside_click_requests_close() {
    let f = fixture(Rect::new(10.0, 10.0, 50.0, 20.0));
    f.popover.set_visible(true);
    f.popover.transition_end();

    click(&f.window, None, 900.0, 700.0);
    assert_eq!(f.requests.load(Ordering::SeqCst), 1);
    // Visibility stays with the parent.
    assert!(f.popover.is_visible());
}

#[test]
fn test_inside_click_is_ignored() {
    let f = fixture(Rect::new(10.0, 10.0, 50.0, 20.0));
    f.popover.set_visible(true);
    f.popover.transition_end();

    click(&f.window, None, 150.0, 100.0);
    click(&f.window, Some("menu"), 900.0, 700.0);
    assert_eq!(f.requests.load(Ordering::SeqCst), 0);
}

#[test]
fn test_clicks_ignored_only_while_animating() {
    let f = fixture(Rect::new(10.0, 10.0, 50.0, 20.0));

    f.popover.set_visible(true);
    assert!(f.popover.is_animating());
    click(&f.window, None, 900.0, 700.0);
    assert_eq!(f.requests.load(Ordering::SeqCst), 0);

    f.popover.transition_end();
    click(&f.window, None, 900.0, 700.0);
    assert_eq!(f.requests.load(Ordering::SeqCst), 1);

    // A hidden popover still asks its parent to close.
    f.popover.set_visible(false);
    click(&f.window, None, 900.0, 700.0);
    assert_eq!(f.requests.load(Ordering::SeqCst), 2);
}

#[test]
fn test_opening_repositions_against_moved_anchor() {
    let anchor = SharedRect::new(Rect::new(10.0, 10.0, 50.0, 20.0));
    let props = PopoverProps {
        anchor: Arc::new(anchor.clone()),
        container: Arc::new(Rect::new(0.0, 0.0, 200.0, 100.0)),
        viewport: Arc::new(Rect::new(0.0, 0.0, 1000.0, 800.0)),
    };
    let popover = Popover::new("menu", props, || {});
    popover.mount(&Window::new());
    assert_eq!(popover.position().map(|p| p.top), Some(35.0));

    anchor.set(Rect::new(10.0, 100.0, 50.0, 20.0));
    popover.set_visible(true);
    assert_eq!(popover.position().map(|p| p.top), Some(125.0));
}

#[test]
fn test_unmount_removes_listener() {
    let f = fixture(Rect::new(10.0, 10.0, 50.0, 20.0));
    assert_eq!(f.window.listener_count(EventKind::Click), 1);
    f.popover.unmount();
    assert_eq!(f.window.listener_count(EventKind::Click), 0);

    f.popover.set_visible(true);
    f.popover.transition_end();
    click(&f.window, None, 900.0, 700.0);
    assert_eq!(f.requests.load(Ordering::SeqCst), 0);
}

#[test]
fn test_render() {
    let f = fixture(Rect::new(10.0, 10.0, 50.0, 20.0));
    f.popover.set_visible(true);
    let root = f.popover.render(vec![Element::text("Hello")]);
    assert_eq!(root.id.as_deref(), Some("menu"));
    assert!(root.has_class("popover"));
    assert!(root.has_class("visible"));
    assert_eq!(root.text_content(), "Hello");

    f.popover.set_visible(false);
    assert!(!f.popover.render(Vec::new()).has_class("visible"));
}
