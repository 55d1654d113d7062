use flickable::{
    Axis, ChangeCause, FlickDirection, GestureState, GestureTracker, PointerSample, SegmentChange,
    SegmentController, SegmentGeometry, SegmentObserver,
};

#[derive(Default)]
struct Recorder {
    changes: Vec<SegmentChange>,
    flicks: Vec<FlickDirection>,
}

impl SegmentObserver for Recorder {
    fn on_segment_change(&mut self, change: SegmentChange) {
        self.changes.push(change);
    }

    fn on_flick(&mut self, direction: FlickDirection) {
        self.flicks.push(direction);
    }
}

fn controller(axis: Axis, start: usize) -> SegmentController<Recorder> {
    let geometry = SegmentGeometry::new(axis, 5, 100.0).unwrap();
    SegmentController::new(geometry, start, Recorder::default()).unwrap()
}

fn released(dx: f32, dy: f32, duration_ms: u64) -> GestureState {
    let tracker = GestureTracker::default();
    let mut state = tracker.begin(PointerSample::new(0.0, 0.0, 0));
    tracker
        .end(&mut state, PointerSample::new(dx, dy, duration_ms))
        .unwrap();
    state
}

#[test]
fn test_construction_is_silent() {
    let ctrl = controller(Axis::X, 2);

    assert!(ctrl.observer().changes.is_empty());
    assert!(ctrl.observer().flicks.is_empty());
}

#[test]
fn test_drag_settle_reports_drag_cause() {
    let mut ctrl = controller(Axis::X, 0);
    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(-260.0, 0.0, 2_600)).unwrap();

    assert_eq!(
        ctrl.observer().changes,
        vec![SegmentChange {
            previous: 0,
            current: 3,
            cause: ChangeCause::Drag,
        }]
    );
    assert!(ctrl.observer().flicks.is_empty());
}

#[test]
fn test_snap_back_is_still_reported() {
    let mut ctrl = controller(Axis::X, 2);
    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(-20.0, 0.0, 1_000)).unwrap();

    let change = ctrl.observer().changes[0];
    assert_eq!(change.previous, 2);
    assert_eq!(change.current, 2);
    assert!(change.is_noop());
}

#[test]
fn test_flick_reports_direction_then_change() {
    let mut ctrl = controller(Axis::X, 1);

    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(-30.0, 0.0, 10)).unwrap();
    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(30.0, 0.0, 10)).unwrap();

    let recorder = ctrl.into_observer();
    assert_eq!(recorder.flicks, vec![FlickDirection::Left, FlickDirection::Right]);
    assert_eq!(
        recorder.changes,
        vec![
            SegmentChange {
                previous: 1,
                current: 2,
                cause: ChangeCause::Flick,
            },
            SegmentChange {
                previous: 2,
                current: 1,
                cause: ChangeCause::Flick,
            },
        ]
    );
}

#[test]
fn test_vertical_flicks() {
    let mut ctrl = controller(Axis::Y, 2);

    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(0.0, -30.0, 10)).unwrap();
    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(0.0, 30.0, 10)).unwrap();

    assert_eq!(ctrl.observer().flicks, vec![FlickDirection::Up, FlickDirection::Down]);
    assert_eq!(ctrl.current_segment(), 2);
}

#[test]
fn test_flick_at_last_segment_is_noop_change() {
    let mut ctrl = controller(Axis::X, 4);
    ctrl.on_drag_start();
    ctrl.on_drag_end(&released(-30.0, 0.0, 10)).unwrap();

    assert_eq!(ctrl.observer().flicks, vec![FlickDirection::Left]);
    assert_eq!(
        ctrl.observer().changes,
        vec![SegmentChange {
            previous: 4,
            current: 4,
            cause: ChangeCause::Flick,
        }]
    );
}

#[test]
fn test_programmatic_changes() {
    let mut ctrl = controller(Axis::X, 0);

    ctrl.go_to_segment(3);
    ctrl.next_segment();
    ctrl.next_segment();
    ctrl.prev_segment();

    let currents: Vec<usize> = ctrl.observer().changes.iter().map(|c| c.current).collect();
    assert_eq!(currents, vec![3, 4, 4, 3]);
    assert!(
        ctrl.observer()
            .changes
            .iter()
            .all(|c| c.cause == ChangeCause::Programmatic)
    );
}

#[test]
fn test_borrowed_observer() {
    let mut recorder = Recorder::default();

    {
        let geometry = SegmentGeometry::new(Axis::X, 3, 50.0).unwrap();
        let mut ctrl = SegmentController::new(geometry, 0, &mut recorder).unwrap();
        ctrl.next_segment();
    }

    assert_eq!(recorder.changes.len(), 1);
    assert_eq!(recorder.changes[0].current, 1);
}
