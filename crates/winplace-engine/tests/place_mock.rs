//! Engine behavior against the mock desktop: placement semantics, call
//! ordering, and the launch/resolve/wait protocol.

use std::{sync::Arc, time::Duration};

use winplace_engine::{
    DesktopOps, Error, Frame, LaunchCommand, MockDesktopOps, MonitorLayout, MonitorRect,
    PlaceOptions, PlacedProgram, ResolveSettings, WindowId, WindowInfo,
};

fn monitor() -> MonitorRect {
    MonitorRect::new(0, 0, 1920, 1080).unwrap()
}

fn explorer_window() -> WindowInfo {
    WindowInfo {
        title: "File Explorer - Documents".to_string(),
        id: WindowId::new(0x10),
    }
}

fn program(ops: &Arc<MockDesktopOps>) -> PlacedProgram {
    PlacedProgram::new(
        "Explorer",
        LaunchCommand::new("C:/Windows/explorer.exe"),
        monitor(),
        Arc::clone(ops) as Arc<dyn DesktopOps>,
    )
}

fn quick_resolve() -> ResolveSettings {
    ResolveSettings {
        timeout: Duration::from_secs(5),
        interval: Duration::from_millis(1),
    }
}

#[test]
fn place_before_launch_is_a_silent_noop() {
    let ops = Arc::new(MockDesktopOps::new());
    let prog = program(&ops);

    prog.place_window(PlaceOptions::default()).unwrap();

    assert!(prog.window().is_none());
    assert!(!ops.calls_contains("set_frame"));
    assert!(!ops.calls_contains("maximize"));
}

#[test]
fn place_after_resolver_timeout_is_a_silent_noop() {
    let ops = Arc::new(MockDesktopOps::new());
    // No window ever appears.
    let prog = program(&ops).with_resolve_settings(ResolveSettings {
        timeout: Duration::from_millis(50),
        interval: Duration::from_millis(1),
    });

    let handle = prog.launch().unwrap();
    assert_eq!(handle.wait(Duration::from_secs(2)), None);
    handle.join();

    prog.place_window(PlaceOptions::default()).unwrap();
    assert!(!ops.calls_contains("set_frame"));
    assert!(!ops.calls_contains("maximize"));
}

#[test]
fn placement_issues_frame_then_maximize() {
    let ops = Arc::new(MockDesktopOps::new());
    ops.set_windows(vec![explorer_window()]);
    let prog = program(&ops).with_resolve_settings(quick_resolve());

    let handle = prog.launch().unwrap();
    let id = handle.wait(Duration::from_secs(5)).expect("resolved");
    assert_eq!(id, WindowId::new(0x10));
    assert_eq!(prog.window(), Some(id));

    prog.place_window(PlaceOptions::default()).unwrap();

    assert_eq!(
        ops.frames(),
        vec![(
            id,
            Frame {
                x: 240,
                y: 135,
                width: 1440,
                height: 810
            }
        )]
    );
    assert_eq!(ops.maximized(), vec![id]);

    // The positioning call always precedes the maximize call.
    let calls = ops.calls();
    let frame_at = calls.iter().position(|c| c == "set_frame").unwrap();
    let max_at = calls.iter().position(|c| c == "maximize").unwrap();
    assert!(frame_at < max_at);
}

#[test]
fn maximize_false_skips_the_second_call() {
    let ops = Arc::new(MockDesktopOps::new());
    ops.set_windows(vec![explorer_window()]);
    let prog = program(&ops).with_resolve_settings(quick_resolve());

    let handle = prog.launch().unwrap();
    handle.wait(Duration::from_secs(5)).expect("resolved");

    prog.place_window(PlaceOptions {
        maximize: false,
        ..PlaceOptions::default()
    })
    .unwrap();

    assert!(ops.calls_contains("set_frame"));
    assert!(!ops.calls_contains("maximize"));
}

#[test]
fn repeated_placement_is_identical() {
    let ops = Arc::new(MockDesktopOps::new());
    ops.set_windows(vec![explorer_window()]);
    let prog = program(&ops).with_resolve_settings(quick_resolve());

    let handle = prog.launch().unwrap();
    let id = handle.wait(Duration::from_secs(5)).expect("resolved");

    let options = PlaceOptions {
        width_pct: 0.5,
        height_pct: 0.5,
        maximize: false,
    };
    prog.place_window(options).unwrap();
    prog.place_window(options).unwrap();

    let expected = (
        id,
        Frame {
            x: 480,
            y: 270,
            width: 960,
            height: 540,
        },
    );
    assert_eq!(ops.frames(), vec![expected, expected]);
}

#[test]
fn full_size_placement_covers_the_monitor() {
    let ops = Arc::new(MockDesktopOps::new());
    ops.set_windows(vec![explorer_window()]);
    let prog = program(&ops).with_resolve_settings(quick_resolve());

    let handle = prog.launch().unwrap();
    let id = handle.wait(Duration::from_secs(5)).expect("resolved");

    prog.place_window(PlaceOptions {
        width_pct: 1.0,
        height_pct: 1.0,
        maximize: false,
    })
    .unwrap();

    assert_eq!(
        ops.frames(),
        vec![(
            id,
            Frame {
                x: 0,
                y: 0,
                width: 1920,
                height: 1080
            }
        )]
    );
}

#[test]
fn window_appearing_after_a_few_polls_resolves() {
    let ops = Arc::new(MockDesktopOps::new());
    // Three empty snapshots before the window shows up.
    ops.push_listing(Vec::new());
    ops.push_listing(Vec::new());
    ops.push_listing(Vec::new());
    ops.set_windows(vec![explorer_window()]);
    let prog = program(&ops).with_resolve_settings(quick_resolve());

    let handle = prog.launch().unwrap();
    assert_eq!(
        handle.wait(Duration::from_secs(5)),
        Some(WindowId::new(0x10))
    );
}

#[test]
fn caller_timeout_does_not_stop_the_resolver() {
    let ops = Arc::new(MockDesktopOps::new());
    for _ in 0..10 {
        ops.push_listing(Vec::new());
    }
    ops.set_windows(vec![explorer_window()]);
    let prog = program(&ops).with_resolve_settings(ResolveSettings {
        timeout: Duration::from_secs(10),
        interval: Duration::from_millis(100),
    });

    let handle = prog.launch().unwrap();
    // Ten empty snapshots at 100ms apart: a 10ms wait always times out.
    assert_eq!(handle.wait(Duration::from_millis(10)), None);
    prog.place_window(PlaceOptions::default()).unwrap();
    assert!(!ops.calls_contains("set_frame"));

    // The resolver kept polling; a later wait observes the resolution and
    // placement goes through.
    let id = handle.wait(Duration::from_secs(10)).expect("late resolution");
    prog.place_window(PlaceOptions::default()).unwrap();
    assert_eq!(ops.frames().len(), 1);
    assert_eq!(ops.frames()[0].0, id);
}

#[test]
fn layout_comes_from_the_injected_monitor_listing() {
    let ops = Arc::new(MockDesktopOps::new());
    let side = MonitorRect::new(-1920, 0, 0, 1080).unwrap();
    ops.set_monitors(vec![
        MonitorRect::new(0, 0, 1920, 1080).unwrap(),
        side,
        MonitorRect::new(1920, 0, 3360, 900).unwrap(),
    ]);

    let layout = MonitorLayout::classify(&ops.list_monitors());
    assert_eq!(layout.count(), 3);
    assert_eq!(layout.default_target(), Some(side));
    assert!(ops.calls_contains("list_monitors"));
}

#[test]
fn spawn_failure_propagates() {
    let ops = Arc::new(MockDesktopOps::new());
    ops.set_fail_spawn(true);
    let prog = program(&ops);

    let err = prog.launch().unwrap_err();
    assert!(matches!(err, Error::Spawn { .. }));
    // No resolver was started.
    assert!(!ops.calls_contains("list_windows"));
}

#[test]
fn backend_placement_failure_propagates() {
    let ops = Arc::new(MockDesktopOps::new());
    ops.set_windows(vec![explorer_window()]);
    ops.set_fail_frame(true);
    let prog = program(&ops).with_resolve_settings(quick_resolve());

    let handle = prog.launch().unwrap();
    handle.wait(Duration::from_secs(5)).expect("resolved");

    let err = prog.place_window(PlaceOptions::default()).unwrap_err();
    assert!(matches!(err, Error::OsCall { .. }));
    // The failed positioning call means maximize never ran.
    assert!(!ops.calls_contains("maximize"));
}
