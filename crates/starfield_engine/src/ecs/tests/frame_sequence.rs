//! Full render loop scenarios on a manual clock

use std::cell::RefCell;
use std::iter;
use std::rc::Rc;

use approx::assert_relative_eq;

use super::support::{RecordingRenderer, RenderedFrame, ScriptedLoader, SharedDeferredLoader};
use crate::assets::AssetLoader;
use crate::config::StarfieldConfig;
use crate::ecs::components::FadeState;
use crate::engine::RenderLoop;
use crate::foundation::time::{Clock, ManualClock};
use crate::scene::SimpleSceneGraph;

type Frames = Rc<RefCell<Vec<RenderedFrame>>>;

fn render_loop(loader: impl AssetLoader + 'static) -> (ManualClock, RenderLoop<ManualClock>, Frames) {
    let clock = ManualClock::default();
    let renderer = RecordingRenderer::default();
    let frames = renderer.frames.clone();
    let render_loop = RenderLoop::new(
        &StarfieldConfig::default(),
        clock.clone(),
        SimpleSceneGraph::new(),
        Box::new(loader),
        Box::new(renderer),
    )
    .expect("default config is valid")
    .with_seed(11);

    (clock, render_loop, frames)
}

/// Loader where only the first request succeeds
fn single_star_loader() -> ScriptedLoader {
    ScriptedLoader::new(iter::once(true).chain(iter::repeat(false).take(64)))
}

fn frame_at(frames: &Frames, now_ms: u64) -> RenderedFrame {
    frames
        .borrow()
        .iter()
        .find(|frame| frame.report.now_ms == now_ms)
        .cloned()
        .expect("frame rendered at that time")
}

#[test]
fn test_steady_state_population() {
    let (clock, mut render_loop, frames) = render_loop(ScriptedLoader::always_ok());

    while clock.now_ms() < 20_000 {
        clock.advance(16);
        render_loop.tick().expect("tick");
    }

    let frames = frames.borrow();
    let spawn_times: Vec<u64> = frames
        .iter()
        .filter(|frame| frame.report.spawned > 0)
        .map(|frame| frame.report.now_ms)
        .collect();
    assert_eq!(&spawn_times[..5], &[2_000, 4_000, 6_000, 8_000, 10_000]);

    for frame in frames.iter() {
        assert_eq!(frame.node_count, frame.report.live);
        assert!(frame.opacities.iter().all(|opacity| (0.0..=1.0).contains(opacity)));
        if frame.report.now_ms >= 10_000 {
            assert_eq!(frame.report.live, 5, "population at {} ms", frame.report.now_ms);
        }
    }
    assert_eq!(render_loop.spawn_stats().registered, 10);
}

#[test]
fn test_single_object_timeline() {
    let (clock, mut render_loop, frames) = render_loop(single_star_loader());

    for now in [2_000, 9_999, 10_000, 11_000, 11_999, 12_000, 12_016] {
        clock.set(now);
        render_loop.tick().expect("tick");
    }

    assert_eq!(frame_at(&frames, 2_000).opacities, vec![1.0]);
    assert_eq!(frame_at(&frames, 9_999).opacities, vec![1.0]);
    assert_eq!(frame_at(&frames, 10_000).opacities, vec![1.0]);

    let mid_fade = frame_at(&frames, 11_000);
    assert_relative_eq!(mid_fade.opacities[0], 0.5);

    let last_visible = frame_at(&frames, 11_999);
    assert!(last_visible.opacities[0] > 0.0);
    assert!(last_visible.opacities[0] < mid_fade.opacities[0]);

    let removal = frame_at(&frames, 12_000);
    assert_eq!(removal.report.removed, 1);
    assert_eq!(removal.node_count, 0);
    assert!(render_loop.registry().is_empty());
    assert_eq!(render_loop.spawn_stats().failed, 5);
}

#[test]
fn test_fade_state_visible_through_registry() {
    let (clock, mut render_loop, _frames) = render_loop(single_star_loader());

    clock.set(2_000);
    render_loop.tick().expect("tick");
    clock.set(10_500);
    render_loop.tick().expect("tick");

    let (_, object) = render_loop.registry().iter().next().expect("still live");
    assert_eq!(object.state(), FadeState::Fading);
    assert_relative_eq!(object.opacity(), 0.75);
    assert!(object.animation.action("fly").is_some());
}

#[test]
fn test_long_pause_removes_and_catches_up() {
    let (clock, mut render_loop, frames) = render_loop(ScriptedLoader::always_ok());

    clock.set(2_000);
    render_loop.tick().expect("tick");
    assert_eq!(render_loop.registry().len(), 1);

    clock.set(30_000);
    let report = render_loop.tick().expect("tick");

    assert_eq!(report.delta_ms, 28_000);
    assert_eq!(report.removed, 1);
    assert_eq!(report.spawns_fired, 14);
    assert_eq!(report.spawned, 14);
    assert_eq!(report.live, 14);

    let frame = frame_at(&frames, 30_000);
    assert!(frame.opacities.iter().all(|&opacity| opacity == 1.0));
}

#[test]
fn test_pending_loads_do_not_block_frames() {
    let loader = SharedDeferredLoader::default();
    let (clock, mut render_loop, frames) = render_loop(loader.clone());

    clock.set(2_000);
    let report = render_loop.tick().expect("tick");
    assert_eq!((report.spawns_fired, report.spawned), (1, 0));
    assert_eq!(render_loop.loads_in_flight(), 1);

    clock.set(2_500);
    render_loop.tick().expect("tick");
    assert_eq!(frame_at(&frames, 2_500).node_count, 0);

    loader.0.borrow_mut().complete_last();
    clock.set(3_000);
    assert_eq!(render_loop.tick().expect("tick").spawned, 1);

    let (_, object) = render_loop.registry().iter().next().expect("registered");
    assert_eq!(object.fade.created_at_ms(), 3_000);

    clock.set(12_999);
    render_loop.tick().expect("tick");
    assert_eq!(render_loop.registry().len(), 1);

    clock.set(13_000);
    assert_eq!(render_loop.tick().expect("tick").removed, 1);
    assert!(render_loop.registry().is_empty());
    assert_eq!(render_loop.loads_in_flight(), 5);
}

#[test]
fn test_failed_loads_leave_scene_untouched() {
    let (clock, mut render_loop, frames) = render_loop(ScriptedLoader::new(iter::repeat(false).take(8)));

    while clock.now_ms() < 8_000 {
        clock.advance(100);
        render_loop.tick().expect("tick");
    }

    assert!(frames.borrow().iter().all(|frame| frame.node_count == 0));
    let stats = render_loop.spawn_stats();
    assert_eq!((stats.fired, stats.registered, stats.failed), (4, 0, 4));
}
