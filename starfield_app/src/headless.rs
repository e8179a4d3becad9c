//! Headless presentation: a renderer that logs what it would draw and a
//! display that refreshes at a fixed rate

use std::thread;
use std::time::{Duration, Instant};

use starfield_engine::prelude::*;

/// Renderer that reports scene changes through the log instead of drawing
#[derive(Debug, Default)]
pub struct LogRenderer {
    fading: usize,
}

impl Renderer for LogRenderer {
    fn render(&mut self, scene: &dyn SceneGraph, report: &FrameReport) -> Result<(), RenderError> {
        let fading = scene.nodes().filter(|(_, node)| node.opacity() < 1.0).count();

        if report.spawned > 0 || report.removed > 0 || fading != self.fading {
            log::debug!(
                "Frame {} at {} ms: {} nodes ({} fading), +{} -{}",
                report.frame,
                report.now_ms,
                scene.node_count(),
                fading,
                report.spawned,
                report.removed
            );
        }
        log::trace!("Frame {} rendered in {} ms step", report.frame, report.delta_ms);

        self.fading = fading;
        Ok(())
    }
}

/// Fixed-rate refresh, optionally closing after a set run time
#[derive(Debug)]
pub struct FixedRateDisplay {
    frame_interval: Duration,
    next_deadline: Option<Instant>,
    closes_at: Option<Instant>,
}

impl FixedRateDisplay {
    /// Refresh `target_fps` times per second until `run_for` has elapsed (forever if `None`)
    pub fn new(target_fps: u32, run_for: Option<Duration>) -> Self {
        let now = Instant::now();
        Self {
            frame_interval: Duration::from_secs(1) / target_fps.max(1),
            next_deadline: None,
            closes_at: run_for.map(|duration| now + duration),
        }
    }
}

impl FrameScheduler for FixedRateDisplay {
    fn next_frame(&mut self) -> bool {
        let now = Instant::now();
        if self.closes_at.is_some_and(|closes_at| now >= closes_at) {
            log::info!("Display closed");
            return false;
        }

        let deadline = self.next_deadline.unwrap_or(now);
        if deadline > now {
            thread::sleep(deadline - now);
        }
        // Late frames re-anchor instead of bursting to catch up.
        self.next_deadline = Some(deadline.max(now) + self.frame_interval);
        true
    }
}
