mod scene;

use anyhow::Result;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::WindowId;

use pinwheel_engine::core::{App, AppControl, FrameCtx};
use pinwheel_engine::device::GpuInit;
use pinwheel_engine::logging::{init_logging, LoggingConfig};
use pinwheel_engine::window::{Runtime, RuntimeConfig};
use pinwheel_motion::Motion;

use scene::Scene;

const CLEAR: wgpu::Color = wgpu::Color::BLACK;

/// Frames between periodic transform reports at debug level.
const REPORT_EVERY: u64 = 120;

struct Demo {
    scene: Scene,
}

impl App for Demo {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::KeyboardInput { event, .. }
                if event.state == ElementState::Pressed
                    && event.physical_key == PhysicalKey::Code(KeyCode::Escape) =>
            {
                log::info!("escape pressed; exiting");
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let scene = &mut self.scene;
        let control = ctx.render(CLEAR, |rctx, target| {
            scene.update_and_draw(rctx, target);
        });

        if ctx.time.frame_index % REPORT_EVERY == 0 {
            let t = self.scene.transform();
            log::debug!(
                "frame {}: heading={:.3} pos=({:.3}, {:.3})",
                ctx.time.frame_index,
                t.heading(),
                t.position().x,
                t.position().y
            );
        }

        control
    }
}

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let motion = Motion::default();
    log::info!(
        "pinwheel: speed={} turn={} rad/s scale=({}, {})",
        motion.forward_speed,
        motion.angular_speed,
        motion.scale.x,
        motion.scale.y
    );

    let demo = Demo {
        scene: Scene::new(motion),
    };

    Runtime::run(
        RuntimeConfig::new("Pinwheel", 800.0, 800.0),
        GpuInit::default(),
        demo,
    )
}
