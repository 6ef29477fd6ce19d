use std::sync::Arc;

use statue_core::{Renderer, Session, SessionParams};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Statue hero (native)")
            .with_inner_size(LogicalSize::new(1280.0, 720.0))
            .build(&event_loop)?,
    );
    let size = window.inner_size();

    let mut session = Session::new(SessionParams {
        seed: rand::random(),
        width: size.width.max(1),
        height: size.height.max(1),
    })?;
    let mut renderer = pollster::block_on(Renderer::new(
        window.clone(),
        size.width,
        size.height,
        &session.scene,
    ))?;
    log::info!("[native] renderer ready; press G to toggle the gold highlight");

    session.begin_entrance(session.now());
    let mut gold = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    session.resize(size.width, size.height);
                    renderer.resize(size.width, size.height);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                session.pointer_moved(position.x as f32, position.y as f32);
            }
            WindowEvent::KeyboardInput { event, .. } if event.state == ElementState::Pressed => {
                match event.logical_key.as_ref() {
                    // stands in for hovering the page's call-to-action
                    Key::Character("g") | Key::Character("G") if !event.repeat => {
                        gold = !gold;
                        session.set_cta_hovered(gold, session.now());
                    }
                    Key::Named(NamedKey::Escape) => elwt.exit(),
                    _ => {}
                }
            }
            WindowEvent::RedrawRequested => {
                session.tick(session.now());
                match renderer.render(&session.scene, &session.camera, &session.lights) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        renderer.reconfigure()
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[gpu] frame skipped: {e:?}"),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
